use axum::{
    extract::rejection::PathRejection,
    extract::{Path, State},
    Extension, Json,
};
use finclvr_core::{DashboardMetrics, Digest, DigestMetric};

use crate::middleware::RequestId;

use super::super::{parse_id, ApiError, AppState};
use super::resolve_digest;

/// Digests belonging to the brand in the path, oldest first.
pub(in crate::api) async fn list_digests(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Digest>>, ApiError> {
    let brand_id = parse_id(&req_id.0, path)?;
    Ok(Json(state.store.get_digests_by_brand_id(brand_id)))
}

pub(in crate::api) async fn get_digest_metrics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DigestMetric>, ApiError> {
    let id = parse_id(&req_id.0, path)?;
    let digest = resolve_digest(&state, id, &req_id.0)?;

    // Hand-created digests have no metrics row.
    state
        .store
        .get_digest_metrics(digest.id)
        .map(Json)
        .ok_or_else(|| ApiError::new(&req_id.0, "not_found", "Digest metrics not found"))
}

pub(in crate::api) async fn get_digest_dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DashboardMetrics>, ApiError> {
    let id = parse_id(&req_id.0, path)?;
    let digest = resolve_digest(&state, id, &req_id.0)?;
    Ok(Json(DashboardMetrics::from_content(&digest.content)))
}
