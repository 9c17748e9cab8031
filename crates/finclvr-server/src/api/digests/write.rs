//! Digest creation: hand-built payloads and generated samples.

use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use finclvr_core::{derive_digest_metrics, generate_mock_digest, Digest, NewDigest};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::super::{map_store_error, non_blank, parse_body, ApiError, AppState};

const INVALID_DIGEST: &str = "Invalid digest data";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::api) struct GenerateDigestRequest {
    pub brand_id: i64,
    #[serde(default)]
    pub niche: Option<String>,
}

/// Title given to generated digests, e.g. `Social Digest - 3/7/2026`.
fn generated_title(now: DateTime<Utc>) -> String {
    format!("Social Digest - {}", now.format("%-m/%-d/%Y"))
}

pub(in crate::api) async fn create_digest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<NewDigest>, JsonRejection>,
) -> Result<Json<Digest>, ApiError> {
    let mut new = parse_body(&req_id.0, body, INVALID_DIGEST)?;

    new.title = non_blank(&new.title)
        .ok_or_else(|| ApiError::new(&req_id.0, "validation_error", INVALID_DIGEST))?;

    if state.store.get_brand(new.brand_id).is_none() {
        tracing::warn!(brand_id = new.brand_id, "digest rejected: unknown brand");
        return Err(ApiError::new(&req_id.0, "validation_error", INVALID_DIGEST));
    }

    let digest = state
        .store
        .create_digest(new)
        .map_err(|e| map_store_error(&req_id.0, &e, "Failed to create digest"))?;

    tracing::info!(
        digest_id = digest.id,
        brand_id = digest.brand_id,
        "digest created"
    );
    Ok(Json(digest))
}

/// Generate a sample digest for a brand and record its metrics alongside it.
pub(in crate::api) async fn generate_digest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<GenerateDigestRequest>, JsonRejection>,
) -> Result<Json<Digest>, ApiError> {
    let body = parse_body(&req_id.0, body, INVALID_DIGEST)?;

    let Some(brand) = state.store.get_brand(body.brand_id) else {
        return Err(ApiError::new(&req_id.0, "not_found", "Brand not found"));
    };

    let niche = body
        .niche
        .as_deref()
        .and_then(non_blank)
        .unwrap_or_else(|| state.config.default_niche.clone());

    let new = NewDigest {
        brand_id: brand.id,
        title: generated_title(Utc::now()),
        content: generate_mock_digest(&niche),
        is_published: true,
    };

    let (digest, metric) = state
        .store
        .create_generated_digest(new, |d| derive_digest_metrics(d.id, &d.content))
        .map_err(|e| map_store_error(&req_id.0, &e, "Failed to generate digest"))?;

    tracing::info!(
        digest_id = digest.id,
        brand_id = brand.id,
        niche = %niche,
        viral_posts = metric.viral_posts,
        "digest generated"
    );
    Ok(Json(digest))
}
