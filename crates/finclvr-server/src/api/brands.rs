//! Brand profiles created during onboarding.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Extension, Json,
};
use finclvr_core::{Brand, NewBrand};

use crate::middleware::RequestId;

use super::{map_store_error, non_blank, parse_body, parse_id, ApiError, AppState};

const INVALID_BRAND: &str = "Invalid brand data";

fn validate_new_brand(req_id: &str, body: NewBrand) -> Result<NewBrand, ApiError> {
    let invalid = || ApiError::new(req_id, "validation_error", INVALID_BRAND);

    let name = non_blank(&body.name).ok_or_else(invalid)?;
    let niche = non_blank(&body.niche).ok_or_else(invalid)?;
    let tone = non_blank(&body.tone).ok_or_else(invalid)?;

    Ok(NewBrand {
        user_id: body.user_id,
        name,
        niche,
        tone,
        color_preferences: body.color_preferences,
        audience_description: body.audience_description.as_deref().and_then(non_blank),
    })
}

pub(super) async fn create_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<NewBrand>, JsonRejection>,
) -> Result<Json<Brand>, ApiError> {
    let body = parse_body(&req_id.0, body, INVALID_BRAND)?;
    let new = validate_new_brand(&req_id.0, body)?;

    if state.store.get_user(new.user_id).is_none() {
        tracing::warn!(user_id = new.user_id, "brand rejected: unknown user");
        return Err(ApiError::new(&req_id.0, "validation_error", INVALID_BRAND));
    }

    let brand = state
        .store
        .create_brand(new)
        .map_err(|e| map_store_error(&req_id.0, &e, "Failed to create brand"))?;

    tracing::info!(
        brand_id = brand.id,
        user_id = brand.user_id,
        "brand created"
    );
    Ok(Json(brand))
}

pub(super) async fn list_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Brand>>, ApiError> {
    let user_id = parse_id(&req_id.0, path)?;
    Ok(Json(state.store.get_brands_by_user_id(user_id)))
}
