//! Digest API handlers.
//!
//! - `POST /api/digests`               create a digest from a full payload
//! - `POST /api/digests/generate`      build a sample digest for a brand
//! - `GET  /api/digests/{id}`          digests for brand `id`
//! - `GET  /api/digests/{id}/metrics`  stored metrics row for digest `id`
//! - `GET  /api/digests/{id}/dashboard` summary numbers for digest `id`
//! - `POST /api/digests/{id}/export`   acknowledge an export request

mod export;
mod read;
mod write;

pub(super) use export::export_digest;
pub(super) use read::{get_digest_dashboard, get_digest_metrics, list_digests};
pub(super) use write::{create_digest, generate_digest};

use finclvr_core::Digest;

use super::{ApiError, AppState};

/// Look up a digest, returning 404 if it does not exist.
fn resolve_digest(state: &AppState, id: i64, request_id: &str) -> Result<Digest, ApiError> {
    state
        .store
        .get_digest(id)
        .ok_or_else(|| ApiError::new(request_id, "not_found", "Digest not found"))
}
