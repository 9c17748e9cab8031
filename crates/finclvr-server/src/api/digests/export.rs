//! Export acknowledgement. No delivery happens; the response only confirms
//! the request was well formed and the digest exists.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::super::{parse_body, parse_id, ApiError, AppState};
use super::resolve_digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(in crate::api) enum ExportTarget {
    Slack,
    Notion,
    Pdf,
}

impl ExportTarget {
    fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::Notion => "notion",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ExportRequest {
    #[serde(rename = "type")]
    pub target: ExportTarget,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ExportResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub target: ExportTarget,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub(in crate::api) async fn export_digest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Json<ExportResponse>, ApiError> {
    let id = parse_id(&req_id.0, path)?;
    // Existence is checked before the body so an unknown digest is always a 404.
    let digest = resolve_digest(&state, id, &req_id.0)?;
    let request = parse_body(&req_id.0, body, "Invalid export request")?;

    tracing::info!(
        digest_id = digest.id,
        target = request.target.as_str(),
        "digest exported"
    );
    Ok(Json(ExportResponse {
        success: true,
        target: request.target,
        message: format!(
            "Digest exported to {} successfully!",
            request.target.as_str()
        ),
        timestamp: Utc::now(),
    }))
}
