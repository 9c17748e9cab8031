mod brands;
mod digests;
mod users;

use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::Path,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use finclvr_core::AppConfig;
use finclvr_store::{MemStore, StoreError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
    pub config: Arc<AppConfig>,
}

/// Error body returned by every failing route.
///
/// `message` is deliberately generic; `code` selects the HTTP status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub message: String,
    pub code: String,
    pub request_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    storage: &'static str,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            request_id: request_id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Unwrap a JSON body, turning any extractor rejection into a generic 400.
pub(super) fn parse_body<T>(
    request_id: &str,
    body: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected request body");
            Err(ApiError::new(request_id, "validation_error", message))
        }
    }
}

/// Unwrap an integer path segment, turning a parse failure into a 400.
pub(super) fn parse_id(
    request_id: &str,
    path: Result<Path<i64>, PathRejection>,
) -> Result<i64, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected path parameter");
            Err(ApiError::new(
                request_id,
                "bad_request",
                "identifier must be an integer",
            ))
        }
    }
}

pub(super) fn map_store_error(request_id: &str, error: &StoreError, message: &str) -> ApiError {
    tracing::error!(error = %error, "store write failed");
    ApiError::new(request_id, "internal_error", message)
}

/// Trim `value`, returning `None` if nothing is left.
pub(super) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

// Routes that share a prefix segment must share the parameter name, so
// `/api/digests/{id}` carries a brand id on GET and a digest id below it.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/users", post(users::create_user))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/brands", post(brands::create_brand))
        .route("/api/brands/{user_id}", get(brands::list_brands))
        .route("/api/digests", post(digests::create_digest))
        .route("/api/digests/generate", post(digests::generate_digest))
        .route("/api/digests/{id}", get(digests::list_digests))
        .route(
            "/api/digests/{id}/metrics",
            get(digests::get_digest_metrics),
        )
        .route(
            "/api/digests/{id}/dashboard",
            get(digests::get_digest_dashboard),
        )
        .route("/api/digests/{id}/export", post(digests::export_digest))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthData {
            status: "ok",
            storage: "memory",
        }),
    )
}

#[cfg(test)]
mod tests;
