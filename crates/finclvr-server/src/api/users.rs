//! User registration and lookup.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Extension, Json,
};
use finclvr_core::{NewUser, User};

use crate::middleware::RequestId;

use super::{map_store_error, non_blank, parse_body, parse_id, ApiError, AppState};

const INVALID_USER: &str = "Invalid user data";

/// Trim and lowercase the email, then reject anything without a local part
/// and a domain around a single `@`.
fn normalize_email(value: &str) -> Option<String> {
    let email = non_blank(value)?.to_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(email)
}

fn validate_new_user(req_id: &str, body: NewUser) -> Result<NewUser, ApiError> {
    let invalid = || ApiError::new(req_id, "validation_error", INVALID_USER);

    let username = non_blank(&body.username).ok_or_else(invalid)?;
    let email = normalize_email(&body.email).ok_or_else(invalid)?;
    if body.password.is_empty() {
        return Err(invalid());
    }

    Ok(NewUser {
        username,
        email,
        password: body.password,
    })
}

pub(super) async fn create_user(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let body = parse_body(&req_id.0, body, INVALID_USER)?;
    let new = validate_new_user(&req_id.0, body)?;

    if state.store.get_user_by_email(&new.email).is_some() {
        tracing::warn!("registration rejected: email already registered");
        return Err(ApiError::new(
            &req_id.0,
            "conflict",
            "Email already registered",
        ));
    }

    let user = state
        .store
        .create_user(new)
        .map_err(|e| map_store_error(&req_id.0, &e, "Failed to create user"))?;

    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

pub(super) async fn get_user(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&req_id.0, path)?;
    state
        .store
        .get_user(id)
        .map(Json)
        .ok_or_else(|| ApiError::new(&req_id.0, "not_found", "User not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Ada@Example.COM "),
            Some("ada@example.com".to_string())
        );
    }

    #[test]
    fn normalize_email_rejects_malformed_values() {
        for raw in ["", "   ", "ada", "@example.com", "ada@", "a@b@c"] {
            assert_eq!(normalize_email(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn validate_new_user_requires_password() {
        let err = validate_new_user(
            "req-1",
            NewUser {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password: String::new(),
            },
        )
        .unwrap_err();
        assert_eq!(err.message, INVALID_USER);
        assert_eq!(err.code, "validation_error");
    }
}
