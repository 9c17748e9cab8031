use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use finclvr_core::AppConfig;
use finclvr_store::{seed_demo_user, MemStore};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{build_app, AppState};
use crate::middleware::REQUEST_ID_HEADER;

struct TestResponse {
    status: StatusCode,
    request_id: Option<String>,
    json: Value,
}

fn test_app() -> Router {
    let store = Arc::new(MemStore::new());
    seed_demo_user(&store).expect("seed demo user");
    build_app(AppState {
        store,
        config: Arc::new(AppConfig::default()),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json parse")
    };

    TestResponse {
        status,
        request_id,
        json,
    }
}

async fn create_brand(app: &Router, user_id: i64, name: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/brands",
        Some(json!({
            "userId": user_id,
            "name": name,
            "niche": "finance",
            "tone": "professional",
            "colorPreferences": ["navy", "gold"],
            "audienceDescription": "retail investors"
        })),
    )
    .await
}

async fn generate(app: &Router, brand_id: i64, niche: Option<&str>) -> TestResponse {
    let body = match niche {
        Some(niche) => json!({ "brandId": brand_id, "niche": niche }),
        None => json!({ "brandId": brand_id }),
    };
    send(app, Method::POST, "/api/digests/generate", Some(body)).await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let res = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["status"], "ok");
}

#[tokio::test]
async fn request_id_is_generated_or_echoed() {
    let app = test_app();
    let res = send(&app, Method::GET, "/api/health", None).await;
    let generated = res.request_id.expect("generated request id");
    assert!(uuid::Uuid::parse_str(&generated).is_ok());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/brands/1")
                .header(REQUEST_ID_HEADER, "client-supplied-7")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "client-supplied-7"
    );
}

#[tokio::test]
async fn brand_ids_increase_and_list_in_order() {
    let app = test_app();
    let first = create_brand(&app, 1, "Alpha Capital").await;
    let second = create_brand(&app, 1, "Beta Markets").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    let (a, b) = (
        first.json["id"].as_i64().unwrap(),
        second.json["id"].as_i64().unwrap(),
    );
    assert!(b > a, "ids must strictly increase: {a} then {b}");
    assert_eq!(first.json["colorPreferences"], json!(["navy", "gold"]));

    let list = send(&app, Method::GET, "/api/brands/1", None).await;
    let names: Vec<&str> = list
        .json
        .as_array()
        .expect("brand array")
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha Capital", "Beta Markets"]);
}

#[tokio::test]
async fn listing_brands_for_user_without_any_is_empty() {
    let app = test_app();
    let res = send(&app, Method::GET, "/api/brands/999", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json, json!([]));
}

#[tokio::test]
async fn invalid_brand_bodies_are_rejected() {
    let app = test_app();

    let blank_name = send(
        &app,
        Method::POST,
        "/api/brands",
        Some(json!({ "userId": 1, "name": "  ", "niche": "finance", "tone": "calm" })),
    )
    .await;
    assert_eq!(blank_name.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank_name.json["message"], "Invalid brand data");
    assert_eq!(blank_name.json["code"], "validation_error");

    let missing_fields = send(
        &app,
        Method::POST,
        "/api/brands",
        Some(json!({ "userId": 1 })),
    )
    .await;
    assert_eq!(missing_fields.status, StatusCode::BAD_REQUEST);

    let unknown_user = create_brand(&app, 42, "Orphan").await;
    assert_eq!(unknown_user.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.json["message"], "Invalid brand data");

    let listed = send(&app, Method::GET, "/api/brands/42", None).await;
    assert_eq!(listed.json, json!([]));
}

#[tokio::test]
async fn non_integer_path_ids_are_rejected() {
    let app = test_app();
    for uri in [
        "/api/brands/abc",
        "/api/digests/abc",
        "/api/digests/1.5/metrics",
        "/api/users/me",
    ] {
        let res = send(&app, Method::GET, uri, None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(res.json["code"], "bad_request", "{uri}");
    }
}

#[tokio::test]
async fn generate_finance_digest_and_read_it_back() {
    let app = test_app();
    let brand_id = create_brand(&app, 1, "Alpha Capital").await.json["id"]
        .as_i64()
        .unwrap();

    let generated = generate(&app, brand_id, Some("finance")).await;
    assert_eq!(generated.status, StatusCode::OK);
    let digest = generated.json;
    assert!(digest["content"]["summary"]
        .as_str()
        .unwrap()
        .contains("financial"));
    assert_eq!(digest["content"]["topYouTubeVideos"].as_array().unwrap().len(), 5);
    assert_eq!(digest["isPublished"], true);
    assert!(digest["title"]
        .as_str()
        .unwrap()
        .starts_with("Social Digest - "));

    let listed = send(&app, Method::GET, &format!("/api/digests/{brand_id}"), None).await;
    let listed = listed.json.as_array().expect("digest array").clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"], digest["title"]);
    assert_eq!(listed[0]["content"], digest["content"]);

    let digest_id = digest["id"].as_i64().unwrap();
    let metrics = send(
        &app,
        Method::GET,
        &format!("/api/digests/{digest_id}/metrics"),
        None,
    )
    .await;
    assert_eq!(metrics.status, StatusCode::OK);
    assert_eq!(metrics.json["digestId"], digest_id);
    assert_eq!(metrics.json["positiveSentiment"], 78);
    assert_eq!(metrics.json["neutralSentiment"], 18);
    assert_eq!(metrics.json["negativeSentiment"], 4);

    let dashboard = send(
        &app,
        Method::GET,
        &format!("/api/digests/{digest_id}/dashboard"),
        None,
    )
    .await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.json["totalVideos"], 5);
    assert_eq!(dashboard.json["totalTweets"], 5);
    assert_eq!(dashboard.json["engagementTrend"], "up");
}

#[tokio::test]
async fn generate_without_niche_uses_configured_default() {
    let app = test_app();
    let brand_id = create_brand(&app, 1, "Alpha Capital").await.json["id"]
        .as_i64()
        .unwrap();

    let res = generate(&app, brand_id, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.json["content"]["summary"]
        .as_str()
        .unwrap()
        .contains("financial"));

    let tech = generate(&app, brand_id, Some("tech")).await;
    assert!(tech.json["content"]["summary"]
        .as_str()
        .unwrap()
        .contains("technology"));
}

#[tokio::test]
async fn generate_rejects_unknown_brand_and_bad_body() {
    let app = test_app();

    let unknown = generate(&app, 77, Some("finance")).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.json["message"], "Brand not found");

    let bad = send(
        &app,
        Method::POST,
        "/api/digests/generate",
        Some(json!({ "niche": "finance" })),
    )
    .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn manual_digest_requires_title_and_brand() {
    let app = test_app();
    let brand_id = create_brand(&app, 1, "Alpha Capital").await.json["id"]
        .as_i64()
        .unwrap();
    let content = serde_json::to_value(finclvr_core::generate_mock_digest("crypto")).unwrap();

    let created = send(
        &app,
        Method::POST,
        "/api/digests",
        Some(json!({ "brandId": brand_id, "title": "Weekly", "content": content })),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json["isPublished"], false);

    let blank_title = send(
        &app,
        Method::POST,
        "/api/digests",
        Some(json!({ "brandId": brand_id, "title": " ", "content": content })),
    )
    .await;
    assert_eq!(blank_title.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank_title.json["message"], "Invalid digest data");

    let unknown_brand = send(
        &app,
        Method::POST,
        "/api/digests",
        Some(json!({ "brandId": 500, "title": "Weekly", "content": content })),
    )
    .await;
    assert_eq!(unknown_brand.status, StatusCode::BAD_REQUEST);

    // Hand-created digests have no metrics row.
    let id = created.json["id"].as_i64().unwrap();
    let metrics = send(&app, Method::GET, &format!("/api/digests/{id}/metrics"), None).await;
    assert_eq!(metrics.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn manual_digest_rejects_partial_content() {
    let app = test_app();
    let brand_id = create_brand(&app, 1, "Alpha Capital").await.json["id"]
        .as_i64()
        .unwrap();

    let res = send(
        &app,
        Method::POST,
        "/api/digests",
        Some(json!({ "brandId": brand_id, "title": "Weekly", "content": { "summary": "x" } })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["message"], "Invalid digest data");

    let listed = send(&app, Method::GET, &format!("/api/digests/{brand_id}"), None).await;
    assert_eq!(listed.json, json!([]));
}

#[tokio::test]
async fn export_checks_digest_before_body() {
    let app = test_app();

    let missing = send(
        &app,
        Method::POST,
        "/api/digests/99999/export",
        Some(json!({ "type": "slack" })),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json["message"], "Digest not found");

    let missing_bad_body = send(
        &app,
        Method::POST,
        "/api/digests/99999/export",
        Some(json!({ "type": "fax" })),
    )
    .await;
    assert_eq!(missing_bad_body.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn export_acknowledges_known_targets() {
    let app = test_app();
    let brand_id = create_brand(&app, 1, "Alpha Capital").await.json["id"]
        .as_i64()
        .unwrap();
    let digest_id = generate(&app, brand_id, None).await.json["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/digests/{digest_id}/export");

    let ok = send(&app, Method::POST, &uri, Some(json!({ "type": "pdf" }))).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.json["success"], true);
    assert_eq!(ok.json["type"], "pdf");
    assert_eq!(ok.json["message"], "Digest exported to pdf successfully!");
    assert!(ok.json["timestamp"].is_string());

    let bad = send(&app, Method::POST, &uri, Some(json!({ "type": "fax" }))).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.json["message"], "Invalid export request");
}

#[tokio::test]
async fn users_register_once_per_email() {
    let app = test_app();
    let body = json!({ "username": "ada", "email": "Ada@Example.com", "password": "hunter2" });

    let created = send(&app, Method::POST, "/api/users", Some(body.clone())).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json["email"], "ada@example.com");
    assert!(created.json.get("password").is_none());

    let id = created.json["id"].as_i64().unwrap();
    let fetched = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(fetched.json["username"], "ada");

    let duplicate = send(&app, Method::POST, "/api/users", Some(body)).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let invalid = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "bob", "email": "not-an-email", "password": "x" })),
    )
    .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.json["message"], "Invalid user data");

    let missing = send(&app, Method::GET, "/api/users/404", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
