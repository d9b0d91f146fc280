#![allow(dead_code)]

//! Test infrastructure for cs-server API tests

use cs_config::{AdminConfig, ValidationConfig};
use cs_core::ClientIdentity;
use cs_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "test-admin-token-0123456789";

/// Create AppState for testing, backed by an in-memory registry
pub async fn create_test_app_state(admin_token: Option<&str>) -> AppState {
    let pool = cs_db::open_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState {
        pool,
        validation: ValidationConfig::default(),
        admin: AdminConfig {
            token: admin_token.map(String::from),
        },
    }
}

pub async fn create_test_app(admin_token: Option<&str>) -> Router {
    build_router(create_test_app_state(admin_token).await)
}

pub fn new_identity() -> String {
    ClientIdentity::generate().to_string()
}

/// Sends one request and decodes the JSON body (Null for non-JSON bodies)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn bind(app: &Router, identity: &str, name: &str, class: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            "POST",
            "/api/user/sync",
            serde_json::json!({ "identity": identity, "name": name, "class": class }),
        ),
    )
    .await
}
