use crate::ApiError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_code() {
    let (status, json) = body_json(ApiError::not_found("Identity 1 is not bound")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Identity 1 is not bound");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("name is required", Some("name"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_name_conflict_returns_409() {
    let (status, json) = body_json(ApiError::name_conflict("taken")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "NAME_CONFLICT");
}

#[tokio::test]
async fn test_already_bound_returns_409_with_distinct_code() {
    let (status, json) = body_json(ApiError::already_bound("bound to 张三")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "ALREADY_BOUND");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("Invalid admin token")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_db_error_maps_to_internal_without_details() {
    let db_error = cs_db::DbError::invalid_row("users", "users.role: bogus");

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Database operation failed");
}
