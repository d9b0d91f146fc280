use crate::{ADMIN_TOKEN_HEADER, AdminToken, ApiError, AppState};

use cs_config::{AdminConfig, ValidationConfig};

use axum::{body::Body, extract::FromRequestParts, http::Request};

const TOKEN: &str = "0123456789abcdef-admin";

async fn create_test_state(token: Option<&str>) -> AppState {
    AppState {
        pool: cs_db::open_memory_pool()
            .await
            .expect("Failed to create test pool"),
        validation: ValidationConfig::default(),
        admin: AdminConfig {
            token: token.map(String::from),
        },
    }
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<AdminToken, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header(ADMIN_TOKEN_HEADER, value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    AdminToken::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_matching_token() {
    let state = create_test_state(Some(TOKEN)).await;

    let result = extract(&state, Some(TOKEN)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extractor_with_wrong_token_is_forbidden() {
    let state = create_test_state(Some(TOKEN)).await;

    let result = extract(&state, Some("wrong-token-value")).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_extractor_without_header_is_forbidden() {
    let state = create_test_state(Some(TOKEN)).await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_extractor_when_admin_disabled_is_forbidden_even_with_header() {
    let state = create_test_state(None).await;

    let result = extract(&state, Some(TOKEN)).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}
