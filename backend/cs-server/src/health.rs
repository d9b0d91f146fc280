use crate::AppState;

use cs_db::NameRegistryRepository;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;

/// GET /health - Component status, including the registry database
pub async fn health_check(State(state): State<AppState>) -> Response {
    let repo = NameRegistryRepository::new(state.pool.clone());
    let (status, database, bindings) = match repo.count().await {
        Ok(count) => (StatusCode::OK, "operational", Some(count)),
        Err(e) => {
            log::error!("Health check database probe failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "admin": if state.admin.is_enabled() { "enabled" } else { "disabled" },
        },
        "bindings": bindings,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we reach the database?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness probe failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
