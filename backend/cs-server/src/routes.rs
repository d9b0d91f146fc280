use crate::{AppState, check_name, get_user, health, release_user, set_user_role, sync_user};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Name registry
        .route("/user/check-name", post(check_name))
        .route("/user/sync", post(sync_user))
        .route("/user/{identity}", get(get_user))
        // Admin overrides
        .route("/admin/user/{identity}/release", post(release_user))
        .route("/admin/user/{identity}/role", put(set_user_role));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        // Add shared state
        .with_state(state)
        // CORS middleware (browser clients on other origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
