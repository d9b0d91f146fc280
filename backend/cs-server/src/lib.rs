pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    admin::admin::{release_user, set_user_role},
    error::ApiError,
    error::Result as ApiResult,
    extractors::admin_token::{ADMIN_TOKEN_HEADER, AdminToken},
    users::users::{check_name, get_user, sync_user},
};
pub use error::{Result as ServerResult, ServerError};
pub use state::AppState;

pub use crate::routes::build_router;
