//! Gate for the administrative endpoints

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Proof that the request carried the configured admin token.
///
/// With no token configured every admin request is refused.
pub struct AdminToken;

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.admin.token.as_deref() else {
                return Err(ApiError::forbidden("Admin endpoints are disabled"));
            };

            let provided = parts
                .headers
                .get(ADMIN_TOKEN_HEADER)
                .and_then(|value| value.to_str().ok());

            match provided {
                Some(token) if token == expected => Ok(AdminToken),
                Some(_) => Err(ApiError::forbidden("Invalid admin token")),
                None => Err(ApiError::forbidden(format!(
                    "Missing {} header",
                    ADMIN_TOKEN_HEADER
                ))),
            }
        }
    }
}
