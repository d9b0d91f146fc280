//! REST API error types
//!
//! Every error leaves the server as the same JSON body,
//! `{ success: false, error, code, field? }`, with a status code matching the
//! machine-readable `code`.

use cs_core::{ErrorResponse, RegistryErrorCode};
use cs_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use http::StatusCode;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Name is bound to another identity (409)
    #[error("Name conflict: {message} {location}")]
    NameConflict {
        message: String,
        location: ErrorLocation,
    },

    /// Identity is already bound to a different name (409)
    #[error("Already bound: {message} {location}")]
    AlreadyBound {
        message: String,
        location: ErrorLocation,
    },

    /// Identity has no binding (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Admin token missing, wrong, or admin endpoints disabled (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn name_conflict(message: impl Into<String>) -> Self {
        Self::NameConflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_bound(message: impl Into<String>) -> Self {
        Self::AlreadyBound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn code(&self) -> RegistryErrorCode {
        match self {
            Self::Validation { .. } => RegistryErrorCode::ValidationError,
            Self::NameConflict { .. } => RegistryErrorCode::NameConflict,
            Self::AlreadyBound { .. } => RegistryErrorCode::AlreadyBound,
            Self::NotFound { .. } => RegistryErrorCode::NotFound,
            Self::Forbidden { .. } => RegistryErrorCode::Forbidden,
            Self::Internal { .. } => RegistryErrorCode::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NameConflict { .. } | Self::AlreadyBound { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NameConflict { message, .. }
            | ApiError::AlreadyBound { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code,
            field,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::internal("Database operation failed")
    }
}

/// Unparseable or mistyped JSON bodies are validation errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(format!("Invalid request body: {}", rejection.body_text()), None)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
