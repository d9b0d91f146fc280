use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures talking to the name registry, or refused locally before any call.
///
/// `Validation` and `Locked` are raised without touching the network.
/// Server-side kinds are mapped from the response `code`, never from message
/// text.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Name conflict: {message} {location}")]
    NameConflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity already bound: {message} {location}")]
    AlreadyBound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile is locked for identity {identity}; it can only be changed by an administrator {location}")]
    Locked {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request timed out: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected registry response (HTTP {status}): {message} {location}")]
    UnexpectedResponse {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    /// Only transport failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Stable machine-readable kind, for CLI output and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NameConflict { .. } => "name_conflict",
            Self::AlreadyBound { .. } => "already_bound",
            Self::Locked { .. } => "locked",
            Self::NotFound { .. } => "not_found",
            Self::Network { .. } => "network",
            Self::Timeout { .. } => "timeout",
            Self::UnexpectedResponse { .. } => "unexpected_response",
        }
    }

    #[track_caller]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
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
    pub fn locked(identity: impl Into<String>) -> Self {
        Self::Locked {
            identity: identity.into(),
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
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::timeout(err.to_string())
        } else if err.is_decode() {
            SyncError::unexpected(
                err.status().map(|s| s.as_u16()).unwrap_or_default(),
                err.to_string(),
            )
        } else {
            SyncError::network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
