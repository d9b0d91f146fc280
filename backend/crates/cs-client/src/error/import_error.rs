use crate::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures importing an identity token on a new device.
///
/// None of these leave any local state changed.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Not a valid identity token: {value:?} {location}")]
    InvalidToken {
        value: String,
        location: ErrorLocation,
    },

    #[error("Identity {identity} has no completed profile to import {location}")]
    Incomplete {
        identity: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Registry(#[from] SyncError),
}

impl ImportError {
    #[track_caller]
    pub fn invalid_token(value: impl Into<String>) -> Self {
        Self::InvalidToken {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn incomplete(identity: impl Into<String>) -> Self {
        Self::Incomplete {
            identity: identity.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
