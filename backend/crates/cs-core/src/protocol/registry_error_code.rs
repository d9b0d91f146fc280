use serde::{Deserialize, Serialize};

/// Machine-readable error codes returned by the name registry.
///
/// Clients branch on these, never on the accompanying message text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistryErrorCode {
    ValidationError,
    NameConflict,
    AlreadyBound,
    NotFound,
    Forbidden,
    InternalError,
}

impl RegistryErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NameConflict => "NAME_CONFLICT",
            Self::AlreadyBound => "ALREADY_BOUND",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}
