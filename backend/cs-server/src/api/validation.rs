//! Request field checks shared by the user and admin handlers.

use crate::{ApiError, ApiResult};

use cs_core::ClientIdentity;

/// Parses an identity from a body field or path segment.
#[track_caller]
pub fn parse_identity(raw: &str) -> ApiResult<ClientIdentity> {
    ClientIdentity::parse(raw)
        .map_err(|_| ApiError::validation("identity is missing or malformed", Some("identity")))
}

/// Rejects blank values and values longer than `max_chars` characters.
///
/// The value itself is not trimmed: names are matched exactly.
#[track_caller]
pub fn require_text(field: &str, value: &str, max_chars: usize) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(
            format!("{} is required", field),
            Some(field),
        ));
    }

    let length = value.chars().count();
    if length > max_chars {
        return Err(ApiError::validation(
            format!("{} must be at most {} characters, got {}", field, max_chars, length),
            Some(field),
        ));
    }

    Ok(())
}
