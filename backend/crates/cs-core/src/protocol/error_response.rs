use crate::RegistryErrorCode;

use serde::{Deserialize, Serialize};

/// Body of every non-2xx registry response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable message
    pub error: String,
    pub code: RegistryErrorCode,
    /// Offending request field, for validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
