use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckNameResponse {
    pub available: bool,
    /// Human-readable reason when the name is taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
