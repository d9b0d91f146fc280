use serde::{Deserialize, Serialize};

/// POST /api/user/check-name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckNameRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub identity: String,
}
