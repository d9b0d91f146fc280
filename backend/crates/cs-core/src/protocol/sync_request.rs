use serde::{Deserialize, Serialize};

/// POST /api/user/sync
///
/// Fields default to empty so that a missing name or class is reported as a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
}
