use crate::ClientIdentity;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseResponse {
    pub success: bool,
    pub identity: ClientIdentity,
}
