use crate::Role;

use serde::{Deserialize, Serialize};

/// PUT /api/admin/user/{identity}/role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}
