use crate::{ClientIdentity, Role};

use serde::{Deserialize, Serialize};

/// Human-meaningful identity a [`ClientIdentity`] resolves to once bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub identity: ClientIdentity,
    pub name: String,
    pub class: String,
    pub role: Role,
    pub is_admin: bool,
}

impl Profile {
    pub fn new(identity: ClientIdentity, name: String, class: String, role: Role) -> Self {
        Self {
            identity,
            name,
            class,
            role,
            is_admin: role.is_admin(),
        }
    }

    /// A profile missing its name or class never finished binding.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.class.trim().is_empty()
    }
}
