use cs_core::{BindingState, ClientIdentity, Profile};

use serde::{Deserialize, Serialize};

/// Last-known profile and lock state, persisted as one JSON document so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheRecord {
    pub identity: Option<ClientIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub binding_state: BindingState,
}

impl CacheRecord {
    /// Locked for `identity`: bound, and bound to this identity rather than a
    /// previous one.
    pub fn is_bound_for(&self, identity: &ClientIdentity) -> bool {
        self.binding_state.is_bound() && self.identity.as_ref() == Some(identity)
    }
}
