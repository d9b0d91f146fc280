//! Client side of the name registry.

pub mod http_name_registry;

use crate::SyncResult;

use cs_core::{ClientIdentity, Profile};

use async_trait::async_trait;
use serde::Serialize;

/// Answer to a name availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The authoritative name → identity store.
///
/// `bind` is the only place name uniqueness is enforced; callers must not
/// treat a positive `check_availability` as a reservation.
#[async_trait]
pub trait NameRegistry: Send + Sync {
    /// False iff `name` is bound to an identity other than `identity`.
    async fn check_availability(
        &self,
        name: &str,
        identity: &ClientIdentity,
    ) -> SyncResult<Availability>;

    /// Atomic check-and-set. Rebinding a name the identity already owns
    /// succeeds and returns the existing profile.
    async fn bind(&self, identity: &ClientIdentity, name: &str, class: &str)
    -> SyncResult<Profile>;

    /// `SyncError::NotFound` when the identity has never bound.
    async fn resolve(&self, identity: &ClientIdentity) -> SyncResult<Profile>;
}
