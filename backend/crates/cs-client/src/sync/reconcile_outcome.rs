use crate::SyncError;

use cs_core::Profile;

/// What a startup reconcile did to the local cache.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// Cache was bound and the registry agreed; cache refreshed.
    Refreshed(Profile),
    /// Cache was bound but the registry has no binding. Cache untouched.
    RemoteMissing,
    /// Cache was unbound but the registry had a binding (a lost bind reply).
    Adopted(Profile),
    /// Neither side has a binding.
    Unbound,
    /// The registry could not be reached. Cache untouched.
    Unreachable(SyncError),
}

impl ReconcileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refreshed(_) => "refreshed",
            Self::RemoteMissing => "remote_missing",
            Self::Adopted(_) => "adopted",
            Self::Unbound => "unbound",
            Self::Unreachable(_) => "unreachable",
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Refreshed(profile) | Self::Adopted(profile) => Some(profile),
            Self::RemoteMissing | Self::Unbound | Self::Unreachable(_) => None,
        }
    }
}
