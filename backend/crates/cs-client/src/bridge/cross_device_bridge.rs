use crate::{
    IdentityProvisioner, ImportError, ImportResult, LocalProfileCache, NameRegistry, SyncError,
};

use cs_core::{BindingState, ClientIdentity, Profile};

use std::sync::Arc;

use log::{info, warn};

/// Moves an identity token between devices by manual transcription.
///
/// Import only mutates local state once the registry has confirmed a
/// complete profile for the token.
pub struct CrossDeviceBridge {
    provisioner: Arc<IdentityProvisioner>,
    cache: Arc<LocalProfileCache>,
    registry: Arc<dyn NameRegistry>,
}

impl CrossDeviceBridge {
    pub fn new(
        provisioner: Arc<IdentityProvisioner>,
        cache: Arc<LocalProfileCache>,
        registry: Arc<dyn NameRegistry>,
    ) -> Self {
        Self {
            provisioner,
            cache,
            registry,
        }
    }

    /// The token verbatim.
    pub fn export(&self, identity: &ClientIdentity) -> String {
        identity.as_str().to_string()
    }

    /// Exports this device's token, provisioning one if needed.
    pub fn export_current(&self) -> String {
        self.export(&self.provisioner.get_or_create())
    }

    pub async fn import(&self, candidate: &str) -> ImportResult<Profile> {
        let identity = ClientIdentity::parse(candidate)
            .map_err(|_| ImportError::invalid_token(candidate.trim()))?;

        let profile = match self.registry.resolve(&identity).await {
            Ok(profile) => profile,
            Err(SyncError::NotFound { .. }) => {
                return Err(ImportError::incomplete(identity.as_str()));
            }
            Err(e) => return Err(e.into()),
        };

        if !profile.is_complete() || profile.identity != identity {
            return Err(ImportError::incomplete(identity.as_str()));
        }

        self.provisioner.adopt(identity.clone());
        if let Err(e) = self.cache.write(profile.clone(), BindingState::Bound) {
            warn!(
                "Imported profile for {} is cached in memory only: {} ({})",
                identity,
                e,
                e.recovery_hint()
            );
        }

        info!("Imported identity {} as {:?}", identity, profile.name);
        Ok(profile)
    }
}
