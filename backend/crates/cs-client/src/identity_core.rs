use crate::{
    CrossDeviceBridge, DeviceStore, FileDeviceStore, HttpNameRegistry, IdentityProvisioner,
    LocalProfileCache, NameRegistry, ProfileSyncClient, StoreResult,
};

use cs_config::{Config, ConfigErrorResult, RetryConfig};
use cs_core::{BindingState, ClientIdentity, Profile};

use std::sync::Arc;

use log::info;
use serde::Serialize;

/// Snapshot of this device's identity state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityStatus {
    pub identity: Option<ClientIdentity>,
    pub durable: bool,
    pub binding_state: BindingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Owns every identity component for one device. Constructed once per
/// process and passed by reference.
pub struct IdentityCore {
    provisioner: Arc<IdentityProvisioner>,
    cache: Arc<LocalProfileCache>,
    sync: Arc<ProfileSyncClient>,
    bridge: Arc<CrossDeviceBridge>,
}

impl IdentityCore {
    pub fn new(
        store: Arc<dyn DeviceStore>,
        registry: Arc<dyn NameRegistry>,
        retry: RetryConfig,
    ) -> Self {
        let provisioner = Arc::new(IdentityProvisioner::new(Arc::clone(&store)));
        let cache = Arc::new(LocalProfileCache::open(store));
        let sync = Arc::new(ProfileSyncClient::new(
            Arc::clone(&provisioner),
            Arc::clone(&registry),
            Arc::clone(&cache),
            retry,
        ));
        let bridge = Arc::new(CrossDeviceBridge::new(
            Arc::clone(&provisioner),
            Arc::clone(&cache),
            registry,
        ));

        Self {
            provisioner,
            cache,
            sync,
            bridge,
        }
    }

    /// File-backed device store under `config.device_dir()` and the HTTP
    /// registry at `config.client.base_url`.
    pub fn bootstrap(config: &Config) -> ConfigErrorResult<Self> {
        let device_dir = config.device_dir()?;
        info!("Device directory: {}", device_dir.display());

        let store: Arc<dyn DeviceStore> = Arc::new(FileDeviceStore::new(device_dir));
        let registry: Arc<dyn NameRegistry> =
            Arc::new(HttpNameRegistry::from_config(&config.client));

        Ok(Self::new(store, registry, config.retry.clone()))
    }

    pub fn provisioner(&self) -> &Arc<IdentityProvisioner> {
        &self.provisioner
    }

    pub fn cache(&self) -> &Arc<LocalProfileCache> {
        &self.cache
    }

    pub fn sync_client(&self) -> &Arc<ProfileSyncClient> {
        &self.sync
    }

    pub fn bridge(&self) -> &Arc<CrossDeviceBridge> {
        &self.bridge
    }

    /// Provisions a fresh identity and forgets the cached profile.
    ///
    /// The cache is cleared even when the new token could not be persisted;
    /// the first failure is returned.
    pub fn reset(&self) -> StoreResult<ClientIdentity> {
        let identity = self.provisioner.reset();
        let cache = self.cache.clear();
        let identity = identity?;
        cache.map(|()| identity)
    }

    /// Leaves the device unprovisioned. Fails if either the token or the
    /// cached profile is still on disk afterwards.
    pub fn clear(&self) -> StoreResult<()> {
        let identity = self.provisioner.clear();
        let cache = self.cache.clear();
        identity.and(cache)
    }

    /// Current state without provisioning or touching the network.
    pub fn status(&self) -> IdentityStatus {
        let record = self.cache.read();
        let identity = self.provisioner.current();
        let bound = identity.as_ref().is_some_and(|i| record.is_bound_for(i));

        IdentityStatus {
            identity,
            durable: self.provisioner.is_durable(),
            binding_state: if bound {
                BindingState::Bound
            } else {
                BindingState::Unbound
            },
            profile: record.profile.filter(|_| bound),
        }
    }
}
