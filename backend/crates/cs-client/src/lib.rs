pub mod bridge;
pub mod cache;
pub mod error;
pub mod identity;
pub mod identity_core;
pub mod registry;
pub mod store;
pub mod sync;

pub use bridge::cross_device_bridge::CrossDeviceBridge;
pub use cache::cache_record::CacheRecord;
pub use cache::local_profile_cache::{LocalProfileCache, PROFILE_KEY};
pub use error::import_error::{ImportError, Result as ImportResult};
pub use error::store_error::{Result as StoreResult, StoreError};
pub use error::sync_error::{Result as SyncResult, SyncError};
pub use identity::identity_provisioner::{IDENTITY_KEY, IdentityProvisioner};
pub use identity_core::{IdentityCore, IdentityStatus};
pub use registry::http_name_registry::HttpNameRegistry;
pub use registry::{Availability, NameRegistry};
pub use store::DeviceStore;
pub use store::file_device_store::FileDeviceStore;
pub use store::memory_device_store::MemoryDeviceStore;
pub use sync::profile_sync_client::ProfileSyncClient;
pub use sync::reconcile_outcome::ReconcileOutcome;
pub use sync::retry::{IsRetryable, with_retry};

#[cfg(test)]
mod tests;
