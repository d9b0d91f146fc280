mod identity_core;
mod retry;

use crate::{
    Availability, DeviceStore, IdentityCore, MemoryDeviceStore, NameRegistry, StoreError,
    StoreResult, SyncError, SyncResult,
};

use cs_config::RetryConfig;
use cs_core::{ClientIdentity, Profile, Role};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// In-process registry with the same binding rules as the server.
#[derive(Default)]
pub(crate) struct FakeRegistry {
    bindings: Mutex<HashMap<ClientIdentity, Profile>>,
    check_calls: AtomicUsize,
    bind_calls: AtomicUsize,
    resolve_calls: AtomicUsize,
    offline: AtomicBool,
    drop_bind_reply: AtomicBool,
}

impl FakeRegistry {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn insert(&self, identity: &ClientIdentity, name: &str, class: &str) -> Profile {
        let profile = Profile::new(
            identity.clone(),
            name.to_string(),
            class.to_string(),
            Role::User,
        );
        self.bindings
            .lock()
            .unwrap()
            .insert(identity.clone(), profile.clone());
        profile
    }

    pub(crate) fn remove(&self, identity: &ClientIdentity) {
        self.bindings.lock().unwrap().remove(identity);
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Binds succeed server-side but the caller sees a network error.
    pub(crate) fn drop_bind_replies(&self) {
        self.drop_bind_reply.store(true, Ordering::SeqCst);
    }

    pub(crate) fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn bind_calls(&self) -> usize {
        self.bind_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn network_calls(&self) -> usize {
        self.check_calls() + self.bind_calls() + self.resolve_calls()
    }

    fn ensure_online(&self) -> SyncResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SyncError::network("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl NameRegistry for FakeRegistry {
    async fn check_availability(
        &self,
        name: &str,
        identity: &ClientIdentity,
    ) -> SyncResult<Availability> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        let bindings = self.bindings.lock().unwrap();
        let taken = bindings
            .values()
            .any(|p| p.name == name && &p.identity != identity);

        Ok(Availability {
            available: !taken,
            reason: taken.then(|| String::from("该名字已被使用")),
        })
    }

    async fn bind(
        &self,
        identity: &ClientIdentity,
        name: &str,
        class: &str,
    ) -> SyncResult<Profile> {
        self.bind_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        let profile = {
            let mut bindings = self.bindings.lock().unwrap();

            if let Some(existing) = bindings.get(identity) {
                if existing.name != name {
                    return Err(SyncError::already_bound("identity has a different name"));
                }
                existing.clone()
            } else if bindings.values().any(|p| p.name == name) {
                return Err(SyncError::name_conflict("name taken"));
            } else {
                let profile = Profile::new(
                    identity.clone(),
                    name.to_string(),
                    class.to_string(),
                    Role::User,
                );
                bindings.insert(identity.clone(), profile.clone());
                profile
            }
        };

        if self.drop_bind_reply.load(Ordering::SeqCst) {
            return Err(SyncError::timeout("reply lost"));
        }
        Ok(profile)
    }

    async fn resolve(&self, identity: &ClientIdentity) -> SyncResult<Profile> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        self.bindings
            .lock()
            .unwrap()
            .get(identity)
            .cloned()
            .ok_or_else(|| SyncError::not_found("no binding"))
    }
}

/// Every operation fails as if the device directory were read-only.
pub(crate) struct FailingStore;

impl DeviceStore for FailingStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::file_read(PathBuf::from(key), denied()))
    }

    fn write(&self, key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(PathBuf::from(key), denied()))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Err(StoreError::file_write(PathBuf::from(key), denied()))
    }

    fn quarantine(&self, key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::backup_failed(PathBuf::from(key), denied()))
    }
}

/// Reads and writes succeed but nothing can be deleted.
pub(crate) struct UndeletableStore {
    inner: MemoryDeviceStore,
}

impl UndeletableStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: MemoryDeviceStore::new(),
        }
    }
}

impl DeviceStore for UndeletableStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        Err(StoreError::file_write(PathBuf::from(key), denied()))
    }

    fn quarantine(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.quarantine(key)
    }
}

fn denied() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only device")
}

/// Retries with no waiting between attempts.
pub(crate) fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        base_delay_ms: 0,
    }
}

pub(crate) fn create_test_core(registry: Arc<FakeRegistry>) -> (IdentityCore, Arc<MemoryDeviceStore>) {
    let store = Arc::new(MemoryDeviceStore::new());
    let core = IdentityCore::new(store.clone(), registry, fast_retry());
    (core, store)
}
