use crate::{CacheRecord, DeviceStore, StoreError, StoreResult};

use cs_core::{BindingState, Profile};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::watch;

pub const PROFILE_KEY: &str = "profile.json";

/// Device-side copy of the resolved profile plus its binding state.
///
/// Reads never touch the network. The in-memory record is the source of
/// truth for the running process; persistence failures on `write` are
/// returned to the caller but the in-memory record is still updated.
pub struct LocalProfileCache {
    store: Arc<dyn DeviceStore>,
    record: Mutex<CacheRecord>,
    changes: watch::Sender<CacheRecord>,
}

impl LocalProfileCache {
    /// Loads the persisted record. An unreadable or corrupted record starts
    /// the cache empty (corrupted files are backed up first).
    pub fn open(store: Arc<dyn DeviceStore>) -> Self {
        let record = match load(store.as_ref()) {
            Ok(record) => record,
            Err(e) => {
                warn!("Starting with an empty profile cache: {} ({})", e, e.recovery_hint());
                CacheRecord::default()
            }
        };

        let (changes, _) = watch::channel(record.clone());
        Self {
            store,
            record: Mutex::new(record),
            changes,
        }
    }

    pub fn read(&self) -> CacheRecord {
        self.lock().clone()
    }

    /// Stores `profile` with `binding_state`.
    ///
    /// A record already `Bound` for the same identity stays `Bound`: only
    /// `clear` can unlock it.
    pub fn write(&self, profile: Profile, binding_state: BindingState) -> StoreResult<()> {
        let mut record = self.lock();

        let binding_state = if record.is_bound_for(&profile.identity) {
            if !binding_state.is_bound() {
                warn!("Ignoring unbind of locked profile {}", profile.identity);
            }
            BindingState::Bound
        } else {
            binding_state
        };

        *record = CacheRecord {
            identity: Some(profile.identity.clone()),
            profile: Some(profile),
            binding_state,
        };
        self.changes.send_replace(record.clone());

        let json = serde_json::to_string_pretty(&*record)?;
        self.store.write(PROFILE_KEY, &json)?;

        debug!(
            "Cached profile for {} ({})",
            record.identity.as_ref().map(|i| i.as_str()).unwrap_or_default(),
            record.binding_state.as_str()
        );
        Ok(())
    }

    /// Forgets the profile and unlocks. Only for explicit user-initiated resets.
    pub fn clear(&self) -> StoreResult<()> {
        let mut record = self.lock();

        *record = CacheRecord::default();
        self.changes.send_replace(record.clone());

        self.store.remove(PROFILE_KEY)?;
        info!("Profile cache cleared");
        Ok(())
    }

    /// Re-reads the persisted record, picking up writes made by another
    /// process sharing the device directory.
    ///
    /// The `campus` CLI is one-shot and never calls this; it is for
    /// long-lived embedders (a UI shell, a daemon) that hold a cache open.
    /// On a read error the in-memory record is kept.
    pub fn reload(&self) -> StoreResult<CacheRecord> {
        let loaded = load(self.store.as_ref())?;

        let mut record = self.lock();
        *record = loaded;
        self.changes.send_replace(record.clone());

        Ok(record.clone())
    }

    /// Fires on every write, clear and reload. Like `reload`, only useful to
    /// embedders that keep the cache alive between operations.
    pub fn subscribe(&self) -> watch::Receiver<CacheRecord> {
        self.changes.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, CacheRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load(store: &dyn DeviceStore) -> StoreResult<CacheRecord> {
    let contents = match store.read(PROFILE_KEY) {
        Ok(Some(contents)) => contents,
        Ok(None) => return Ok(CacheRecord::default()),
        Err(e @ StoreError::Corrupted { .. }) => return discard(store, e),
        Err(e) => return Err(e),
    };

    match serde_json::from_str::<CacheRecord>(&contents) {
        Ok(record) => Ok(record),
        Err(e) => discard(store, StoreError::corrupted(PROFILE_KEY.into(), e.to_string())),
    }
}

fn discard(store: &dyn DeviceStore, error: StoreError) -> StoreResult<CacheRecord> {
    warn!("{} ({})", error, error.recovery_hint());
    store.quarantine(PROFILE_KEY)?;
    Ok(CacheRecord::default())
}
