use crate::{DeviceStore, StoreError, StoreResult};

use cs_core::ClientIdentity;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};
use tokio::sync::watch;

pub const IDENTITY_KEY: &str = "identity";

enum Stored {
    Found(ClientIdentity),
    Absent,
    /// The store could not be read; a token may still exist on disk
    Unreadable,
}

struct ProvisionerState {
    current: Option<ClientIdentity>,
    durable: bool,
}

/// Owns this device's identity token.
///
/// The token is created lazily on first use and persisted before it is
/// handed out. If the device store is unusable the provisioner still returns
/// a token, kept in memory for the session, and reports `is_durable() == false`.
///
/// Every change (create, reset, clear, adopt) is published on a watch
/// channel so dependents can re-initialise.
pub struct IdentityProvisioner {
    store: Arc<dyn DeviceStore>,
    state: Mutex<ProvisionerState>,
    changes: watch::Sender<Option<ClientIdentity>>,
}

impl IdentityProvisioner {
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            store,
            state: Mutex::new(ProvisionerState {
                current: None,
                durable: true,
            }),
            changes,
        }
    }

    /// Returns the persisted token, creating and persisting one if absent.
    pub fn get_or_create(&self) -> ClientIdentity {
        let mut state = self.lock();

        if let Some(ref current) = state.current {
            return current.clone();
        }

        let identity = match self.load() {
            Stored::Found(identity) => {
                state.durable = true;
                identity
            }
            Stored::Absent => {
                let identity = ClientIdentity::generate();
                state.durable = self.persist(&identity).is_ok();
                info!("Provisioned new identity {}", identity);
                identity
            }
            Stored::Unreadable => {
                // Never overwrite a token we could not read
                let identity = ClientIdentity::generate();
                state.durable = false;
                warn!("Using session-only identity {}", identity);
                identity
            }
        };

        self.set_current(&mut state, Some(identity.clone()));
        identity
    }

    /// Discards the current token and provisions a fresh one.
    ///
    /// The old token's registry binding is orphaned, not deleted. If the new
    /// token cannot be persisted it is still used for this session and the
    /// storage error is returned.
    pub fn reset(&self) -> StoreResult<ClientIdentity> {
        let mut state = self.lock();

        let previous = match state.current.clone() {
            Some(current) => Some(current),
            None => match self.load() {
                Stored::Found(identity) => Some(identity),
                Stored::Absent | Stored::Unreadable => None,
            },
        };

        let mut identity = ClientIdentity::generate();
        while Some(&identity) == previous.as_ref() {
            identity = ClientIdentity::generate();
        }

        let persisted = self.persist(&identity);
        state.durable = persisted.is_ok();
        info!(
            "Reset identity {} -> {}",
            previous.as_ref().map(ClientIdentity::as_str).unwrap_or("<none>"),
            identity
        );

        self.set_current(&mut state, Some(identity.clone()));
        persisted.map(|()| identity)
    }

    /// Removes the token. The next `get_or_create` provisions a new one.
    ///
    /// A failed removal is returned: the old token is still on disk and will
    /// come back on the next launch.
    pub fn clear(&self) -> StoreResult<()> {
        let mut state = self.lock();

        let removed = self.store.remove(IDENTITY_KEY);
        match removed {
            Ok(()) => {
                state.durable = true;
                info!("Identity cleared");
            }
            Err(ref e) => {
                warn!("Failed to remove persisted identity: {} ({})", e, e.recovery_hint());
                state.durable = false;
            }
        }

        self.set_current(&mut state, None);
        removed
    }

    /// Replaces the current token with one imported from another device.
    pub fn adopt(&self, identity: ClientIdentity) {
        let mut state = self.lock();

        state.durable = self.persist(&identity).is_ok();
        info!("Adopted identity {}", identity);

        self.set_current(&mut state, Some(identity));
    }

    /// Current token without touching the store.
    pub fn current(&self) -> Option<ClientIdentity> {
        self.lock().current.clone()
    }

    /// False once the store has failed; the token will not survive a restart.
    pub fn is_durable(&self) -> bool {
        self.lock().durable
    }

    /// Fires whenever the current token changes. The CLI does not watch it;
    /// embedders that keep a provisioner alive use it to react to `adopt`
    /// and `reset` performed elsewhere in the process.
    pub fn subscribe(&self) -> watch::Receiver<Option<ClientIdentity>> {
        self.changes.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, ProvisionerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Stored {
        let raw = match self.store.read(IDENTITY_KEY) {
            Ok(raw) => raw,
            Err(e @ StoreError::Corrupted { .. }) => {
                warn!("Persisted identity is corrupted: {}", e);
                return self.quarantine();
            }
            Err(e) => {
                warn!("Failed to read persisted identity: {} ({})", e, e.recovery_hint());
                return Stored::Unreadable;
            }
        };

        let Some(raw) = raw else {
            return Stored::Absent;
        };

        match ClientIdentity::parse(&raw) {
            Ok(identity) => Stored::Found(identity),
            Err(e) => {
                warn!("Persisted identity is corrupted: {}", e);
                self.quarantine()
            }
        }
    }

    /// Moves a corrupted token aside. A corrupted token carries nothing worth
    /// keeping, so it is overwritten even when the backup fails.
    fn quarantine(&self) -> Stored {
        if let Err(e) = self.store.quarantine(IDENTITY_KEY) {
            warn!("{} ({})", e, e.recovery_hint());
        }
        Stored::Absent
    }

    fn persist(&self, identity: &ClientIdentity) -> StoreResult<()> {
        let result = self.store.write(IDENTITY_KEY, identity.as_str());

        if let Err(ref e) = result {
            if e.is_transient() {
                warn!("Identity {} is session-only: {} ({})", identity, e, e.recovery_hint());
            } else {
                error!("Identity {} is session-only: {} ({})", identity, e, e.recovery_hint());
            }
        }

        result
    }

    fn set_current(&self, state: &mut ProvisionerState, identity: Option<ClientIdentity>) {
        state.current = identity.clone();
        self.changes.send_replace(identity);
    }
}
