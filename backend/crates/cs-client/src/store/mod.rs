//! Key/value persistence for device state.
//!
//! Two keys are used: the identity token and the profile cache record.
//! Implementations must make each `write` atomic: a reader sees either the
//! old value or the new one, never a torn file.

pub mod file_device_store;
pub mod memory_device_store;

use crate::StoreResult;

/// Device-local key/value storage.
pub trait DeviceStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Moves an unreadable value aside so the next read starts empty.
    /// Returns a description of where the backup went, if one was kept.
    fn quarantine(&self, key: &str) -> StoreResult<Option<String>>;
}
