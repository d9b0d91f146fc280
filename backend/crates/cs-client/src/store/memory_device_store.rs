use crate::{DeviceStore, StoreResult};

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-local store: nothing survives a restart.
#[derive(Default)]
pub struct MemoryDeviceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryDeviceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceStore for MemoryDeviceStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }

    fn quarantine(&self, key: &str) -> StoreResult<Option<String>> {
        self.remove(key)?;
        Ok(None)
    }
}
