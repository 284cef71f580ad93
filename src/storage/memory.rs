use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ensure_valid_key, SlotStorage, StorageError};

#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStorage for MemorySlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        ensure_valid_key(key)?;
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        ensure_valid_key(key)?;
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        ensure_valid_key(key)?;
        self.slots().remove(key);
        Ok(())
    }
}
