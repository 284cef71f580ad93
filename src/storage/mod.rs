//! Local key-value slots backing the persisted session and data blobs.
//!
//! A slot holds one string value under a fixed key, the way browser local
//! storage does. Two backends exist: a directory of files for real use and an
//! in-process map for tests and ephemeral sessions.

mod file;
mod memory;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::core::config::{Settings, StorageBackend};

pub use file::FileSlotStorage;
pub use memory::MemorySlotStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),
    #[error("slot {key} i/o failed: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("slot {key} could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("slot {key} holds malformed data: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait SlotStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the whole slot value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn from_settings(settings: &Settings) -> Result<Arc<dyn SlotStorage>, StorageError> {
    match settings.storage().backend {
        StorageBackend::File => {
            let storage = FileSlotStorage::open(&settings.storage().data_dir)?;
            tracing::info!(path = %settings.storage().data_dir.display(), "Using file slot storage");
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory slot storage; nothing survives a restart");
            Ok(Arc::new(MemorySlotStorage::new()))
        }
    }
}

/// Keys double as file names, so only a conservative charset is allowed.
pub fn is_valid_slot_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}

pub(crate) fn ensure_valid_key(key: &str) -> Result<(), StorageError> {
    if is_valid_slot_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

pub fn read_json<T: DeserializeOwned>(
    storage: &dyn SlotStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode { key: key.to_string(), source })
}

pub fn write_json<T: Serialize>(
    storage: &dyn SlotStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|source| StorageError::Encode { key: key.to_string(), source })?;
    storage.set(key, &raw)
}
