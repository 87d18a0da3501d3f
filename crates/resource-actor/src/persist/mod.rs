//! # Persisted Slots
//!
//! Every resource collection lives in exactly one key-value slot, encoded as a
//! JSON array. The actor reads the slot once at startup and rewrites it after
//! every mutation.
//!
//! - [`KeyValueStore`] is the raw byte backend ([`MemoryStore`], [`FileStore`]).
//! - [`Slot`] binds a backend to one key and handles the JSON encoding.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::PersistError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Low-level key-value backend holding raw bytes.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the bytes stored under `key`, or [`PersistError::NotFound`].
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, PersistError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PersistError>;
}

/// One named slot in a [`KeyValueStore`].
///
/// Cloning a slot shares the backend.
#[derive(Clone)]
pub struct Slot {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl Slot {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// A slot backed by a fresh [`MemoryStore`].
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStore::new()), key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and decodes the slot. An absent slot is `Ok(None)`.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, PersistError> {
        match self.backend.get_bytes(&self.key).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| PersistError::Serialization(e.to_string())),
            Err(PersistError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Encodes `value` as JSON and overwrites the slot.
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), PersistError> {
        let bytes =
            serde_json::to_vec(value).map_err(|e| PersistError::Serialization(e.to_string()))?;
        self.backend.set_bytes(&self.key, bytes).await
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("key", &self.key).finish()
    }
}
