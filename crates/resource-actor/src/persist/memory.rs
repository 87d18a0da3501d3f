//! In-memory backend, for tests and ephemeral runs.

use super::KeyValueStore;
use crate::error::PersistError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps slots in a `HashMap`; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, PersistError> {
        let store = self.store.read().await;
        store.get(key).cloned().ok_or(PersistError::NotFound)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PersistError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value);
        Ok(())
    }
}
