//! File backend: one `<key>.json` file per slot under a base directory.

use super::KeyValueStore;
use crate::error::PersistError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Stores each slot as a file, replacing it atomically on write.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Maps a slot key to a filesystem-safe path.
    fn file_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':'], "_");
        self.base_path.join(format!("{safe_key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, PersistError> {
        match fs::read(self.file_path(key)).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PersistError::NotFound),
            Err(e) => Err(PersistError::Backend(e.to_string())),
        }
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PersistError> {
        let path = self.file_path(key);

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PersistError::Backend(e.to_string()))?;

        // Readers never observe a half-written slot.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .await
            .map_err(|e| PersistError::Backend(e.to_string()))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| PersistError::Backend(e.to_string()))?;

        Ok(())
    }
}
