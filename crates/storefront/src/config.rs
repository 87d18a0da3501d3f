//! # Store Configuration
//!
//! Where the stores persist and how their slots are named. Every field has a
//! default, so an empty file (or no file) yields an in-memory setup using the
//! `orders` and `wishlist` slots.
//!
//! ```toml
//! orders_key = "orders"
//! wishlist_key = "wishlist"
//! channel_capacity = 32
//!
//! [storage]
//! backend = "file"
//! data_dir = "./data"
//! ```

use crate::model::{Order, WishlistEntry};
use resource_actor::persist::{FileStore, KeyValueStore, MemoryStore};
use resource_actor::ResourceEntity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

/// Backend holding the persisted slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process memory only; nothing survives a restart.
    #[default]
    Memory,
    /// One `<key>.json` file per slot under `data_dir`.
    File { data_dir: PathBuf },
}

impl StorageConfig {
    pub fn build(&self) -> Arc<dyn KeyValueStore> {
        match self {
            StorageConfig::Memory => Arc::new(MemoryStore::new()),
            StorageConfig::File { data_dir } => Arc::new(FileStore::new(data_dir.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage: StorageConfig,
    /// Slot holding the order collection.
    pub orders_key: String,
    /// Slot holding the wishlist.
    pub wishlist_key: String,
    /// Bound of each actor's request queue and change broadcast.
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            orders_key: Order::SLOT_KEY.to_string(),
            wishlist_key: WishlistEntry::SLOT_KEY.to_string(),
            channel_capacity: 32,
        }
    }
}

impl StoreConfig {
    /// File-backed configuration with default slot names.
    pub fn file(data_dir: impl AsRef<Path>) -> Self {
        Self {
            storage: StorageConfig::File {
                data_dir: data_dir.as_ref().to_path_buf(),
            },
            ..Self::default()
        }
    }

    /// Reads and validates a TOML configuration file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path).await?;
        contents.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.orders_key.is_empty() || self.wishlist_key.is_empty() {
            return Err(ConfigError::Validation("Slot keys cannot be empty".into()));
        }
        if self.orders_key == self.wishlist_key {
            return Err(ConfigError::Validation(format!(
                "Orders and wishlist cannot share slot '{}'",
                self.orders_key
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "channel_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for StoreConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: StoreConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StoreConfig = "".parse().unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.orders_key, "orders");
        assert_eq!(config.wishlist_key, "wishlist");
        assert_eq!(config.orders_key, Order::SLOT_KEY);
        assert_eq!(config.wishlist_key, WishlistEntry::SLOT_KEY);
    }

    #[test]
    fn test_file_backend() {
        let config: StoreConfig = r#"
            orders_key = "shop_orders"
            channel_capacity = 8

            [storage]
            backend = "file"
            data_dir = "/var/lib/storefront"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config.storage,
            StorageConfig::File {
                data_dir: PathBuf::from("/var/lib/storefront")
            }
        );
        assert_eq!(config.orders_key, "shop_orders");
        assert_eq!(config.wishlist_key, "wishlist");
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_validation_errors() {
        let shared = "orders_key = \"slot\"\nwishlist_key = \"slot\"".parse::<StoreConfig>();
        assert!(matches!(shared, Err(ConfigError::Validation(_))));

        let empty = "orders_key = \"\"".parse::<StoreConfig>();
        assert!(matches!(empty, Err(ConfigError::Validation(_))));

        let zero = "channel_capacity = 0".parse::<StoreConfig>();
        assert!(matches!(zero, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let result = "[storage]\nbackend = \"redis\"".parse::<StoreConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        tokio::fs::write(&path, "wishlist_key = \"favourites\"\n")
            .await
            .unwrap();

        let config = StoreConfig::from_file(&path).await.unwrap();
        assert_eq!(config.wishlist_key, "favourites");

        let missing = StoreConfig::from_file(dir.path().join("absent.toml")).await;
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
