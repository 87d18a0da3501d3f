use crate::clients::{OrderClient, WishlistClient};
use crate::config::StoreConfig;
use crate::{order_actor, wishlist_actor};
use resource_actor::persist::Slot;
use tracing::{error, info};

/// Runtime orchestrator owning the order and wishlist stores.
///
/// Built once at startup; the clients are the only handles to the stores and
/// may be cloned freely.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::from_config(&StoreConfig::file("./data"));
///
/// let order = system.order_client.create_order(params).await?;
/// system.wishlist_client.add("sku-42".into()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the order store
    pub order_client: OrderClient,

    /// Client for the wishlist store
    pub wishlist_client: WishlistClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts both stores in memory with default slot names.
    pub fn new() -> Self {
        Self::from_config(&StoreConfig::default())
    }

    /// Starts both stores on the backend described by `config`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn from_config(config: &StoreConfig) -> Self {
        let backend = config.storage.build();
        info!(
            storage = ?config.storage,
            orders_key = %config.orders_key,
            wishlist_key = %config.wishlist_key,
            "Starting storefront system"
        );

        let (order_actor, order_client) = order_actor::new(
            Slot::new(backend.clone(), config.orders_key.clone()),
            config.channel_capacity,
        );
        let (wishlist_actor, wishlist_client) = wishlist_actor::new(
            Slot::new(backend, config.wishlist_key.clone()),
            config.channel_capacity,
        );

        let order_handle = tokio::spawn(order_actor.run());
        let wishlist_handle = tokio::spawn(wishlist_actor.run());

        Self {
            order_client: OrderClient::new(order_client),
            wishlist_client: WishlistClient::new(wishlist_client),
            handles: vec![order_handle, wishlist_handle],
        }
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system...");

        drop(self.order_client);
        drop(self.wishlist_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront system shutdown complete.");
        Ok(())
    }
}

impl Default for StorefrontSystem {
    fn default() -> Self {
        Self::new()
    }
}
