//! # Wishlist Client
//!
//! Set-like API over the Wishlist actor. Membership checks and insertions are
//! decided inside the actor, so `add` never produces a duplicate.
use crate::model::{ProductId, WishlistEntry};
use crate::wishlist_actor::WishlistError;
use async_trait::async_trait;
use resource_actor::{ActorClient, Change, FrameworkError, ResourceClient};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for interacting with the Wishlist actor.
#[derive(Clone)]
pub struct WishlistClient {
    inner: ResourceClient<WishlistEntry>,
}

#[async_trait]
impl ActorClient<WishlistEntry> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &ResourceClient<WishlistEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WishlistError::from(e)
    }
}

impl WishlistClient {
    pub fn new(inner: ResourceClient<WishlistEntry>) -> Self {
        Self { inner }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Change<ProductId>> {
        self.inner.subscribe()
    }

    /// Appends `product_id`. Returns `false` if it was already present.
    #[instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<bool, WishlistError> {
        debug!("Sending request");
        match self.inner.create(product_id).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::AlreadyExists(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes `product_id` if present.
    pub async fn remove(&self, product_id: ProductId) -> Result<(), WishlistError> {
        self.delete(product_id).await.map(|_| ())
    }

    /// Adds the product if absent, removes it otherwise. Returns whether it is
    /// now on the wishlist.
    #[instrument(skip(self))]
    pub async fn toggle(&self, product_id: ProductId) -> Result<bool, WishlistError> {
        if self.add(product_id.clone()).await? {
            return Ok(true);
        }
        self.remove(product_id).await?;
        Ok(false)
    }

    pub async fn contains(&self, product_id: ProductId) -> Result<bool, WishlistError> {
        Ok(self.get(product_id).await?.is_some())
    }

    pub async fn count(&self) -> Result<usize, WishlistError> {
        Ok(self.list_all().await?.len())
    }

    /// Product ids in the order they were added.
    pub async fn items(&self) -> Result<Vec<ProductId>, WishlistError> {
        let entries = self.list_all().await?;
        Ok(entries.into_iter().map(|entry| entry.product_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), WishlistError> {
        debug!("Sending request");
        self.inner.clear().await.map(|_| ()).map_err(Self::map_error)
    }
}
