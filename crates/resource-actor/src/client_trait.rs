//! # ActorClient Trait
//!
//! Common surface for domain clients: reads and deletion built on top of a
//! generic `ResourceClient`, with runtime errors mapped into the domain's own
//! error type.
use crate::{FrameworkError, ResourceClient, ResourceEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, FrameworkError, ResourceClient, ResourceEntity};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { name: String }
/// #[derive(Debug, Clone)] enum TagAction {}
/// #[derive(Debug)] enum TagQuery {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// impl ResourceEntity for Tag {
///     type Id = String; type Create = String; type Action = TagAction;
///     type ActionResult = (); type Query = TagQuery; type Error = TagError;
///     const SLOT_KEY: &'static str = "tags";
///     fn id(&self) -> &String { &self.name }
///     fn from_create_params(name: String) -> Result<Self, TagError> { Ok(Self { name }) }
///     fn handle_action(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
///     fn matches(&self, query: &TagQuery) -> bool { match *query {} }
/// }
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list_all() and delete() come for free.
///     let _ = client.get("sale".to_string()).await;
///     let _ = client.delete("sale".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ResourceEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map runtime errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// The whole collection in store order.
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(None).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning it if it existed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
