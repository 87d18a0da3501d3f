//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use crate::message::{Change, ResourceRequest};
use tokio::sync::{broadcast, mpsc, oneshot};

/// A type-safe, cloneable handle to a `ResourceActor`.
///
/// Each call sends one request and awaits the actor's reply, so a call observes
/// every mutation issued before it through any clone of the same client.
/// Dropping the last clone shuts the actor down.
pub struct ResourceClient<T: ResourceEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    changes: broadcast::Sender<Change<T::Id>>,
}

impl<T: ResourceEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            changes: self.changes.clone(),
        }
    }
}

impl<T: ResourceEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        changes: broadcast::Sender<Change<T::Id>>,
    ) -> Self {
        Self { sender, changes }
    }

    /// Registers an observer for changes applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Change<T::Id>> {
        self.changes.subscribe()
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Lists items in store order; `None` lists everything.
    pub async fn list(&self, query: Option<T::Query>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    /// Runs an entity action. `Ok(None)` means the id is unknown.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<Option<(T::ActionResult, T)>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Removes an item. `Ok(None)` means the id is unknown.
    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Empties the collection, returning how many items were removed.
    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
