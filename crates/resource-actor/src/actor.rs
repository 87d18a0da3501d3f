//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one
//! persisted collection and serialises every access to it. It is the "server"
//! half of the actor model: requests arrive over a channel and are processed
//! one at a time, each to completion, so no two mutations ever interleave.

use crate::client::ResourceClient;
use crate::entity::{Placement, ResourceEntity};
use crate::error::FrameworkError;
use crate::message::{Change, ResourceRequest};
use crate::persist::Slot;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// The generic actor that manages an ordered, persisted collection of entities.
///
/// # Concurrency Model
/// The actor exclusively owns `store`; all reads and writes go through its
/// message loop, so the collection needs no `Mutex`.
///
/// # Persistence
/// The slot is read once when [`run`](Self::run) starts. A missing slot starts
/// an empty store; an unreadable one is logged and also starts empty. After
/// every successful mutation the whole collection is written back before the
/// caller gets its reply. A failed write is logged and the in-memory state
/// stays authoritative; there is no rollback and no retry.
///
/// # Observers
/// After the write, a [`Change`] is broadcast to every receiver obtained from
/// [`ResourceClient::subscribe`]. Having no subscribers is fine; a subscriber
/// that falls behind loses the oldest events instead of stalling the actor.
///
/// ```rust
/// use resource_actor::persist::Slot;
/// use resource_actor::{ResourceActor, ResourceEntity};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { name: String }
/// #[derive(Debug, Clone)] enum TagAction {}
/// #[derive(Debug)] enum TagQuery {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl ResourceEntity for Tag {
///     type Id = String;
///     type Create = String;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Query = TagQuery;
///     type Error = TagError;
///     const SLOT_KEY: &'static str = "tags";
///
///     fn id(&self) -> &String { &self.name }
///     fn from_create_params(name: String) -> Result<Self, TagError> { Ok(Self { name }) }
///     fn handle_action(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
///     fn matches(&self, query: &TagQuery) -> bool { match *query {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(Slot::in_memory(Tag::SLOT_KEY), 10);
///     tokio::spawn(actor.run());
///
///     let tag = client.create("sale".to_string()).await.unwrap();
///     assert_eq!(tag.name, "sale");
/// }
/// ```
pub struct ResourceActor<T: ResourceEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    changes: broadcast::Sender<Change<T::Id>>,
    slot: Slot,
    store: Vec<T>,
}

impl<T: ResourceEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` bound to `slot`, and its client.
    ///
    /// `buffer_size` bounds both the request channel and the change
    /// broadcast; a value of zero is treated as one.
    pub fn new(slot: Slot, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let capacity = buffer_size.max(1);
        let (sender, receiver) = mpsc::channel(capacity);
        let (changes, _) = broadcast::channel(capacity);
        let actor = Self {
            receiver,
            changes: changes.clone(),
            slot,
            store: Vec::new(),
        };
        let client = ResourceClient::new(sender, changes);
        (actor, client)
    }

    /// Loads the slot, then processes messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = entity_type::<T>();

        self.store = self.load(entity_type).await;
        info!(entity_type, slot = self.slot.key(), size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let item = match T::from_create_params(params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                            continue;
                        }
                    };

                    let id = item.id().clone();
                    if T::UNIQUE_IDS && self.position(&id).is_some() {
                        debug!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    match T::PLACEMENT {
                        Placement::Front => self.store.insert(0, item.clone()),
                        Placement::Back => self.store.push(item.clone()),
                    }
                    self.persist(entity_type).await;
                    self.notify(Change::Created(id.clone()));
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = match &query {
                        Some(query) => self
                            .store
                            .iter()
                            .filter(|item| item.matches(query))
                            .cloned()
                            .collect(),
                        None => self.store.clone(),
                    };
                    debug!(entity_type, ?query, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let indices = self.positions(&id);
                    let Some((&first, rest)) = indices.split_first() else {
                        debug!(entity_type, %id, "Not found, ignoring action");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    match self.apply_action(first, rest, action) {
                        Ok((result, changed)) => {
                            for (index, item) in changed {
                                self.store[index] = item;
                            }
                            let updated = self.store[first].clone();
                            self.persist(entity_type).await;
                            self.notify(Change::Updated(id.clone()));
                            info!(entity_type, %id, matched = indices.len(), "Action ok");
                            let _ = respond_to.send(Ok(Some((result, updated))));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        debug!(entity_type, %id, "Not found, nothing to delete");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    let removed = self.store.remove(index);
                    self.store.retain(|item| item.id() != &id);
                    self.persist(entity_type).await;
                    self.notify(Change::Deleted(id.clone()));
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(Some(removed)));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    self.persist(entity_type).await;
                    self.notify(Change::Cleared);
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn positions(&self, id: &T::Id) -> Vec<usize> {
        self.store
            .iter()
            .enumerate()
            .filter(|(_, item)| item.id() == id)
            .map(|(index, _)| index)
            .collect()
    }

    /// Runs `action` against copies of every matching item. The store is only
    /// touched by the caller, once every copy has succeeded.
    #[allow(clippy::type_complexity)]
    fn apply_action(
        &self,
        first: usize,
        rest: &[usize],
        action: T::Action,
    ) -> Result<(T::ActionResult, Vec<(usize, T)>), T::Error> {
        let mut changed = Vec::with_capacity(rest.len() + 1);
        for &index in rest {
            let mut item = self.store[index].clone();
            item.handle_action(action.clone())?;
            changed.push((index, item));
        }

        let mut item = self.store[first].clone();
        let result = item.handle_action(action)?;
        changed.push((first, item));
        Ok((result, changed))
    }

    async fn load(&self, entity_type: &str) -> Vec<T> {
        match self.slot.load::<Vec<T>>().await {
            Ok(Some(items)) => items,
            Ok(None) => {
                debug!(entity_type, slot = self.slot.key(), "No persisted state");
                Vec::new()
            }
            Err(e) => {
                error!(entity_type, slot = self.slot.key(), error = %e, "Load failed, starting empty");
                Vec::new()
            }
        }
    }

    async fn persist(&self, entity_type: &str) {
        if let Err(e) = self.slot.save(&self.store).await {
            error!(entity_type, slot = self.slot.key(), error = %e, "Persist failed");
        }
    }

    fn notify(&self, change: Change<T::Id>) {
        // Err only means nobody is subscribed.
        let _ = self.changes.send(change);
    }
}

/// Short type name (e.g. "Order" instead of "storefront::model::order::Order").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
