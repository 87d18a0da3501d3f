//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the contract every persisted resource (orders,
//! wishlist entries, ...) implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the payload types for
//! creation, custom actions and queries, the slot key the collection is
//! persisted under, and where new items land in the collection.
//!
//! The collection is an ordered list, not a map: store order is observable
//! (most-recent-first for orders, insertion order for the wishlist), so the
//! entity decides its [`Placement`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Where a newly created item is inserted into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Prepend, so the collection reads newest-first.
    Front,
    /// Append, so the collection reads in insertion order.
    Back,
}

/// Trait that any persisted resource must implement to be managed by `ResourceActor`.
///
/// Ids are supplied by the entity itself (through the create payload), never
/// generated by the actor. Whether duplicates are rejected is controlled by
/// [`ResourceEntity::UNIQUE_IDS`]. When duplicates are allowed, actions and
/// deletes apply to every item with the id, while `Get` returns the first.
pub trait ResourceEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The identifier carried by each entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new instance.
    type Create: Send + Debug + 'static;

    /// Enum of resource-specific mutations (e.g. `SetStatus`). Cloned once
    /// per item when several items share an id.
    type Action: Clone + Send + Debug + 'static;

    /// The result type returned by custom actions.
    type ActionResult: Send + Debug + 'static;

    /// Filter used by list requests.
    type Query: Send + Debug + 'static;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Default key of the persisted slot holding the whole collection.
    const SLOT_KEY: &'static str;

    /// Insertion point for newly created items.
    const PLACEMENT: Placement = Placement::Front;

    /// Reject creation when an item with the same id already exists.
    const UNIQUE_IDS: bool = false;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a custom action. Called for every item carrying the requested id;
    /// the result of the first one is returned to the caller.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this item is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
