//! # Resource Actor
//!
//! Building blocks for persisted, single-owner resource stores. Each store is
//! one Tokio task (a [`ResourceActor`]) that owns an ordered collection,
//! mirrors it into a key-value slot, and answers requests sent through a
//! cloneable [`ResourceClient`].
//!
//! ## Why an actor per collection?
//!
//! - Requests are handled one at a time, each to completion: no two mutations
//!   interleave and the collection needs no lock.
//! - The client is the single shared-ownership handle to the store. It is
//!   passed explicitly to whoever needs it; there is no ambient global state.
//! - Persistence and change notification happen inside the same request, in a
//!   fixed order: mutate, write the slot, notify observers, reply.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ResourceEntity`]) - domain types: id, create payload, actions, queries.
//! 2. **Runtime** ([`ResourceActor`]) - message loop, ordering, load/write-through.
//! 3. **Persistence** ([`persist`]) - [`Slot`](persist::Slot) over a
//!    [`KeyValueStore`](persist::KeyValueStore) backend.
//! 4. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async API.
//!
//! ## Failure model
//!
//! - Unknown ids are not errors: actions and deletes answer `None`.
//! - A slot that cannot be read or parsed at startup is logged and the store
//!   starts empty.
//! - A slot write that fails is logged; the in-memory state stays authoritative.
//! - [`FrameworkError`] is reserved for the runtime itself (actor gone,
//!   duplicate id on a unique collection, entity-level failure).
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, for
//! testing domain clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod persist;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{Placement, ResourceEntity};
pub use error::{FrameworkError, PersistError};
pub use message::{Change, ResourceRequest, Response};
