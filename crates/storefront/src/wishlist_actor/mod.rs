//! # Wishlist Actor
//!
//! The wishlist store: product ids the shopper has marked, in the order they
//! were added, persisted as a plain JSON array under the `wishlist` slot.
//!
//! - [`entity`] - [`ResourceEntity`](resource_actor::ResourceEntity) implementation for [`WishlistEntry`]
//! - [`error`] - [`WishlistError`]
//! - [`new()`] - factory creating the actor and its client

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::model::WishlistEntry;
use resource_actor::persist::Slot;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Wishlist actor bound to `slot`, and its client.
pub fn new(
    slot: Slot,
    capacity: usize,
) -> (ResourceActor<WishlistEntry>, ResourceClient<WishlistEntry>) {
    ResourceActor::new(slot, capacity)
}
