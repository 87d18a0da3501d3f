//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront stores.
//!
//! Each store is an independent actor with its own slot; neither depends on
//! the other, so they are created and spawned side by side:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(orders_slot, capacity);
//! let (wishlist_actor, wishlist_client) = wishlist_actor::new(wishlist_slot, capacity);
//!
//! let handles = vec![
//!     tokio::spawn(order_actor.run()),
//!     tokio::spawn(wishlist_actor.run()),
//! ];
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each request channel
//! 2. **Actors drain** - queued requests are still answered and persisted
//! 3. **Await completion** - each actor logs its final size and exits
//!
//! Clones of a client held elsewhere keep that store alive; shutdown waits
//! for them to be dropped too.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](resource_actor::tracing::setup_tracing) once at
//! startup. `RUST_LOG=debug` shows every request with its payload.

pub mod storefront_system;

pub use storefront_system::*;
