//! # Storefront Stores
//!
//! Order and wishlist stores for the storefront, each run as a
//! [`ResourceActor`](resource_actor::ResourceActor) persisted to its own slot.
//!
//! - [`model`] - orders, statuses, notes, stats, wishlist entries
//! - [`order_actor`] / [`wishlist_actor`] - entity wiring for the actors
//! - [`clients`] - typed async APIs ([`OrderClient`](clients::OrderClient),
//!   [`WishlistClient`](clients::WishlistClient))
//! - [`config`] - backend and slot configuration
//! - [`lifecycle`] - [`StorefrontSystem`](lifecycle::StorefrontSystem), startup and shutdown

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod wishlist_actor;
