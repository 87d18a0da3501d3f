//! Typed wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod order_client;
pub mod wishlist_client;

pub use order_client::*;
pub use wishlist_client::*;
