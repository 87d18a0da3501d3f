//! # Order Actor
//!
//! The order store: a [`ResourceActor`] owning the order collection and
//! mirroring it into the `orders` slot after every mutation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_actor::ResourceEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] (status transitions, notes) and [`OrderQuery`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - factory creating the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use resource_actor::persist::Slot;
//! use storefront::clients::OrderClient;
//! use storefront::model::{CustomerInfo, OrderCreate, OrderStatus};
//! use storefront::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(Slot::in_memory("orders"), 32);
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let order = client
//!         .create_order(OrderCreate {
//!             order_number: "A-1001".to_string(),
//!             order_form: CustomerInfo::new("Анна", "+7 900 000-00-00"),
//!             cart_items: serde_json::json!([]),
//!             price_calculation: None,
//!         })
//!         .await?;
//!
//!     client.set_status(order.id, OrderStatus::Confirmed, None).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use resource_actor::persist::Slot;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor bound to `slot`, and its client.
pub fn new(slot: Slot, capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(slot, capacity)
}
