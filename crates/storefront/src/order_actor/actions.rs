//! Mutations and filters for the Order actor.
//!
//! Actions are applied by [`ResourceEntity::handle_action`](resource_actor::ResourceEntity::handle_action)
//! inside the actor, one at a time. Queries select orders for list requests
//! without changing store order.

use crate::model::{Order, OrderStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move to `status`, recording a `status_change` note when the status
    /// changes or `note` is non-empty.
    SetStatus {
        status: OrderStatus,
        note: Option<String>,
    },
    /// Append a hand-written note.
    AddNote(String),
}

/// Note appended by an action, if any. `SetStatus` to the current status
/// with no note appends nothing.
pub type OrderActionResult = Option<crate::model::OrderNote>;

/// Filters for listing orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Orders with exactly this status.
    Status(OrderStatus),
    /// Case-insensitive substring search over order number, customer name,
    /// phone and email. Holds lowercase text; build it with [`OrderQuery::search`].
    Search(String),
}

impl OrderQuery {
    pub fn search(text: &str) -> Self {
        OrderQuery::Search(text.to_lowercase())
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderQuery::Status(status) => order.status == *status,
            OrderQuery::Search(lowered) => order.matches_text(lowered),
        }
    }
}
