//! [`ResourceEntity`] implementation for [`Order`].
//!
//! Orders are kept most-recent-first under the `orders` slot. Ids come from
//! checkout and are not checked for duplicates.

use super::actions::{OrderAction, OrderActionResult, OrderQuery};
use crate::model::{Order, OrderCreate, OrderId};
use chrono::Utc;
use resource_actor::{Placement, ResourceEntity};
use std::convert::Infallible;

impl ResourceEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Error = Infallible;

    const SLOT_KEY: &'static str = "orders";
    const PLACEMENT: Placement = Placement::Front;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(params: OrderCreate) -> Result<Self, Infallible> {
        Ok(Order::new(params, Utc::now()))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, Infallible> {
        let now = Utc::now();
        let note = match action {
            OrderAction::SetStatus { status, note } => self.set_status(status, note, now),
            OrderAction::AddNote(text) => Some(self.add_note(text, now)),
        };
        Ok(note)
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        query.matches(self)
    }
}
