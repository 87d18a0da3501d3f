//! [`ResourceEntity`] implementation for [`WishlistEntry`].
//!
//! The wishlist is an ordered set: entries are appended and the actor rejects
//! a product that is already present.

use crate::model::{ProductId, WishlistEntry};
use resource_actor::{Placement, ResourceEntity};
use std::convert::Infallible;

/// Wishlist entries carry no mutations; they are only added and removed.
#[derive(Debug, Clone)]
pub enum WishlistAction {}

/// Wishlist listing is never filtered.
#[derive(Debug, Clone)]
pub enum WishlistQuery {}

impl ResourceEntity for WishlistEntry {
    type Id = ProductId;
    type Create = ProductId;
    type Action = WishlistAction;
    type ActionResult = ();
    type Query = WishlistQuery;
    type Error = Infallible;

    const SLOT_KEY: &'static str = "wishlist";
    const PLACEMENT: Placement = Placement::Back;
    const UNIQUE_IDS: bool = true;

    fn id(&self) -> &ProductId {
        &self.product_id
    }

    fn from_create_params(product_id: ProductId) -> Result<Self, Infallible> {
        Ok(WishlistEntry::new(product_id))
    }

    fn handle_action(&mut self, action: WishlistAction) -> Result<(), Infallible> {
        match action {}
    }

    fn matches(&self, query: &WishlistQuery) -> bool {
        match *query {}
    }
}
