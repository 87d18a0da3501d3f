//! Plain data structures persisted by the storefront stores.

pub mod labels;
pub mod order;
pub mod stats;
pub mod wishlist;

pub use order::*;
pub use stats::*;
pub use wishlist::*;
