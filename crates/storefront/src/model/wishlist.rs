use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Catalog product identifier as used by the wishlist.
///
/// Catalog ids are numeric; text ids are accepted as well. Each keeps its JSON
/// form, so `7` and `"7"` are different products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(u64),
    Text(String),
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Numeric(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Numeric(id) => write!(f, "{id}"),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

/// A product marked by the shopper. Serialized as the bare product id, so the
/// `wishlist` slot is a plain JSON array of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishlistEntry {
    pub product_id: ProductId,
}

impl WishlistEntry {
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }
}
