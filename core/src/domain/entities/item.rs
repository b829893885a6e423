//! Item domain entity
//!
//! Items are seeded into the catalog outside this crate. Only the stock ledger
//! ever changes `stock`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item with its current stock level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    /// Never negative between transactions
    pub stock: i32,
}

impl Item {
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }
}
