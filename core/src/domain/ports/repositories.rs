//! Ledger port traits
//!
//! These traits define the interface for cart and stock persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{CartSnapshot, Item, ItemId, UserId};
use crate::error::DomainError;

/// Read-only item lookup
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// Find an item by ID
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError>;
}

/// Per-user cart entries
#[async_trait]
pub trait CartLedger: Send + Sync {
    /// Add `quantity` of an item to a user's cart.
    ///
    /// Accumulates onto an existing entry for the same (user, item) pair in one
    /// atomic step; never overwrites.
    async fn add_item(
        &self,
        user_id: &UserId,
        item_id: ItemId,
        quantity: i32,
    ) -> Result<(), DomainError>;

    /// Read the whole cart; empty when the user has no entries
    async fn get_cart(&self, user_id: &UserId) -> Result<CartSnapshot, DomainError>;

    /// Delete every entry for the user. Idempotent.
    async fn clear_cart(&self, user_id: &UserId) -> Result<(), DomainError>;
}

/// Item stock levels
#[async_trait]
pub trait StockLedger: Send + Sync {
    /// Deduct every line of `lines` from stock, all-or-nothing.
    ///
    /// Each item row is locked before its stock is checked, and all locks are
    /// held until the whole batch commits or rolls back. Fails with
    /// `InsufficientStock` naming the first item that cannot be covered.
    async fn decrease_stock(&self, lines: &CartSnapshot) -> Result<(), DomainError>;
}
