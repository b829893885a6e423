//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They keep the same contracts as the PostgreSQL adapters: cart adds
//! accumulate, clears are idempotent, and stock batches are all-or-nothing.

use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{validate_quantity, CartSnapshot, Item, ItemId, UserId};
use crate::domain::ports::{CartLedger, ItemCatalog, StockLedger};
use crate::error::DomainError;

// ============================================================================
// In-Memory Cart Ledger
// ============================================================================

#[derive(Default)]
pub struct InMemoryCartLedger {
    carts: Arc<RwLock<HashMap<UserId, CartSnapshot>>>,
    failing_clears: AtomicUsize,
    clear_calls: AtomicUsize,
}

impl InMemoryCartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a user's cart for testing
    pub fn with_cart(self, user_id: UserId, cart: CartSnapshot) -> Self {
        self.carts.write().unwrap().insert(user_id, cart);
        self
    }

    /// Make the next `n` calls to `clear_cart` fail with a store error
    pub fn fail_next_clears(&self, n: usize) {
        self.failing_clears.store(n, Ordering::SeqCst);
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartLedger for InMemoryCartLedger {
    async fn add_item(
        &self,
        user_id: &UserId,
        item_id: ItemId,
        quantity: i32,
    ) -> Result<(), DomainError> {
        user_id.validate()?;
        validate_quantity(item_id, quantity)?;

        let mut carts = self.carts.write().unwrap();
        carts
            .entry(user_id.clone())
            .or_default()
            .add(item_id, quantity)
    }

    async fn get_cart(&self, user_id: &UserId) -> Result<CartSnapshot, DomainError> {
        user_id.validate()?;

        let carts = self.carts.read().unwrap();
        Ok(carts.get(user_id).cloned().unwrap_or_default())
    }

    async fn clear_cart(&self, user_id: &UserId) -> Result<(), DomainError> {
        user_id.validate()?;
        self.clear_calls.fetch_add(1, Ordering::SeqCst);

        let should_fail = self
            .failing_clears
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(DbErr::Custom("connection reset".to_string()).into());
        }

        self.carts.write().unwrap().remove(user_id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Stock Ledger
// ============================================================================

/// Item table shared by the catalog and the stock ledger.
///
/// One mutex over the whole table stands in for per-row locks: a batch holds
/// it for its full duration, which is at least as strict as the store.
#[derive(Default)]
pub struct InMemoryStockLedger {
    items: Arc<Mutex<HashMap<ItemId, Item>>>,
    decrease_calls: AtomicUsize,
}

impl InMemoryStockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item for testing
    pub fn with_item(self, item: Item) -> Self {
        self.items.lock().unwrap().insert(item.id, item);
        self
    }

    pub fn stock_of(&self, item_id: ItemId) -> Option<i32> {
        self.items.lock().unwrap().get(&item_id).map(|i| i.stock)
    }

    pub fn decrease_calls(&self) -> usize {
        self.decrease_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemCatalog for InMemoryStockLedger {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl StockLedger for InMemoryStockLedger {
    async fn decrease_stock(&self, lines: &CartSnapshot) -> Result<(), DomainError> {
        self.decrease_calls.fetch_add(1, Ordering::SeqCst);
        lines.validate()?;

        let mut items = self.items.lock().unwrap();

        // Work on a copy and swap it in only when every line succeeded
        let mut staged = items.clone();
        for (item_id, requested) in lines.iter() {
            let item = staged
                .get_mut(&item_id)
                .ok_or(DomainError::UnknownItem(item_id))?;
            if !item.has_stock_for(requested) {
                return Err(DomainError::InsufficientStock {
                    item_id,
                    requested,
                    available: item.stock,
                });
            }
            item.stock -= requested;
        }

        *items = staged;
        Ok(())
    }
}
