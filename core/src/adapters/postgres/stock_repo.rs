//! PostgreSQL adapter for StockLedger
//!
//! The whole batch runs in one transaction. Rows are locked with
//! `SELECT ... FOR UPDATE` in ascending item id order, so two checkouts sharing
//! items always queue on the same first row instead of deadlocking.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QuerySelect, Set,
    TransactionTrait,
};

use crate::domain::entities::CartSnapshot;
use crate::domain::ports::StockLedger;
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of StockLedger
pub struct PostgresStockLedger {
    db: DatabaseConnection,
    lock_timeout: Option<Duration>,
}

impl PostgresStockLedger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            lock_timeout: None,
        }
    }

    /// Abort a decrement that waits longer than `timeout` on any row lock
    pub fn with_lock_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lock_timeout = timeout;
        self
    }
}

#[async_trait]
impl StockLedger for PostgresStockLedger {
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn decrease_stock(&self, lines: &CartSnapshot) -> Result<(), DomainError> {
        lines.validate()?;
        if lines.is_empty() {
            tracing::debug!("Nothing to deduct");
            return Ok(());
        }

        // Returning early drops `txn` uncommitted, which rolls back every
        // decrement made so far in this batch.
        let txn = self.db.begin().await?;

        if let Some(timeout) = self.lock_timeout {
            txn.execute_unprepared(&lock_timeout_statement(timeout))
                .await?;
        }

        for (item_id, requested) in lines.iter() {
            let item = items::Entity::find_by_id(item_id.0)
                .lock_exclusive()
                .one(&txn)
                .await?
                .ok_or(DomainError::UnknownItem(item_id))?;

            if item.stock < requested {
                tracing::warn!(
                    item_id = %item_id,
                    requested,
                    available = item.stock,
                    "Insufficient stock, rolling back"
                );
                return Err(DomainError::InsufficientStock {
                    item_id,
                    requested,
                    available: item.stock,
                });
            }

            items::ActiveModel {
                id: Set(item.id),
                stock: Set(item.stock - requested),
                ..Default::default()
            }
            .update(&txn)
            .await?;
        }

        txn.commit().await?;

        tracing::info!(units = lines.total_units(), "Stock deducted");
        Ok(())
    }
}

/// `SET LOCAL lock_timeout` for one transaction.
///
/// PostgreSQL treats `0` as "no timeout", so sub-millisecond values round up.
fn lock_timeout_statement(timeout: Duration) -> String {
    format!(
        "SET LOCAL lock_timeout = '{}ms'",
        timeout.as_millis().max(1)
    )
}
