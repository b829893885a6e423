//! Unified error types for the stockcart core
//!
//! This module defines error types for each layer:
//! - `DomainError`: ledger errors raised by ports and their adapters
//! - `CheckoutError`: checkout orchestration errors (wraps domain errors)
//! - `ConfigError`: configuration loading errors

use sea_orm::DbErr;
use thiserror::Error;

use crate::domain::entities::{CartSnapshot, ItemId, UserId};

/// Domain layer errors - raised by the cart and stock ledgers
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    #[error(
        "Insufficient stock for item {item_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        item_id: ItemId,
        requested: i32,
        available: i32,
    },

    /// Connectivity, lock timeout, deadlock or constraint failures from the store
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl DomainError {
    /// Shortfall for an insufficient-stock failure, `None` for every other error
    pub fn shortfall(&self) -> Option<i32> {
        match self {
            DomainError::InsufficientStock {
                requested,
                available,
                ..
            } => Some(requested - available),
            _ => None,
        }
    }
}

/// Checkout orchestration errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Cart for user {0} is empty")]
    EmptyCart(UserId),

    /// Stock was deducted but the cart could not be cleared afterwards.
    /// The caller must treat the cart as paid and reconcile it.
    #[error("Stock deducted for user {user_id} but cart was not cleared: {source}")]
    CartNotCleared {
        user_id: UserId,
        deducted: CartSnapshot,
        #[source]
        source: DomainError,
    },
}

impl CheckoutError {
    /// Whether the cart still holds already-deducted items
    pub fn needs_reconciliation(&self) -> bool {
        matches!(self, CheckoutError::CartNotCleared { .. })
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfall_only_for_insufficient_stock() {
        let err = DomainError::InsufficientStock {
            item_id: ItemId(1),
            requested: 3,
            available: 2,
        };
        assert_eq!(err.shortfall(), Some(1));
        assert_eq!(
            err.to_string(),
            "Insufficient stock for item 1: requested 3, available 2"
        );

        assert_eq!(DomainError::UnknownItem(ItemId(9)).shortfall(), None);
    }

    #[test]
    fn store_errors_pass_through_unchanged() {
        let err: DomainError = DbErr::Custom("lock timeout".to_string()).into();
        assert!(matches!(err, DomainError::Database(DbErr::Custom(ref m)) if m == "lock timeout"));
    }

    #[test]
    fn only_cart_not_cleared_needs_reconciliation() {
        let user = UserId::from("u-1");
        let pending = CheckoutError::CartNotCleared {
            user_id: user.clone(),
            deducted: CartSnapshot::from_lines([(ItemId(1), 2)]).unwrap(),
            source: DbErr::Custom("connection reset".to_string()).into(),
        };
        assert!(pending.needs_reconciliation());
        assert!(!CheckoutError::EmptyCart(user).needs_reconciliation());
    }
}
