//! Checkout service
//!
//! Turns a user's cart into a stock deduction:
//! 1. Read the cart
//! 2. Deduct every line from stock in one all-or-nothing batch
//! 3. Clear the cart, only if the deduction committed
//!
//! A failed deduction leaves the cart untouched so the user can retry or
//! adjust quantities. A failed clear after a committed deduction is reported
//! as `CheckoutError::CartNotCleared` and recovered with `reconcile`.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{CartSnapshot, UserId};
use crate::domain::ports::{CartLedger, StockLedger};
use crate::error::CheckoutError;

/// What a successful checkout deducted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub user_id: UserId,
    pub items: CartSnapshot,
}

/// Service coordinating the cart and stock ledgers
pub struct CheckoutCoordinator<CL, SL>
where
    CL: CartLedger,
    SL: StockLedger,
{
    carts: Arc<CL>,
    stock: Arc<SL>,
}

impl<CL, SL> CheckoutCoordinator<CL, SL>
where
    CL: CartLedger,
    SL: StockLedger,
{
    pub fn new(carts: Arc<CL>, stock: Arc<SL>) -> Self {
        Self { carts, stock }
    }

    /// Check out the user's whole cart
    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    pub async fn checkout(&self, user_id: &UserId) -> Result<CheckoutReceipt, CheckoutError> {
        let snapshot = self.carts.get_cart(user_id).await?;
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart(user_id.clone()));
        }

        if let Err(e) = self.stock.decrease_stock(&snapshot).await {
            tracing::warn!(error = %e, "Checkout rejected, cart left intact");
            return Err(e.into());
        }

        if let Err(source) = self.carts.clear_cart(user_id).await {
            tracing::error!(
                error = %source,
                units = snapshot.total_units(),
                "Stock deducted but cart not cleared; reconciliation required"
            );
            return Err(CheckoutError::CartNotCleared {
                user_id: user_id.clone(),
                deducted: snapshot,
                source,
            });
        }

        tracing::info!(
            lines = snapshot.len(),
            units = snapshot.total_units(),
            "Checkout complete"
        );

        Ok(CheckoutReceipt {
            user_id: user_id.clone(),
            items: snapshot,
        })
    }

    /// Clear a cart whose stock was already deducted by a checkout that
    /// returned `CartNotCleared`. Safe to repeat.
    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    pub async fn reconcile(&self, user_id: &UserId) -> Result<(), CheckoutError> {
        self.carts.clear_cart(user_id).await?;
        tracing::info!("Paid cart reconciled");
        Ok(())
    }

    /// Drop the user's cart without touching stock
    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    pub async fn abandon(&self, user_id: &UserId) -> Result<(), CheckoutError> {
        self.carts.clear_cart(user_id).await?;
        tracing::debug!("Cart abandoned");
        Ok(())
    }
}
