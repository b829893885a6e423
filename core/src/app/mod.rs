//! Application layer
//!
//! Use cases that coordinate more than one ledger.

pub mod checkout_service;

pub use checkout_service::{CheckoutCoordinator, CheckoutReceipt};
