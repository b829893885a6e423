//! Adapters layer
//!
//! Implementations of ledger ports for the backing store.

pub mod postgres;

pub use postgres::{PostgresCartLedger, PostgresItemCatalog, PostgresStockLedger};
