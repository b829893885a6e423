//! stockcart core
//!
//! Cart accumulation and oversell-proof stock deduction on top of PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture: the checkout flow is written
//! against the ledger traits in `domain::ports`, and `adapters::postgres`
//! supplies the SeaORM-backed implementations.
//!
//! Wiring, as an embedding HTTP or CLI layer would do it:
//!
//! ```rust,ignore
//! let config = Config::from_env()?;
//! let db = db::connect(&config).await?;
//!
//! let carts = Arc::new(PostgresCartLedger::new(db.clone()));
//! let stock = Arc::new(PostgresStockLedger::new(db).with_lock_timeout(config.lock_timeout));
//! let checkout = CheckoutCoordinator::new(carts.clone(), stock);
//!
//! carts.add_item(&user, ItemId(1), 2).await?;
//! let receipt = checkout.checkout(&user).await?;
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod entity;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;

pub use adapters::{PostgresCartLedger, PostgresItemCatalog, PostgresStockLedger};
pub use app::{CheckoutCoordinator, CheckoutReceipt};
pub use config::Config;
pub use domain::entities::{CartSnapshot, Item, ItemId, UserId};
pub use domain::ports::{CartLedger, ItemCatalog, StockLedger};
pub use error::{CheckoutError, ConfigError, DomainError};
