//! PostgreSQL adapters
//!
//! Implementations of the ledger traits using SeaORM and PostgreSQL.

pub mod cart_repo;
pub mod item_repo;
pub mod stock_repo;


pub use cart_repo::PostgresCartLedger;
pub use item_repo::PostgresItemCatalog;
pub use stock_repo::PostgresStockLedger;
