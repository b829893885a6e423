//! Domain layer
//!
//! Cart and stock rules with no knowledge of the backing store.
//! - `entities`: items, user ids and cart snapshots
//! - `ports`: ledger traits implemented by the adapters

pub mod entities;
pub mod ports;
