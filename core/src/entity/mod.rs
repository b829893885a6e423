//! SeaORM entity definitions
//!
//! Table-level models for the persisted store. The domain types these map to
//! live in `domain::entities`.

pub mod carts;
pub mod items;
