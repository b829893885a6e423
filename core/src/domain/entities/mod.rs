//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod cart;
pub mod item;

pub use cart::{validate_quantity, CartSnapshot, UserId};
pub use item::{Item, ItemId};
