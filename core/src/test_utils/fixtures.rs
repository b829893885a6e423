//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;

use crate::domain::entities::{Item, ItemId, UserId};

/// Create a test item with the given id and stock
pub fn test_item(id: i32, stock: i32) -> Item {
    Item {
        id: ItemId(id),
        name: format!("item-{}", id),
        price: Decimal::new(999, 2),
        stock,
    }
}

/// Create a test user id
pub fn test_user() -> UserId {
    UserId::from("test-user")
}

/// Create a test user id with a specific name
pub fn test_user_named(name: &str) -> UserId {
    UserId::from(name)
}
