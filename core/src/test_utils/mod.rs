//! Test utilities
//!
//! Manual in-memory implementations of the ledger ports and test fixtures for
//! unit testing. The PostgreSQL adapters have their own `#[ignore]`d
//! integration tests that run against a real database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
