//! Cart domain entity
//!
//! A cart is just the set of (item, quantity) rows owned by one user; it has no
//! identity of its own. `CartSnapshot` is the read-out used for checkout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;
use crate::error::DomainError;

/// Identifier of the user owning a cart
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reject blank ids before they reach the store
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation("User id must not be blank".to_string()));
        }
        Ok(())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantities added to a cart or deducted from stock must be positive
pub fn validate_quantity(item_id: ItemId, quantity: i32) -> Result<(), DomainError> {
    if quantity <= 0 {
        return Err(DomainError::Validation(format!(
            "Quantity for item {} must be positive, got {}",
            item_id, quantity
        )));
    }
    Ok(())
}

/// Item id -> quantity, read out of a cart for one checkout.
///
/// Iteration is in ascending item id order. The stock ledger locks rows in
/// exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot(BTreeMap<ItemId, i32>);

impl CartSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(item, quantity)` pairs, accumulating repeats
    pub fn from_lines<I>(lines: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (ItemId, i32)>,
    {
        let mut snapshot = Self::new();
        for (item_id, quantity) in lines {
            snapshot.add(item_id, quantity)?;
        }
        Ok(snapshot)
    }

    /// Add `quantity` of `item_id`, accumulating onto any existing line.
    ///
    /// A line that would overflow the store's integer column is rejected and
    /// left unchanged.
    pub fn add(&mut self, item_id: ItemId, quantity: i32) -> Result<(), DomainError> {
        let current = self.get(item_id).unwrap_or(0);
        let total = current.checked_add(quantity).ok_or_else(|| {
            DomainError::Validation(format!(
                "Quantity for item {} overflows: {} + {}",
                item_id, current, quantity
            ))
        })?;
        self.0.insert(item_id, total);
        Ok(())
    }

    pub fn get(&self, item_id: ItemId) -> Option<i32> {
        self.0.get(&item_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, i32)> + '_ {
        self.0.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of units across all lines
    pub fn total_units(&self) -> i64 {
        self.0.values().map(|q| i64::from(*q)).sum()
    }

    /// Every line must carry a positive quantity
    pub fn validate(&self) -> Result<(), DomainError> {
        self.iter()
            .try_for_each(|(item_id, quantity)| validate_quantity(item_id, quantity))
    }
}

impl IntoIterator for CartSnapshot {
    type Item = (ItemId, i32);
    type IntoIter = std::collections::btree_map::IntoIter<ItemId, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
