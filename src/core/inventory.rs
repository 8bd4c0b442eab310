//! Product inventory module
//!
//! Tracks the committed stock of each cola and the number of cups. Counts
//! are unsigned and only ever decremented after checking they are non-zero.

use crate::types::{Cola, Count, VendingError};
use std::collections::BTreeMap;

/// Cola stock and cups held by the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    stock: BTreeMap<Cola, Count>,
    cups: Count,
}

impl Inventory {
    /// Create an empty inventory: no colas, no cups
    pub fn new() -> Self {
        Inventory {
            stock: Cola::ALL.into_iter().map(|cola| (cola, 0)).collect(),
            cups: 0,
        }
    }

    /// Units of a cola in stock
    pub fn stock(&self, cola: Cola) -> Count {
        self.stock.get(&cola).copied().unwrap_or(0)
    }

    /// Stock levels for every cola, for reporting
    pub fn stock_levels(&self) -> &BTreeMap<Cola, Count> {
        &self.stock
    }

    /// Cups available
    pub fn cups(&self) -> Count {
        self.cups
    }

    /// Add cups
    ///
    /// # Returns
    ///
    /// * `Ok(Count)` - The new cup count
    /// * `Err(VendingError)` - If the count would overflow
    pub fn add_cups(&mut self, quantity: Count) -> Result<Count, VendingError> {
        self.cups = self
            .cups
            .checked_add(quantity)
            .ok_or_else(|| VendingError::count_overflow("CUPS", quantity))?;
        Ok(self.cups)
    }

    /// Add units of a cola
    ///
    /// # Returns
    ///
    /// * `Ok(Count)` - The new stock level
    /// * `Err(VendingError)` - If the count would overflow
    pub fn add_stock(&mut self, cola: Cola, quantity: Count) -> Result<Count, VendingError> {
        let slot = self.stock.entry(cola).or_insert(0);
        *slot = slot
            .checked_add(quantity)
            .ok_or_else(|| VendingError::count_overflow(cola.name(), quantity))?;
        Ok(*slot)
    }

    /// Take one cola and one cup
    ///
    /// Returns `false` and changes nothing if either the cola or the cups
    /// have run out.
    pub fn serve(&mut self, cola: Cola) -> bool {
        let in_stock = self.stock(cola);
        if in_stock == 0 || self.cups == 0 {
            return false;
        }

        self.stock.insert(cola, in_stock - 1);
        self.cups -= 1;
        true
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
