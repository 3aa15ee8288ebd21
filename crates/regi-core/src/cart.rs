//! # Purchase List (Cart)
//!
//! The accumulated purchase list and its derived totals.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Invariants                                   │
//! │                                                                         │
//! │  • Lines are unique by product id (adding the same product merges)      │
//! │  • qty >= 1 for every line; a change driving qty <= 0 removes the line  │
//! │  • Insertion order is preserved for display                             │
//! │  • subtotal/tax/total are pure functions of the lines, recomputed on    │
//! │    every read - there is no cached total that can go stale              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, TaxRate};
use crate::types::{LineItem, Product};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

/// The purchase list: an insertion-ordered sequence of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty purchase list.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Read access to the lines, in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Adds a product to the list.
    ///
    /// ## Behavior
    /// - If a line with the same product id exists: increments its qty by 1,
    ///   keeping the line at its original position
    /// - Otherwise: appends a new line with qty 1
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_qty = line.qty + 1;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.qty = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(LineItem::new(product));
        Ok(())
    }

    /// Adjusts the quantity of a line by an arbitrary delta.
    ///
    /// ## Behavior
    /// - Resulting qty <= 0: the line is removed entirely
    /// - Resulting qty above the maximum: error, line unchanged
    /// - Unknown product id: no-op
    pub fn change_qty(&mut self, product_id: i64, delta: i64) -> CoreResult<()> {
        let Some(pos) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return Ok(());
        };

        // Saturating: an operator-typed delta can be any i64, and a
        // saturated result lands in the same <= 0 or > MAX branches
        let new_qty = self.lines[pos].qty.saturating_add(delta);
        if new_qty <= 0 {
            self.lines.remove(pos);
            return Ok(());
        }
        if new_qty > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: new_qty,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines[pos].qty = new_qty;
        Ok(())
    }

    /// Removes the line with the given product id; no-op when absent.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Clears the whole list. Called on purchase success.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    // =========================================================================
    // Derived Totals
    // =========================================================================
    // Recomputed from the lines on every read - never cached, never stale.

    /// Subtotal before tax: Σ(price × qty).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Tax: floor(subtotal × rate), at the standard consumption rate.
    pub fn tax(&self) -> Money {
        self.subtotal().tax(TaxRate::consumption())
    }

    /// Grand total: subtotal + tax.
    ///
    /// Display only - the backend's settled total is authoritative for the
    /// amount actually charged.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
