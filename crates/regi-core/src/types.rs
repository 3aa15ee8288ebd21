//! # Domain Types
//!
//! Core domain types used throughout Regi POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Product      │   │    LineItem     │   │  TerminalIdentity    │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  id (server)    │   │  product        │   │  store_code          │  │
//! │  │  code (scan)    │   │  qty (>= 1)     │   │  pos_id              │  │
//! │  │  name           │   │                 │   │  employee_code       │  │
//! │  │  price (yen)    │   │                 │   │                      │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────────┘  │
//! │                                                                         │
//! │  Dual-key identity: `id` is the server-assigned key used for cart      │
//! │  merging and purchase lines; `code` is the scan key the operator       │
//! │  types, and the two may differ.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{DEFAULT_EMPLOYEE_CODE, DEFAULT_POS_ID, DEFAULT_STORE_CODE};

// =============================================================================
// Product
// =============================================================================

/// A product resolved from the master data backend.
///
/// Immutable once fetched: the session holds it transiently until it is
/// added to the purchase list or discarded by the next scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, unique in the product master.
    pub id: i64,

    /// Scan key (JAN/EAN code as typed or scanned). May differ from `id`.
    pub code: String,

    /// Display name shown to the operator and on the list.
    pub name: String,

    /// Unit price in whole yen, non-negative.
    pub price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the purchase list together with its quantity.
///
/// ## Invariants
/// - `qty >= 1` while the item is present in the list; an item reaching
///   `qty <= 0` is removed, never kept at zero or negative quantity
/// - At most one LineItem per distinct product id in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product, frozen at the moment it was added.
    pub product: Product,

    /// Quantity on this line.
    pub qty: i64,
}

impl LineItem {
    /// Creates a new line with quantity 1.
    pub fn new(product: Product) -> Self {
        LineItem { product, qty: 1 }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.qty)
    }
}

// =============================================================================
// Terminal Identity
// =============================================================================

/// The store/POS/employee codes identifying which checkout station and
/// operator submitted a transaction.
///
/// Free-text fields with fixed defaults, editable by the operator, attached
/// to every purchase submission. No validation beyond presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalIdentity {
    /// Store code (`store_cd` on the wire).
    pub store_code: String,

    /// POS terminal id (`pos_no` on the wire).
    pub pos_id: String,

    /// Employee code of the operator (`emp_cd` on the wire).
    pub employee_code: String,
}

impl Default for TerminalIdentity {
    fn default() -> Self {
        TerminalIdentity {
            store_code: DEFAULT_STORE_CODE.to_string(),
            pos_id: DEFAULT_POS_ID.to_string(),
            employee_code: DEFAULT_EMPLOYEE_CODE.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
