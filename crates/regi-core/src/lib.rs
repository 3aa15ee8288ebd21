//! # regi-core: Pure Business Logic for Regi POS
//!
//! This crate is the **heart** of the Regi POS checkout client. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Regi POS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Operator Terminal (apps/terminal)               │   │
//! │  │    scan ──► add ──► qty/rm ──► buy ──► ok (dismiss popup)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ drives                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ regi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  session  │   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Checkout │   │   │
//! │  │   │ LineItem  │  │  TaxRate  │  │  totals   │  │  Session  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 regi-backend (HTTP client)                      │   │
//! │  │        GET {base}/product/{code}, POST {base}/purchase          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, TerminalIdentity)
//! - [`money`] - Money type in whole yen with integer arithmetic
//! - [`cart`] - The purchase list and its derived totals
//! - [`session`] - The checkout session state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole yen (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

pub mod cart;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// Re-exports for convenience, so users can do `use regi_core::Money`
// instead of `use regi_core::money::Money`.
pub use cart::Cart;
pub use error::{CoreError, ValidationError};
pub use money::{Money, TaxRate};
pub use session::{CheckoutSession, LookupTicket, PurchaseDraft, PurchaseOutcome};
pub use types::{LineItem, Product, TerminalIdentity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Consumption tax rate in basis points (1000 = 10%).
///
/// The tax is computed over the cart subtotal as an integer floor:
/// `tax = subtotal * 1000 / 10000`. The backend's settled total is
/// authoritative; this rate only drives the client-side display.
pub const TAX_RATE_BPS: u32 = 1000;

/// Fixed operator-facing message for a scan code with no master record.
///
/// Shown in the product-name slot when the lookup succeeds at the transport
/// level but the backend has no product for the code.
pub const MSG_PRODUCT_NOT_REGISTERED: &str = "商品がマスタ未登録です";

/// Maximum number of distinct lines in a purchase list.
///
/// Prevents runaway carts and keeps transactions reviewable on screen.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Default store code attached to purchase submissions.
pub const DEFAULT_STORE_CODE: &str = "30";

/// Default POS terminal id attached to purchase submissions.
pub const DEFAULT_POS_ID: &str = "90";

/// Default employee code attached to purchase submissions.
pub const DEFAULT_EMPLOYEE_CODE: &str = "EMP001";
