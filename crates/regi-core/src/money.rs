//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    450 * 0.10 = 45.000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Yen + Basis Points                               │
//! │    450 * 1000 / 10000 = 45                                              │
//! │    Exact, and the floor matches how the register rounds tax down       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Yen has no minor unit, so `Money` is a whole-yen amount. Tax is computed
//! with an integer floor, matching `tax = floor(subtotal × 0.10)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole yen.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for future refund flows
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare JSON number, which is what
///   the backend sends for `price` and `total`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole yen.
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Money(yen)
    }

    /// Returns the value in whole yen.
    #[inline]
    pub const fn yen(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding DOWN to the nearest yen.
    ///
    /// ## Why Floor?
    /// Japanese consumption tax on a receipt total is truncated, never
    /// rounded up. `¥449 × 10% = ¥44.9 → ¥44`.
    ///
    /// ## Example
    /// ```rust
    /// use regi_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_yen(450);
    /// let tax = subtotal.tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.yen(), 45);
    ///
    /// let odd = Money::from_yen(449);
    /// assert_eq!(odd.tax(TaxRate::from_bps(1000)).yen(), 44);
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        // i128 to prevent overflow on large amounts.
        // Integer division floors for non-negative operands, which is the
        // required truncation. Negative subtotals cannot occur (qty >= 1,
        // price >= 0), so no special casing.
        let tax_yen = (self.0 as i128 * rate.bps() as i128) / 10000;
        Money::from_yen(tax_yen as i64)
    }

    /// Multiplies money by a quantity, saturating on overflow. A
    /// backend-supplied price times a capped quantity stays far below the
    /// limit, so saturation is unreachable in practice but keeps the
    /// arithmetic total.
    ///
    /// ## Example
    /// ```rust
    /// use regi_core::money::Money;
    ///
    /// let unit_price = Money::from_yen(150);
    /// assert_eq!(unit_price.multiply_quantity(2).yen(), 300);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10% consumption tax.
/// Integer bps keep the tax computation float-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The standard 10% consumption tax rate.
    #[inline]
    pub const fn consumption() -> Self {
        TaxRate(crate::TAX_RATE_BPS)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::consumption()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount the way the register prints it: `¥495`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-¥{}", self.0.abs())
        } else {
            write!(f, "¥{}", self.0)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
