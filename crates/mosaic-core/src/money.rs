//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    64 × 0.00016 × 1.5 = 0.015360000000000002  ❌ WRONG!                │
//! │                                                                         │
//! │  Integer cents are not enough either: a single 8×8 tile costs          │
//! │  0.01536, five fractional digits.                                       │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 fixed point (rust_decimal)                       │
//! │    64 × 0.00016 × 1.5 = 0.01536 exactly                                │
//! │    Rounding happens ONCE, at the end of an estimate                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mosaic_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(12.34));
//! let total = price + Money::new(dec!(0.66));
//! assert_eq!(total.amount(), dec!(13.00));
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(12.34); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exact base-10 fractional arithmetic.
///
/// ## Design Decisions
/// - **Decimal (not i64 cents)**: production costs need sub-cent precision
/// - **Single field tuple struct**: zero-cost wrapper, serializes as the
///   bare decimal string (`"12.34"`)
/// - **No float constructor**: floats only enter through explicit
///   conversions inside the pricing code
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Tile.production_cost ──► TilePattern.production_cost ──┐               │
/// │                                                        ▼               │
/// │  Company.m2_price ──► material ──┬── production × (1 + margin%)        │
/// │                                  │                                      │
/// │  Company.hourly_wage ──► labor ──┴──► total.ceil_to_unit()             │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Zero money value.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wraps a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let wage = Money::new(dec!(56.78));
    /// assert_eq!(wage.amount(), dec!(56.78));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a value from whole currency units.
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds UP to the next whole currency unit.
    ///
    /// Ceiling, never round-to-nearest: a quote is never lower than the
    /// exact cost.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::new(dec!(19.0001)).ceil_to_unit(), Money::from_units(20));
    /// assert_eq!(Money::new(dec!(19)).ceil_to_unit(), Money::from_units(19));
    /// ```
    #[inline]
    pub fn ceil_to_unit(&self) -> Self {
        Money(self.0.ceil().normalize())
    }

    /// Adds a whole-percent markup: `amount × (1 + percent / 100)`.
    ///
    /// Returns `None` if the result leaves the decimal range.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let cost = Money::new(dec!(9.4616));
    /// assert_eq!(cost.checked_markup(5).unwrap().amount(), dec!(9.93468));
    /// ```
    pub fn checked_markup(&self, percent: u32) -> Option<Self> {
        let factor = Decimal::ONE + Decimal::from(percent) / Decimal::ONE_HUNDRED;
        self.checked_mul(factor)
    }

    /// Addition that returns `None` instead of panicking on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Scaling that returns `None` instead of panicking on overflow.
    #[inline]
    pub fn checked_mul(&self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering with trailing zeros removed.
///
/// ## Note
/// This is for logs and the CLI. Currency symbols and localization are the
/// caller's business.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
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

/// Scaling by a dimensionless decimal factor (areas, hours, head count).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
