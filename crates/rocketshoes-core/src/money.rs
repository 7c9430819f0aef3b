//! # Money Module
//!
//! Provides the `Money` type for prices and cart subtotals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog API sends prices as JSON numbers:                          │
//! │    { "price": 179.9 }                                                   │
//! │                                                                         │
//! │  Summing them as floats drifts:                                         │
//! │    179.9 * 3 = 539.6999999999999  ❌                                    │
//! │                                                                         │
//! │  OUR SOLUTION: convert ONCE at the API boundary to integer cents        │
//! │    179.9 → 17990 cents, 17990 * 3 = 53970 cents  ✅                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rocketshoes_core::money::Money;
//!
//! let price = Money::from_cents(17990);
//! let line_total = price.checked_mul(3).unwrap();
//! assert_eq!(line_total.cents(), 53970);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Number of minor units in one major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary value in the smallest currency unit (centavos / cents).
///
/// Serialized as a bare integer so the persisted slot stays compact:
/// `{"price": 17990}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as sent by the catalog API) into cents.
    ///
    /// Rounds half away from zero. Returns `None` for NaN, infinities, or
    /// values that do not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(179.9).unwrap().cents(), 17990);
    /// assert_eq!(Money::from_decimal(99.99).unwrap().cents(), 9999);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * CENTS_PER_UNIT as f64).round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul(3).unwrap().cents(), 897);
    /// assert!(Money::from_cents(i64::MAX).checked_mul(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul(self, quantity: i64) -> Option<Money> {
        match self.0.checked_mul(quantity) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Plain `units.cents` rendering. Currency symbols and locale formatting are
/// applied by the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(17990);
        assert_eq!(money.cents(), 17990);
        assert_eq!(money.units(), 179);
        assert_eq!(money.cents_part(), 90);
    }

    #[test]
    fn test_from_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(139.9).unwrap().cents(), 13990);
        assert_eq!(Money::from_decimal(10.125).unwrap().cents(), 1013);
        assert_eq!(Money::from_decimal(-2.5).unwrap().cents(), -250);
        assert_eq!(Money::from_decimal(0.0).unwrap(), Money::zero());
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
        assert!(Money::from_decimal(f64::MAX).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(17990).to_string(), "179.90");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert!(Money::from_cents(i64::MAX).checked_add(b).is_none());
        assert_eq!(a.checked_mul(3), Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(17990)).unwrap();
        assert_eq!(json, "17990");

        let back: Money = serde_json::from_str("17990").unwrap();
        assert_eq!(back.cents(), 17990);
    }
}
