//! # Money Module
//!
//! Provides the `Money` type used for subtotals and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog sends prices as JSON numbers:                              │
//! │    179.9 × 3 = 539.7000000000001  ❌                                     │
//! │                                                                         │
//! │  OUR SOLUTION: convert once, at the edge, to integer cents             │
//! │    17990 cents × 3 = 53970 cents  ✅                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_price(179.9);
//! assert_eq!(price.cents(), 17990);
//!
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.to_string(), "$539.70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a catalog price (major units as a float) to Money.
    ///
    /// Rounds half away from zero to the nearest cent. Non-finite input
    /// becomes zero; magnitudes beyond `i64` cents clamp to the bounds.
    pub fn from_price(price: f64) -> Self {
        if !price.is_finite() {
            return Money::zero();
        }
        Money((price * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. dollars).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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

    /// Multiplies money by a cart amount, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, amount: u32) -> Self {
        Money(self.0.saturating_mul(amount as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. The app formats with the configured currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, amount: u32) -> Self {
        self.multiply_quantity(amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price_rounds_to_cents() {
        assert_eq!(Money::from_price(179.9).cents(), 17990);
        assert_eq!(Money::from_price(10.0).cents(), 1000);
        assert_eq!(Money::from_price(0.125).cents(), 13);
        assert_eq!(Money::from_price(f64::NAN).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let huge = Money::from_price(1e300);
        assert_eq!(huge.cents(), i64::MAX);
        assert_eq!(huge.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);

        let debt = Money::from_price(-1e300);
        assert_eq!(debt.multiply_quantity(2).cents(), i64::MIN);

        let total: Money = vec![huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    /// Summing float prices drifts; summing cents does not.
    #[test]
    fn test_no_float_drift() {
        let float_total = 0.1 + 0.2;
        assert_ne!(float_total, 0.3);

        let total = Money::from_price(0.1) + Money::from_price(0.2);
        assert_eq!(total, Money::from_price(0.3));
    }
}
