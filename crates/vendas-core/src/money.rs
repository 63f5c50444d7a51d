//! # Money Module
//!
//! Provides the `Money` type for sale-order values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Stored as decimal text:  "10000.50"                                  │
//! │    Held in memory as:       1000050 cents                               │
//! │    Floats only at the edge: to_f64() → 10000.5                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendas_core::money::Money;
//!
//! let value: Money = "10000.50".parse().unwrap();
//! assert_eq!(value.cents(), 1_000_050);
//! assert_eq!(value.to_decimal_string(), "10000.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Decimal text at rest**: `valor_pedido` keeps the exact value, no REAL rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vendas_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use vendas_core::money::Money;
    ///
    /// let value = Money::from_major_minor(10_000, 50);
    /// assert_eq!(value.cents(), 1_000_050);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50 (refund)
    /// assert_eq!(negative.cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Canonical decimal form used for storage: always two fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use vendas_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1_000_050).to_decimal_string(), "10000.50");
    /// assert_eq!(Money::from_cents(-50).to_decimal_string(), "-0.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Floating-point view of the amount.
    ///
    /// ## Note
    /// For callers that expect a plain number. Never feed the result back
    /// into arithmetic; parse decimal text instead.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"10000.50"`, `"10000.5"`, `"10000"` or `"-5.50"`.
///
/// Trailing zeros beyond the second fractional digit are accepted
/// (`"1.500"`), any other third digit is rejected rather than rounded.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let input = s.trim();

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(CoreError::invalid_amount(s, "no digits"));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(CoreError::invalid_amount(s, "must contain only digits"));
        }

        let minor = if minor.len() > 2 {
            minor.trim_end_matches('0')
        } else {
            minor
        };
        if minor.len() > 2 {
            return Err(CoreError::invalid_amount(s, "at most two fractional digits"));
        }

        let too_large = || CoreError::invalid_amount(s, "amount too large");

        // Magnitude is built in i128 so that i64::MIN, whose magnitude has
        // no i64 form, still parses.
        let major_value: i128 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| too_large())?
        };

        // "5" means 50 cents, "05" means 5 cents
        let minor_value: i128 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i128>().unwrap_or(0) * 10,
            _ => minor.parse().unwrap_or(0),
        };

        let magnitude = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or_else(too_large)?;

        let cents = if negative { -magnitude } else { magnitude };
        i64::try_from(cents).map(Money).map_err(|_| too_large())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money for logs and the seed binary (`$10000.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1_000_050)), "$10000.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_decimal_text() {
        assert_eq!("10000.50".parse::<Money>().unwrap().cents(), 1_000_050);
        assert_eq!("10000.5".parse::<Money>().unwrap().cents(), 1_000_050);
        assert_eq!("10000".parse::<Money>().unwrap().cents(), 1_000_000);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!(".05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!(" 42.10 ".parse::<Money>().unwrap().cents(), 4210);
        assert_eq!("1.500".parse::<Money>().unwrap().cents(), 150);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1,000.00".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_decimal_string_is_stable() {
        for text in ["10000.50", "0.01", "-0.50", "7.00"] {
            let money: Money = text.parse().unwrap();
            assert_eq!(money.to_decimal_string(), text);
        }
    }

    #[test]
    fn test_full_range_round_trips() {
        for money in [Money::from_cents(i64::MIN), Money::from_cents(i64::MAX)] {
            let text = money.to_decimal_string();
            assert_eq!(text.parse::<Money>().unwrap(), money);
        }
        assert_eq!(
            Money::from_cents(i64::MIN).to_decimal_string(),
            "-92233720368547758.08"
        );

        // One cent past either end
        assert!("-92233720368547758.09".parse::<Money>().is_err());
        assert!("92233720368547758.08".parse::<Money>().is_err());
    }

    #[test]
    fn test_to_f64() {
        let value = Money::from_major_minor(10_000, 50);
        assert!((value.to_f64() - 10000.50).abs() < f64::EPSILON);
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::zero();
        total += Money::from_cents(1000);
        total = total + Money::from_cents(550);
        assert_eq!(total.cents(), 1550);
        assert!(!total.is_zero());
        assert!(!total.is_negative());
    }
}
