//! Money type for representing currency amounts
//!
//! Wraps a `Decimal` so amounts are kept exactly as entered (no rounding to
//! cents) while avoiding floating-point drift in sums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest magnitude accepted from user input (one quadrillion)
///
/// Keeps any realistic sum of amounts far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// A monetary amount, serialized as an exact JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "Rs.10.50", "$10.50", "10", "1e3".
    /// Surrounding whitespace and a leading currency symbol are ignored.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let digits = strip_currency_symbol(rest);
        if digits.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let value = Decimal::from_str(digits)
            .or_else(|_| Decimal::from_scientific(digits))
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;
        if value.abs() > MAX_AMOUNT {
            return Err(MoneyParseError::TooLarge(trimmed.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.0.abs())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

fn strip_currency_symbol(s: &str) -> &str {
    for symbol in ["Rs.", "Rs", "₹", "$", "€", "£"] {
        if let Some(stripped) = s.strip_prefix(symbol) {
            return stripped.trim_start();
        }
    }
    s
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags apply to the number
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a valid amount", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "'{}' is too large (limit is {})", s, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("  500 ").unwrap().amount(), dec!(500));
        assert_eq!(Money::parse("-10.5").unwrap().amount(), dec!(-10.5));
        assert_eq!(Money::parse("Rs.250").unwrap().amount(), dec!(250));
        assert_eq!(Money::parse("$ 12.25").unwrap().amount(), dec!(12.25));
        assert_eq!(Money::parse("1e3").unwrap().amount(), dec!(1000));
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(Money::parse("12.3.4").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Money::parse("1000000000000000").unwrap().amount(), MAX_AMOUNT);
        assert!(matches!(
            Money::parse("50000000000000000000000000000"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse("-1e16"),
            Err(MoneyParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::new(Decimal::MAX);

        assert_eq!(huge + huge, huge);
        assert_eq!(-huge - huge, Money::new(Decimal::MIN));

        let total: Money = vec![huge, huge, Money::new(Decimal::ONE)].into_iter().sum();
        assert_eq!(total, huge);
    }

    #[test]
    fn test_display_keeps_entered_precision() {
        assert_eq!(Money::parse("12.50").unwrap().to_string(), "12.50");
        assert_eq!(Money::parse("7").unwrap().to_string(), "7");
        assert_eq!(Money::parse("0.333").unwrap().to_string(), "0.333");
        assert_eq!(format!("{:>6}", Money::parse("7").unwrap()), "     7");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(500)).format_with_symbol("Rs."), "Rs.500");
        assert_eq!(Money::new(dec!(-100)).format_with_symbol("Rs."), "-Rs.100");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.25));
        let b = Money::new(dec!(0.75));

        assert_eq!(a + b, Money::new(dec!(11)));
        assert_eq!(b - a, Money::new(dec!(-9.5)));
        assert_eq!(-a, Money::new(dec!(-10.25)));
        assert!((b - a).is_negative());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        let amounts = vec![Money::new(dec!(0.1)), Money::new(dec!(0.2))];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(dec!(0.3)));
    }

    #[test]
    fn test_serialization_is_json_number() {
        let m = Money::new(dec!(10.5));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let from_int: Money = serde_json::from_str("500").unwrap();
        assert_eq!(from_int, Money::new(dec!(500)));

        let from_float: Money = serde_json::from_str("500.0").unwrap();
        assert_eq!(from_float, Money::new(dec!(500)));
    }

    #[test]
    fn test_serialization_is_exact() {
        for m in [
            Money::new(dec!(1234567.123456789012)),
            Money::new(Decimal::MAX),
            Money::new(Decimal::MIN),
        ] {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, m.amount().to_string());

            let restored: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.amount().to_string(), m.amount().to_string());
        }
    }
}
