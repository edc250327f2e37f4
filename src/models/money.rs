//! Money type for representing fine amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Fine rate for overdue returns: one dollar per whole day overdue
pub const FINE_PER_DAY: Money = Money::from_cents(100);

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues when accruing
/// per-day fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use libris::models::Money;
    /// let fine = Money::from_cents(300); // $3.00
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Format with a currency symbol, always showing two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0 * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let amount = Money::from_cents(1050);
        assert_eq!(amount.cents(), 1050);
        assert_eq!(amount.dollars(), 10);
        assert_eq!(amount.cents_part(), 50);
    }

    #[test]
    fn test_zero() {
        let amount = Money::zero();
        assert!(amount.is_zero());
        assert!(!amount.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(300).to_string(), "$3.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(150).format_with_symbol("€"), "€1.50");
    }

    #[test]
    fn test_daily_fine_accrual() {
        let fine = FINE_PER_DAY * 3;
        assert_eq!(fine, Money::from_cents(300));
        assert_eq!(fine.to_string(), "$3.00");
    }

    #[test]
    fn test_add() {
        let mut total = Money::from_cents(100);
        total += Money::from_cents(50);
        assert_eq!(total, Money::from_cents(100) + Money::from_cents(50));
        assert_eq!(total.cents(), 150);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let amount = Money::from_cents(300);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "300");

        let parsed: Money = serde_json::from_str("300").unwrap();
        assert_eq!(parsed, amount);
    }
}
