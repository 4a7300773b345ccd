//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a price from an amount in cents.
    ///
    /// ```
    /// use cafe_core::Price;
    ///
    /// assert_eq!(Price::from_cents(450).display(), "$4.50");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::new(Decimal::new(45, 1)).display(), "$4.50");
        assert_eq!(Price::from_cents(1275).display(), "$12.75");
        assert_eq!(Price::new(Decimal::from(3)).to_string(), "$3.00");
    }

    #[test]
    fn test_sign_checks() {
        assert!(Price::from_cents(1).is_positive());
        assert!(!Price::from_cents(0).is_positive());
        assert!(!Price::from_cents(0).is_negative());
        assert!(Price::from_cents(-1).is_negative());
    }
}
