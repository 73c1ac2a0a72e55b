//! Money type for displaying catalogue prices.
//!
//! The storefront prices everything in whole baht, so amounts are plain
//! integers and formatting never shows decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// The baht glyph.
pub const BAHT: &str = "\u{0e3f}";

/// A whole-baht amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in whole baht.
    pub amount: i64,
}

impl Money {
    /// Baht amount.
    pub fn baht(amount: i64) -> Self {
        Self { amount }
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Format with the glyph (e.g., "฿25,990").
    pub fn display(&self) -> String {
        format!("{}{}", BAHT, self.display_amount())
    }

    /// Format without the glyph (e.g., "25,990").
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::baht(self.amount.saturating_sub(other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(-25990), "-25,990");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::baht(1234).display(), "\u{0e3f}1,234");
        assert_eq!(Money::baht(1200).display_amount(), "1,200");
        assert_eq!(Money::baht(-50).to_string(), "\u{0e3f}-50");
    }

    #[test]
    fn test_money_subtraction() {
        assert_eq!(Money::baht(1200) - Money::baht(1000), Money::baht(200));
        assert!(!(Money::baht(1000) - Money::baht(1000)).is_positive());
        assert_eq!(Money::baht(i64::MIN) - Money::baht(1), Money::baht(i64::MIN));
    }

    #[test]
    fn test_money_serializes_as_plain_amount() {
        assert_eq!(serde_json::to_string(&Money::baht(25990)).unwrap(), "25990");
    }
}
