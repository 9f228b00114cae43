//! Frontend Models
//!
//! Cart, price and menu records shared by the controller and the view.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPriceError;

/// Non-negative amount in euro cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    /// Largest accepted unit price, in cents. Keeps any line total within `u64`.
    pub const MAX_CENTS: u64 = u32::MAX as u64;

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Price of `quantity` units
    pub fn times(self, quantity: u32) -> Price {
        Price { cents: self.cents.saturating_mul(quantity as u64) }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price { cents: self.cents.saturating_add(rhs.cents) }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl FromStr for Price {
    type Err = InvalidPriceError;

    /// Parse a decimal amount such as `"8.50"` or `"9"`
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidPriceError::new(raw, "empty"));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| InvalidPriceError::new(raw, "not a number"))?;
        if !value.is_finite() {
            return Err(InvalidPriceError::new(raw, "not finite"));
        }
        if value < 0.0 {
            return Err(InvalidPriceError::new(raw, "negative"));
        }

        let cents = (value * 100.0).round();
        if cents > Price::MAX_CENTS as f64 {
            return Err(InvalidPriceError::new(raw, "too large"));
        }

        Ok(Price { cents: cents as u64 })
    }
}

/// Formats as `"11.50 €"`
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} €", self.cents / 100, self.cents % 100)
    }
}

/// One distinct product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Display-ready line for the cart modal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Display-ready cart snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A rendered menu item as seen by the filters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuEntry {
    /// Designated name (`data-name`)
    pub name: String,
    /// Category key (`data-category`)
    pub category: String,
    /// Full rendered text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prices() {
        assert_eq!("8.50".parse::<Price>().unwrap().cents(), 850);
        assert_eq!(" 9 ".parse::<Price>().unwrap().cents(), 900);
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
        assert_eq!("12.5".parse::<Price>().unwrap().cents(), 1250);
    }

    #[test]
    fn test_reject_bad_prices() {
        for raw in ["", "   ", "abc", "8,50", "NaN", "inf", "-1.00"] {
            let err = raw.parse::<Price>().unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn test_reject_prices_above_cap() {
        for raw in ["1e30", "42949672.96"] {
            let err = raw.parse::<Price>().unwrap_err();
            assert_eq!(err.reason, "too large");
        }
        assert_eq!("42949672.95".parse::<Price>().unwrap().cents(), Price::MAX_CENTS);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1150).to_string(), "11.50 €");
        assert_eq!(Price::from_cents(5).to_string(), "0.05 €");
        assert_eq!(Price::ZERO.to_string(), "0.00 €");
    }

    #[test]
    fn test_line_total() {
        let line = CartLine { name: "Coke".into(), unit_price: Price::from_cents(250), quantity: 3 };
        assert_eq!(line.line_total(), Price::from_cents(750));
    }
}
