//! Cart Manager
//!
//! In-memory cart keyed by item name. Lines keep insertion order; adding a
//! name that is already present bumps its quantity and keeps the first price.

use crate::error::{CartError, InvalidPriceError};
use crate::models::{CartLine, CartLineView, CartView, Price};

/// Parse the raw `data-price` attribute of a menu item
pub fn parse_price(raw: &str) -> Result<Price, InvalidPriceError> {
    raw.parse()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub item_count: u32,
    pub total: Price,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.find(name).map(|line| line.quantity)
    }

    fn find(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, CartError> {
        self.lines
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| CartError::UnknownLine(name.to_string()))
    }

    /// Add one unit of `name`. Returns the updated line.
    pub fn add_item(&mut self, name: &str, unit_price: Price) -> Result<&CartLine, CartError> {
        if name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }

        let index = match self.lines.iter().position(|line| line.name == name) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(CartLine {
                    name: name.to_string(),
                    unit_price,
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[index])
    }

    /// Validate `raw_price` first; an invalid price leaves the cart untouched
    pub fn add_priced(&mut self, name: &str, raw_price: &str) -> Result<&CartLine, CartError> {
        let unit_price = parse_price(raw_price)?;
        self.add_item(name, unit_price)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<CartLine, CartError> {
        let index = self.position(name)?;
        Ok(self.lines.remove(index))
    }

    /// Set the quantity of an existing line; zero removes it
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CartError> {
        let index = self.position(name)?;
        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.lines.iter().map(|line| line.quantity).sum(),
            total: self.lines.iter().map(CartLine::line_total).sum(),
        }
    }

    pub fn view(&self) -> CartView {
        let totals = self.totals();
        CartView {
            lines: self
                .lines
                .iter()
                .map(|line| CartLineView {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    line_total: line.line_total().to_string(),
                })
                .collect(),
            item_count: totals.item_count,
            total: totals.total.to_string(),
        }
    }
}
