//! Frontend Errors

use thiserror::Error;

/// A menu item carried a price that is not a usable amount
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid price {raw:?}: {reason}")]
pub struct InvalidPriceError {
    pub raw: String,
    pub reason: &'static str,
}

impl InvalidPriceError {
    pub fn new(raw: &str, reason: &'static str) -> Self {
        Self { raw: raw.to_string(), reason }
    }
}

/// Cart mutation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("item name is empty")]
    EmptyName,

    #[error(transparent)]
    InvalidPrice(#[from] InvalidPriceError),

    #[error("no cart line named {0:?}")]
    UnknownLine(String),

    #[error("no menu item named {0:?} on the page")]
    UnknownItem(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown navigation entry {0:?}")]
pub struct UnknownNavTab(pub String);
