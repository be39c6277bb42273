//! Coin domain — unit prices, price feed wire types, catalog state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod source;
pub mod state;
pub mod wire;

pub use convert::coins_from_wire;
pub use source::{PriceSource, StaticPrices};
pub use state::PriceCatalog;

use crate::shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency and its unit price in the feed's common reference unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub currency: Currency,
    pub price: Decimal,
}

impl Coin {
    pub fn new(currency: impl Into<Currency>, price: Decimal) -> Self {
        Self {
            currency: currency.into(),
            price,
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingCurrency,
    MissingPrice(Currency),
    NonPositivePrice { currency: Currency, price: f64 },
    UnrepresentablePrice { currency: Currency, price: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingCurrency => write!(f, "Missing currency"),
            ValidationError::MissingPrice(c) => write!(f, "Missing price for {c}"),
            ValidationError::NonPositivePrice { currency, price } => {
                write!(f, "Price must be positive for {currency}, got {price}")
            }
            ValidationError::UnrepresentablePrice { currency, price } => {
                write!(f, "Price for {currency} does not fit a decimal: {price}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
