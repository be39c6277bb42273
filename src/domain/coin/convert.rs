//! Conversions from wire types to domain types for coins.

use super::wire::PriceEntry;
use super::{Coin, ValidationError};
use crate::shared::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use std::collections::HashMap;

impl TryFrom<PriceEntry> for Coin {
    type Error = ValidationError;

    fn try_from(entry: PriceEntry) -> Result<Self, Self::Error> {
        if entry.currency.is_empty() {
            return Err(ValidationError::MissingCurrency);
        }

        let currency = entry.currency;
        let price = entry
            .price
            .ok_or_else(|| ValidationError::MissingPrice(currency.clone()))?;

        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { currency, price });
        }

        let price_dec = match Decimal::from_f64(price) {
            Some(p) if p > Decimal::ZERO => p,
            _ => return Err(ValidationError::UnrepresentablePrice { currency, price }),
        };

        Ok(Coin {
            currency,
            price: price_dec,
        })
    }
}

/// Convert a raw feed into one coin per currency.
///
/// Invalid entries are dropped. Repeated currencies keep the quote with the
/// latest date; an undated quote never replaces a dated one, and equal dates
/// keep the earlier entry. Coins come out in order of first appearance.
pub fn coins_from_wire(entries: Vec<PriceEntry>) -> Vec<Coin> {
    let mut latest: Vec<(Coin, Option<DateTime<Utc>>)> = Vec::with_capacity(entries.len());
    let mut index: HashMap<Currency, usize> = HashMap::new();

    for entry in entries {
        let date = entry.date;
        let coin = match Coin::try_from(entry) {
            Ok(coin) => coin,
            Err(e) => {
                tracing::debug!(error = %e, "Dropping price entry");
                continue;
            }
        };

        match index.get(&coin.currency) {
            Some(&i) => {
                let newer = match (date, latest[i].1) {
                    (Some(new), Some(current)) => new > current,
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                if newer {
                    latest[i] = (coin, date);
                }
            }
            None => {
                index.insert(coin.currency.clone(), latest.len());
                latest.push((coin, date));
            }
        }
    }

    latest.into_iter().map(|(coin, _)| coin).collect()
}
