//! Price catalog state container — app-owned, SDK-provided update logic.

use super::Coin;
use crate::shared::Currency;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// The unit prices currently known to a swap form session.
///
/// Holds at most one coin per currency, in the order received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCatalog {
    coins: Vec<Coin>,
}

impl PriceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_coins(coins: Vec<Coin>) -> Self {
        let mut catalog = Self::new();
        catalog.replace(coins);
        catalog
    }

    /// Replace all prices. The first coin seen for a currency wins.
    pub fn replace(&mut self, coins: Vec<Coin>) {
        let mut seen = HashSet::with_capacity(coins.len());
        self.coins = coins
            .into_iter()
            .filter(|coin| seen.insert(coin.currency.clone()))
            .collect();
    }

    pub fn price_of(&self, currency: &Currency) -> Option<Decimal> {
        self.coins
            .iter()
            .find(|c| &c.currency == currency)
            .map(|c| c.price)
    }

    pub fn contains(&self, currency: &Currency) -> bool {
        self.coins.iter().any(|c| &c.currency == currency)
    }

    /// Currencies in catalog order.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.coins.iter().map(|c| &c.currency)
    }

    /// Catalog currencies except `excluded`.
    pub fn options_excluding(&self, excluded: Option<&Currency>) -> Vec<Currency> {
        self.currencies()
            .filter(|c| Some(*c) != excluded)
            .cloned()
            .collect()
    }

    /// Units of `to` worth one unit of `from`.
    ///
    /// `None` if either currency is unknown or the division is undefined.
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        let from_price = self.price_of(from)?;
        let to_price = self.price_of(to)?;
        from_price.checked_div(to_price)
    }

    /// Convert `amount` of `from` into `to`: `amount * price(from) / price(to)`.
    pub fn convert(&self, amount: Decimal, from: &Currency, to: &Currency) -> Option<Decimal> {
        let from_price = self.price_of(from)?;
        let to_price = self.price_of(to)?;
        amount.checked_mul(from_price)?.checked_div(to_price)
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn clear(&mut self) {
        self.coins.clear();
    }
}
