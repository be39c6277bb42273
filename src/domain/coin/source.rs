//! Price sources — anything that can hand a swap form its coin list.

use super::Coin;
use crate::error::SdkError;

/// A service that yields the current coin prices.
///
/// Implemented by `CoinswapClient` (HTTP) and `StaticPrices`.
#[allow(async_fn_in_trait)]
pub trait PriceSource {
    /// Fetches the latest coin list.
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError>;
}

/// A fixed coin list, for offline sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPrices(Vec<Coin>);

impl StaticPrices {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl PriceSource for StaticPrices {
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError> {
        Ok(self.0.clone())
    }
}
