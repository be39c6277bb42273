//! Coins sub-client — fetch and cache the price catalog.

use super::{coins_from_wire, Coin, PriceSource};
use crate::client::CoinswapClient;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for price catalog operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinswapClient,
}

impl<'a> Coins<'a> {
    /// Get the catalog. Uses TTL cache.
    pub async fn get(&self) -> Result<Vec<Coin>, SdkError> {
        {
            let cache = self.client.catalog_cache.read().await;
            if let Some((coins, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.catalog_cache_ttl {
                    return Ok(coins.clone());
                }
            }
        }

        self.refresh().await
    }

    /// Fetch the catalog, bypassing and then refilling the cache.
    pub async fn refresh(&self) -> Result<Vec<Coin>, SdkError> {
        let entries = self.client.http.get_prices().await?;
        let received = entries.len();
        let coins = coins_from_wire(entries);
        tracing::debug!(entries = received, coins = coins.len(), "Fetched price catalog");

        *self.client.catalog_cache.write().await = Some((coins.clone(), Instant::now()));
        Ok(coins)
    }

    /// Drop the cached catalog.
    pub async fn invalidate(&self) {
        *self.client.catalog_cache.write().await = None;
    }
}

impl PriceSource for CoinswapClient {
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError> {
        self.coins().get().await
    }
}
