//! High-level client — `CoinswapClient` with nested sub-client accessors.
//!
//! Each domain that talks to the network has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder, shared cache
//! state, and accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::coin::Coin;
use crate::error::SdkError;
use crate::http::{CoinswapHttp, RetryPolicy};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;

/// The primary entry point for fetching prices.
///
/// Also a [`PriceSource`](crate::domain::coin::PriceSource), so it can be
/// handed straight to [`SwapForm::start`](crate::domain::swap_form::SwapForm::start).
#[derive(Clone)]
pub struct CoinswapClient {
    pub(crate) http: CoinswapHttp,
    /// Catalog cache: (coins, fetched_at)
    pub(crate) catalog_cache: Arc<RwLock<Option<(Vec<Coin>, Instant)>>>,
    /// Cache TTL for the catalog
    pub(crate) catalog_cache_ttl: Duration,
}

impl CoinswapClient {
    pub fn builder() -> CoinswapClientBuilder {
        CoinswapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.catalog_cache.write().await = None;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinswapClientBuilder {
    prices_url: String,
    catalog_cache_ttl: Duration,
    retry: RetryPolicy,
}

impl Default for CoinswapClientBuilder {
    fn default() -> Self {
        Self {
            prices_url: crate::network::DEFAULT_PRICES_URL.to_string(),
            catalog_cache_ttl: Duration::from_secs(60),
            retry: RetryPolicy::Idempotent,
        }
    }
}

impl CoinswapClientBuilder {
    pub fn prices_url(mut self, url: &str) -> Self {
        self.prices_url = url.to_string();
        self
    }

    /// How long a fetched catalog is served from cache. Zero disables caching.
    pub fn catalog_cache_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_cache_ttl = ttl;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<CoinswapClient, SdkError> {
        if self.prices_url.trim().is_empty() {
            return Err(SdkError::Validation("prices_url must not be empty".to_string()));
        }

        Ok(CoinswapClient {
            http: CoinswapHttp::new(&self.prices_url, self.retry)?,
            catalog_cache: Arc::new(RwLock::new(None)),
            catalog_cache_ttl: self.catalog_cache_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CoinswapClient::builder().build().unwrap();
        assert_eq!(client.http.prices_url(), crate::network::DEFAULT_PRICES_URL);
        assert_eq!(client.catalog_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_rejects_empty_url() {
        let result = CoinswapClient::builder().prices_url("  ").build();
        assert!(matches!(result, Err(SdkError::Validation(_))));
    }
}
