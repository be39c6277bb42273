//! Low-level HTTP client — `CoinswapHttp`.
//!
//! Returns wire types; conversion to domain types happens in the `coins()`
//! sub-client. Internal to the SDK — `CoinswapClient` wraps this.

use crate::domain::coin::wire::PricesResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the price feed.
#[derive(Clone)]
pub struct CoinswapHttp {
    prices_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CoinswapHttp {
    pub fn new(prices_url: &str, retry: RetryPolicy) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            prices_url: prices_url.to_string(),
            client: builder.build()?,
            retry,
        })
    }

    pub fn prices_url(&self) -> &str {
        &self.prices_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_prices(&self) -> Result<PricesResponse, HttpError> {
        self.get(&self.prices_url, &self.retry).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_get(url).await;
        };
        self.get_with_retry(url, &config).await
    }

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        config: &RetryConfig,
    ) -> Result<T, HttpError> {
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if let HttpError::RateLimited {
                        retry_after_ms: Some(ms),
                    } = &e
                    {
                        futures_timer::Delay::new(std::time::Duration::from_millis(*ms)).await;
                    }

                    if config.should_retry(&e) && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
