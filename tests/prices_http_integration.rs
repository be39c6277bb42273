//! Integration tests for the price feed client.
//!
//! These tests hit the live price feed and exercise the full
//! fetch → convert → cache → swap form lifecycle.
//!
//! All tests are `#[ignore]` because they require network access.
//! Set `COINSWAP_PRICES_URL` (environment or `.env`) to point at another feed.
//!
//! Run with:
//! ```bash
//! cargo test -p coinswap-sdk --features native --test prices_http_integration -- --ignored
//! ```

#![cfg(feature = "http")]

use std::time::Duration;

use tokio::time::timeout;

use coinswap_sdk::client::CoinswapClient;
use coinswap_sdk::domain::swap_form::SwapForm;
use coinswap_sdk::error::{HttpError, SdkError};
use coinswap_sdk::http::RetryPolicy;
use coinswap_sdk::network::DEFAULT_PRICES_URL;

const TEST_TIMEOUT: Duration = Duration::from_secs(30);

fn prices_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("COINSWAP_PRICES_URL").unwrap_or_else(|_| DEFAULT_PRICES_URL.to_string())
}

fn test_client() -> CoinswapClient {
    CoinswapClient::builder()
        .prices_url(&prices_url())
        .build()
        .expect("client should build")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_fetch_catalog() {
    let client = test_client();
    let coins = timeout(TEST_TIMEOUT, client.coins().get())
        .await
        .expect("timed out fetching prices")
        .expect("fetch should succeed");

    assert!(!coins.is_empty(), "feed should carry at least one coin");
    for coin in &coins {
        assert!(coin.price.is_sign_positive() && !coin.price.is_zero());
    }

    let mut currencies: Vec<_> = coins.iter().map(|c| c.currency.clone()).collect();
    currencies.sort();
    currencies.dedup();
    assert_eq!(currencies.len(), coins.len(), "one coin per currency");
}

#[tokio::test]
#[ignore]
async fn test_cached_catalog_is_reused() {
    let client = test_client();
    let first = client.coins().get().await.expect("first fetch");
    let second = client.coins().get().await.expect("cached fetch");
    assert_eq!(first, second);

    client.coins().invalidate().await;
    let third = client.coins().refresh().await.expect("refresh");
    assert!(!third.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_swap_form_from_live_feed() {
    let client = test_client();
    let mut form = timeout(TEST_TIMEOUT, SwapForm::start(&client))
        .await
        .expect("timed out starting form");

    let options = form.send_options();
    assert!(options.len() >= 2, "need two currencies to convert");

    form.set_send_currency(Some(options[0].clone())).unwrap();
    form.set_receive_currency(Some(options[1].clone())).unwrap();
    form.set_send_amount("1").unwrap();

    let amount = form.submit().expect("submit should pass");
    let (_, fraction) = amount.split_once('.').expect("fixed-point output");
    assert_eq!(fraction.len(), 10);
}

#[tokio::test]
#[ignore]
async fn test_missing_feed_is_not_found() {
    let client = CoinswapClient::builder()
        .prices_url(&format!("{}-missing", prices_url()))
        .retry(RetryPolicy::None)
        .build()
        .unwrap();

    let err = client.coins().get().await.unwrap_err();
    assert!(
        matches!(
            err,
            SdkError::Http(HttpError::NotFound(_)) | SdkError::Http(HttpError::BadRequest(_))
        ),
        "unexpected error: {err:?}"
    );
}
