//! # Coinswap SDK
//!
//! A Rust SDK for currency swap forms backed by a live price feed, supporting
//! both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Currency newtype, decimal helpers, coin catalog, swap form
//!    state machine (always available, WASM-safe)
//! 2. **HTTP API** — `CoinswapHttp` with retry policies for the prices endpoint
//! 3. **High-Level Client** — `CoinswapClient` with a cached `coins()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinswap_sdk::prelude::*;
//!
//! let client = CoinswapClient::builder().build()?;
//! let mut form = SwapForm::start(&client).await;
//!
//! form.set_send_currency(Some(Currency::from("ETH")))?;
//! form.set_receive_currency(Some(Currency::from("USDC")))?;
//! form.set_send_amount("1.5")?;
//!
//! println!("{}", form.amount_to_receive());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): coins and the swap form.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinswapClient` — the primary entry point for prices.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Currency;

    // Domain types — coin
    pub use crate::domain::coin::{Coin, PriceCatalog, PriceSource, StaticPrices};

    // Domain types — swap form
    pub use crate::domain::swap_form::{
        FormAction, FormState, FormView, SwapForm, SwapFormHandle, Transition,
    };

    // Errors
    pub use crate::error::{FormError, SdkError};

    // Network
    pub use crate::network::DEFAULT_PRICES_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinsClient, CoinswapClient, CoinswapClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
