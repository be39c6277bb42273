//! HTTP client layer — `CoinswapHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::CoinswapHttp;
pub use retry::{RetryConfig, RetryPolicy};
