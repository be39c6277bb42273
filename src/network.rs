//! Network URL constants for the coinswap SDK.

/// Default price feed URL.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";
