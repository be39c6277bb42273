//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the price feed sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

pub use fmt::decimal::{parse_amount, to_fixed};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Currency ────────────────────────────────────────────────────────────────

/// Newtype for currency tickers (e.g. `"ETH"`, `"USDC"`).
///
/// Compared exactly as sent by the feed; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Currency(s.to_string()))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Currency(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_serde() {
        let c = Currency::from("ETH");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"ETH\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn test_currency_is_case_sensitive() {
        assert_ne!(Currency::from("usdc"), Currency::from("USDC"));
    }

    #[test]
    fn test_currency_blank() {
        assert!(Currency::from("  ").is_empty());
        assert!(!Currency::from("BTC").is_empty());
    }
}
