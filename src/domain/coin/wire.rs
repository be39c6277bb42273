//! Wire types for the price feed (REST).

use crate::shared::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One quote as sent by the feed.
///
/// The feed is a bare JSON array of these and may repeat a currency with
/// different dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub currency: Currency,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// REST response for the prices endpoint.
pub type PricesResponse = Vec<PriceEntry>;
