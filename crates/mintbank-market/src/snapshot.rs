use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spot rate for a currency pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub rate: f64,
    pub change: f64,
}

/// Spot price for a crypto asset
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CryptoQuote {
    pub price: f64,
    pub change: f64,
}

/// One point-in-time market view, unrelated to any earlier snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub currencies: BTreeMap<String, CurrencyQuote>,
    pub crypto: BTreeMap<String, CryptoQuote>,
    pub timestamp: DateTime<Utc>,
}
