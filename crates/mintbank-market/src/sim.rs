use chrono::Utc;
use rand::Rng;

use crate::feed::MarketFeed;
use crate::snapshot::{CryptoQuote, CurrencyQuote, MarketSnapshot};

/// Value band a quote is uniformly sampled from
#[derive(Debug, Clone, Copy)]
pub struct QuoteBand {
    pub low: f64,
    pub high: f64,
}

impl QuoteBand {
    pub const fn new(low: f64, high: f64) -> Self {
        QuoteBand { low, high }
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.low..=self.high)
    }
}

/// Sampling spec for one quoted symbol
#[derive(Debug, Clone)]
pub struct SymbolSpec {
    pub symbol: String,
    pub value: QuoteBand,
    pub change: QuoteBand,
}

impl SymbolSpec {
    pub fn new(symbol: impl Into<String>, value: QuoteBand, change: QuoteBand) -> Self {
        SymbolSpec {
            symbol: symbol.into(),
            value,
            change,
        }
    }
}

/// Simulated market feed with configurable bands per symbol
/// Useful for demos; every snapshot is sampled independently
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    currencies: Vec<SymbolSpec>,
    crypto: Vec<SymbolSpec>,
}

impl SimulatedFeed {
    /// Feed with the default demo pairs quoted against the naira
    pub fn new() -> Self {
        let pct2 = QuoteBand::new(-2.0, 2.0);
        let pct5 = QuoteBand::new(-5.0, 5.0);

        SimulatedFeed {
            currencies: vec![
                SymbolSpec::new("USD_NGN", QuoteBand::new(1400.0, 1600.0), pct2),
                SymbolSpec::new("EUR_NGN", QuoteBand::new(1500.0, 1700.0), pct2),
                SymbolSpec::new("GBP_NGN", QuoteBand::new(1800.0, 2000.0), pct2),
            ],
            crypto: vec![
                SymbolSpec::new("BTC", QuoteBand::new(60_000.0, 70_000.0), pct5),
                SymbolSpec::new("ETH", QuoteBand::new(3_000.0, 4_000.0), pct5),
            ],
        }
    }

    /// Create with custom symbol specs
    pub fn with_symbols(currencies: Vec<SymbolSpec>, crypto: Vec<SymbolSpec>) -> Self {
        SimulatedFeed { currencies, crypto }
    }
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketFeed for SimulatedFeed {
    fn snapshot(&self) -> MarketSnapshot {
        let mut rng = rand::thread_rng();

        let currencies = self
            .currencies
            .iter()
            .map(|spec| {
                (
                    spec.symbol.clone(),
                    CurrencyQuote {
                        rate: spec.value.sample(&mut rng),
                        change: spec.change.sample(&mut rng),
                    },
                )
            })
            .collect();

        let crypto = self
            .crypto
            .iter()
            .map(|spec| {
                (
                    spec.symbol.clone(),
                    CryptoQuote {
                        price: spec.value.sample(&mut rng),
                        change: spec.change.sample(&mut rng),
                    },
                )
            })
            .collect();

        MarketSnapshot {
            currencies,
            crypto,
            timestamp: Utc::now(),
        }
    }
}
