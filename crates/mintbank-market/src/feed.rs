use crate::snapshot::MarketSnapshot;

/// Feed trait for producing market data snapshots
pub trait MarketFeed {
    /// Produce a fresh snapshot; implementations do not cache
    fn snapshot(&self) -> MarketSnapshot;
}
