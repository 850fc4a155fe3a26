mod feed;
mod sim;
mod snapshot;

pub use feed::MarketFeed;
pub use sim::{QuoteBand, SimulatedFeed, SymbolSpec};
pub use snapshot::{CryptoQuote, CurrencyQuote, MarketSnapshot};
