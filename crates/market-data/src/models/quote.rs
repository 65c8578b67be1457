use serde::{Deserialize, Serialize};

/// Snapshot of price and trading statistics for a single ticker symbol.
///
/// Fields the upstream API does not report for a given exchange are zero
/// (numbers) or empty (strings).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Company name (e.g., "Apple Inc")
    pub name: String,

    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,

    /// Exchange name, empty when not reported
    pub exchange: String,

    /// Last traded price
    pub last_price: f64,

    pub change_1h: f64,
    pub change_percent_1h: f64,

    /// Change since previous close
    pub change_1d: f64,
    pub change_percent_1d: f64,

    pub change_7d: f64,
    pub change_percent_7d: f64,

    /// Change year to date
    pub change_year: f64,
    pub change_percent_year: f64,

    /// Upstream timestamp, passed through verbatim
    pub timestamp: String,

    pub market_cap: i64,
    pub volume: i64,

    pub high: f64,
    pub low: f64,
    pub open: f64,
}
