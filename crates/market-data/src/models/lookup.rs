//! Lookup result models for symbol search.

use serde::{Deserialize, Serialize};

/// One candidate match from a free-text symbol/company search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Symbol/ticker (e.g., "AAPL")
    pub symbol: String,

    /// Company name (e.g., "Apple Inc")
    pub name: String,

    /// Exchange name (e.g., "NASDAQ")
    pub exchange: String,
}

impl LookupResult {
    /// Create a new lookup result.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            exchange: exchange.into(),
        }
    }

    /// Whether this result is for `symbol`, ignoring case.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.symbol.to_lowercase() == symbol.to_lowercase()
    }
}
