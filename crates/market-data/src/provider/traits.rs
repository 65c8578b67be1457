//! Quote provider trait definitions.
//!
//! This module defines the `QuoteProvider` trait that quote API clients
//! implement, and the `HttpTransport` seam they issue requests through.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{LookupResult, Quote};

/// Trait for quote API clients.
///
/// Implementors provide `get_quote` and `lookup`; `lookup_exchange` is
/// derived from `lookup`.
///
/// # Example
///
/// ```ignore
/// use markit_market_data::{MarkitOnDemandProvider, QuoteProvider};
///
/// let provider = MarkitOnDemandProvider::new(Default::default());
/// let quote = provider.get_quote("AAPL").await?;
/// let exchange = provider.lookup_exchange("AAPL").await?;
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Fetch the current quote for a ticker symbol.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `symbol` is empty or blank
    /// - `Transport` if the HTTP request fails
    /// - `UpstreamRejected` if the API reports an error for the symbol
    /// - `UnexpectedResponse` if the response has an unknown shape
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Search symbols and company names.
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn lookup(&self, input: &str) -> Result<Option<Vec<LookupResult>>, MarketDataError>;

    /// Find the exchange where `symbol` is traded.
    ///
    /// Lookup matches company names as well as symbols, so the results are
    /// scanned for an exact (case-insensitive) symbol match. Returns
    /// `Ok(None)` when the lookup has no results.
    async fn lookup_exchange(&self, symbol: &str) -> Result<Option<String>, MarketDataError> {
        match self.lookup(symbol).await? {
            None => Ok(None),
            Some(results) => find_exchange(symbol, &results).map(Some),
        }
    }
}

/// Transport used by providers to issue GET requests.
///
/// Implementations return the response body on a success status and a
/// `Transport` error otherwise.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, MarketDataError>;
}

/// Exchange of the first result whose symbol equals `symbol`, ignoring case.
///
/// When several results match, the first one wins.
pub fn find_exchange(symbol: &str, results: &[LookupResult]) -> Result<String, MarketDataError> {
    results
        .iter()
        .find(|result| result.matches_symbol(symbol))
        .map(|result| result.exchange.clone())
        .ok_or_else(|| MarketDataError::UnexpectedResponse {
            context: format!("lookup exchange for symbol '{}'", symbol),
            payload: format!("{:?}", results),
        })
}
