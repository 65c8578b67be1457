//! Markit On Demand quote provider implementation.
//!
//! This module wraps the two read-only functions of the Markit On Demand
//! API, version 2:
//! - Quote: price and trading statistics for a ticker symbol
//! - Lookup: symbol, company name and exchange for a free-text search
//!
//! Endpoints have the form `{base}/{version}/{function}/json?{param}={value}`.
//! API documentation: http://dev.markitondemand.com/MODApis/Api/v2/doc/

mod models;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::MarketDataError;
use crate::models::{ApiFunction, LookupResult, Quote};
use crate::provider::{HttpTransport, QuoteProvider, ReqwestTransport};

use self::models::{MarkitLookupItem, MarkitQuoteResponse};

const PROVIDER_ID: &str = "MARKIT_ON_DEMAND";

/// `Status` value of a successful quote response.
const STATUS_SUCCESS: &str = "SUCCESS";

// ============================================================================
// MarkitOnDemandProvider
// ============================================================================

/// Markit On Demand quote provider.
///
/// Holds only immutable configuration and the transport; every call is
/// independent.
pub struct MarkitOnDemandProvider {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl MarkitOnDemandProvider {
    /// Create a provider that issues requests with `reqwest`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(config.timeout));
        Self { config, transport }
    }

    /// Create a provider over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the URL for calling `function_name` with `param_value`.
    ///
    /// `function_name` is matched case-insensitively against `quote` and
    /// `lookup`; `param_value` is URL-encoded.
    pub fn build_endpoint(
        &self,
        function_name: &str,
        param_value: &str,
    ) -> Result<String, MarketDataError> {
        let function: ApiFunction = function_name.parse()?;
        Ok(self.endpoint(function, param_value))
    }

    fn endpoint(&self, function: ApiFunction, param_value: &str) -> String {
        format!(
            "{}/{}/{}/json?{}={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.version,
            function.as_str(),
            function.param_name(),
            urlencoding::encode(param_value)
        )
    }

    /// Fetch the quote for `symbol`.
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        require_param(symbol, "ticker_symbol")?;

        let endpoint = self.endpoint(ApiFunction::Quote, symbol);
        let body = self.transport.get(&endpoint).await?;

        parse_quote_body(&endpoint, &body)
    }

    /// Search for `input`.
    async fn fetch_lookup(
        &self,
        input: &str,
    ) -> Result<Option<Vec<LookupResult>>, MarketDataError> {
        require_param(input, "search_input")?;

        let endpoint = self.endpoint(ApiFunction::Lookup, input);
        let body = self.transport.get(&endpoint).await?;

        let results = parse_lookup_body(&endpoint, &body)?;
        debug!(
            "Markit: found {} lookup results for '{}'",
            results.as_ref().map_or(0, Vec::len),
            input
        );

        Ok(results)
    }
}

// ============================================================================
// QuoteProvider Implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for MarkitOnDemandProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching quote for {} from Markit", symbol);
        self.fetch_quote(symbol).await
    }

    async fn lookup(&self, input: &str) -> Result<Option<Vec<LookupResult>>, MarketDataError> {
        debug!("Searching Markit for '{}'", input);
        self.fetch_lookup(input).await
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

fn require_param(value: &str, name: &str) -> Result<(), MarketDataError> {
    if value.trim().is_empty() {
        return Err(MarketDataError::InvalidArgument(format!(
            "Missing required parameter \"{}\".",
            name
        )));
    }
    Ok(())
}

fn unexpected(endpoint: &str, body: &str) -> MarketDataError {
    MarketDataError::UnexpectedResponse {
        context: endpoint.to_string(),
        payload: body.to_string(),
    }
}

/// Decode a quote response body.
///
/// A successful call carries `"Status": "SUCCESS"`. Invalid or missing
/// parameters produce an object with a `Message` field instead, e.g.
/// `{"Message":"Missing Required Parameter: \"symbol\""}`.
fn parse_quote_body(endpoint: &str, body: &str) -> Result<Quote, MarketDataError> {
    let value: Value = serde_json::from_str(body).map_err(|_| unexpected(endpoint, body))?;

    match value.get("Status").map(message_text).as_deref() {
        Some(STATUS_SUCCESS) => {
            let response: MarkitQuoteResponse =
                serde_json::from_value(value).map_err(|_| unexpected(endpoint, body))?;
            return Ok(response.into_quote());
        }
        Some(status) => return Err(MarketDataError::UpstreamRejected(status.to_string())),
        None => {}
    }

    if let Some(message) = value.get("Message") {
        return Err(MarketDataError::UpstreamRejected(message_text(message)));
    }

    Err(unexpected(endpoint, body))
}

/// Decode a lookup response body.
///
/// A successful call returns a bare array with no status indication; an
/// invalid call returns an object with a `Message` field.
fn parse_lookup_body(
    endpoint: &str,
    body: &str,
) -> Result<Option<Vec<LookupResult>>, MarketDataError> {
    let value: Value = serde_json::from_str(body).map_err(|_| unexpected(endpoint, body))?;

    match value {
        Value::Object(object) => match object.get("Message") {
            Some(message) => Err(MarketDataError::UpstreamRejected(message_text(message))),
            None => Err(unexpected(endpoint, body)),
        },
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(None);
            }
            let items = elements
                .into_iter()
                .map(serde_json::from_value::<MarkitLookupItem>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| unexpected(endpoint, body))?;
            Ok(Some(
                items
                    .into_iter()
                    .map(MarkitLookupItem::into_lookup_result)
                    .collect(),
            ))
        }
        _ => Err(unexpected(endpoint, body)),
    }
}

fn message_text(message: &Value) -> String {
    match message {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
