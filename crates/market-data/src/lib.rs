//! Markit Market Data Crate
//!
//! This crate provides a client for the Markit On Demand quote API.
//!
//! # Overview
//!
//! The API exposes two read-only functions:
//! - `quote`: price and trading statistics for a ticker symbol
//! - `lookup`: symbol, company name and exchange for a free-text search
//!
//! The client builds the endpoint URL, issues one GET per call, decodes the
//! JSON body and maps the API's PascalCase fields onto the crate's models.
//! Known failure responses surface as typed [`MarketDataError`]s.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  QuoteProvider   |  (get_quote, lookup, lookup_exchange)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | MarkitOnDemand   | --> |  HttpTransport   |  (reqwest by default)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! | Quote / Lookup   |  (decoded models)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Price snapshot for one symbol
//! - [`LookupResult`] - One symbol search match
//! - [`ApiFunction`] - API function identifiers
//! - [`ClientConfig`] - Base URL, version and timeout

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use config::ClientConfig;
pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{ApiFunction, LookupResult, Quote};

// Re-export provider types
pub use provider::markit::MarkitOnDemandProvider;
pub use provider::{find_exchange, HttpTransport, QuoteProvider, ReqwestTransport};
