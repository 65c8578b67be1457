//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that quote API clients implement
//! - The `HttpTransport` seam and its reqwest-backed implementation
//! - The Markit On Demand provider
//!
//! Providers own request construction and response decoding. The transport
//! only moves bytes and reports HTTP failures.

mod traits;
mod transport;

pub mod markit;

// Re-exports
pub use traits::{find_exchange, HttpTransport, QuoteProvider};
pub use transport::ReqwestTransport;
