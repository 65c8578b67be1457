//! Error types for the market data crate.
//!
//! [`MarketDataError`] is the single error enum returned by every client
//! operation. Nothing in this crate recovers from or retries an error; each
//! variant is surfaced to the caller as soon as it occurs.

use thiserror::Error;

/// Errors that can occur while talking to the quote API.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The caller passed an empty or blank required parameter, or asked for
    /// an API function the client does not know.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP layer failed: the request could not be completed, or the
    /// server answered with a non-success status.
    #[error("Transport error: {endpoint} - {message}")]
    Transport {
        /// The endpoint that was requested
        endpoint: String,
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// The API answered with a well-formed error (unknown symbol, missing
    /// parameter, non-SUCCESS status).
    #[error("Upstream rejected request: {0}")]
    UpstreamRejected(String),

    /// The response matched neither the success shape nor a known error
    /// shape.
    #[error("Unsupported response for {context}: {payload}")]
    UnexpectedResponse {
        /// Endpoint or queried symbol that produced the payload
        context: String,
        /// Raw payload, kept for diagnosis
        payload: String,
    },
}

impl MarketDataError {
    /// Returns `true` when the error was caused by the caller's input rather
    /// than by the transport or by an unrecognized upstream response.
    ///
    /// # Examples
    ///
    /// ```
    /// use markit_market_data::errors::MarketDataError;
    ///
    /// let error = MarketDataError::UpstreamRejected("NO_DATA".to_string());
    /// assert!(error.is_client_error());
    ///
    /// let error = MarketDataError::Transport {
    ///     endpoint: "http://localhost".to_string(),
    ///     status: Some(503),
    ///     message: "Service Unavailable".to_string(),
    /// };
    /// assert!(!error.is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidArgument(_) | Self::UpstreamRejected(_) => true,
            Self::Transport { .. } | Self::UnexpectedResponse { .. } => false,
        }
    }
}
