//! reqwest-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;

use super::traits::HttpTransport;

/// `HttpTransport` over a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, MarketDataError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::Transport {
                endpoint: url.to_string(),
                status: e.status().map(|s| s.as_u16()),
                message: if e.is_timeout() {
                    "Request timed out".to_string()
                } else {
                    format!("Request failed: {}", e)
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Transport {
                endpoint: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::Transport {
                endpoint: url.to_string(),
                status: Some(status.as_u16()),
                message: format!("Failed to read response: {}", e),
            })
    }
}
