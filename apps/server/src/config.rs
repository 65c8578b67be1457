use std::{net::SocketAddr, time::Duration};

use markit_market_data::config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub upstream: ClientConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MARKIT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid MARKIT_LISTEN_ADDR");
        let cors_allow = std::env::var("MARKIT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = duration_ms_from_env("MARKIT_REQUEST_TIMEOUT_MS", 30000);
        let upstream_timeout_ms = duration_ms_from_env("MARKIT_UPSTREAM_TIMEOUT_MS", 30000);
        let api_url = std::env::var("MARKIT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let api_version =
            std::env::var("MARKIT_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.into());

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            upstream: ClientConfig::default()
                .with_base_url(api_url)
                .with_version(api_version)
                .with_timeout(Duration::from_millis(upstream_timeout_ms)),
        }
    }
}

fn duration_ms_from_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
