use std::sync::Arc;

use markit_market_data::{MarkitOnDemandProvider, QuoteProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_provider: Arc<dyn QuoteProvider>,
}

impl AppState {
    pub fn new(quote_provider: Arc<dyn QuoteProvider>) -> Self {
        Self { quote_provider }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("MARKIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider = MarkitOnDemandProvider::new(config.upstream.clone());
    tracing::info!(
        "Quote provider {} at {}/{}",
        provider.id(),
        provider.config().base_url,
        provider.config().version
    );
    Arc::new(AppState::new(Arc::new(provider)))
}
