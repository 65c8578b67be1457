use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use markit_market_data::{LookupResult, Quote};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct LookupQuery {
    #[serde(default)]
    input: String,
}

#[derive(Debug, Serialize)]
struct ExchangeResponse {
    symbol: String,
    exchange: Option<String>,
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_provider.get_quote(&symbol).await?;
    Ok(Json(quote))
}

/// Search symbols and company names. Responds `null` when nothing matches.
async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LookupQuery>,
) -> ApiResult<Json<Option<Vec<LookupResult>>>> {
    let results = state.quote_provider.lookup(&query.input).await?;
    Ok(Json(results))
}

async fn get_exchange(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<ExchangeResponse>> {
    let exchange = state.quote_provider.lookup_exchange(&symbol).await?;
    Ok(Json(ExchangeResponse { symbol, exchange }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes/{symbol}", get(get_quote))
        .route("/lookup", get(lookup))
        .route("/exchanges/{symbol}", get(get_exchange))
}
