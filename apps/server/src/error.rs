use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use markit_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::MarketData(e) = &self;
        let status = match e {
            MarketDataError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            MarketDataError::UpstreamRejected(_) => StatusCode::NOT_FOUND,
            MarketDataError::Transport { .. } | MarketDataError::UnexpectedResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };
        if !e.is_client_error() {
            tracing::warn!("Upstream failure: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
