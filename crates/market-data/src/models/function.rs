use std::fmt;
use std::str::FromStr;

use crate::errors::MarketDataError;

/// Functions exposed by the quote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiFunction {
    /// Price and trading statistics for one ticker symbol.
    Quote,
    /// Free-text search over symbols and company names.
    Lookup,
}

impl ApiFunction {
    /// Path segment used in the endpoint URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiFunction::Quote => "quote",
            ApiFunction::Lookup => "lookup",
        }
    }

    /// Name of the single query parameter the function takes.
    pub fn param_name(&self) -> &'static str {
        match self {
            ApiFunction::Quote => "symbol",
            ApiFunction::Lookup => "input",
        }
    }
}

impl fmt::Display for ApiFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiFunction {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quote" => Ok(ApiFunction::Quote),
            "lookup" => Ok(ApiFunction::Lookup),
            _ => Err(MarketDataError::InvalidArgument(format!(
                "Invalid API function {}.",
                s
            ))),
        }
    }
}
