//! Markit On Demand API response models.
//!
//! The API uses PascalCase keys. These structs mirror the wire format and
//! are converted to the crate's models with explicit, field-by-field
//! mapping functions.

use serde::{Deserialize, Deserializer};

use crate::models::{LookupResult, Quote};

/// Body of a successful `quote` call.
///
/// Some exchanges omit fields, so every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MarkitQuoteResponse {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Exchange")]
    pub exchange: Option<String>,
    #[serde(rename = "LastPrice")]
    pub last_price: Option<f64>,
    #[serde(rename = "Change1h")]
    pub change_1h: Option<f64>,
    #[serde(rename = "ChangePercent1h")]
    pub change_percent_1h: Option<f64>,
    #[serde(rename = "Change")]
    pub change: Option<f64>,
    #[serde(rename = "ChangePercent")]
    pub change_percent: Option<f64>,
    #[serde(rename = "Change7d")]
    pub change_7d: Option<f64>,
    #[serde(rename = "ChangePercent7d")]
    pub change_percent_7d: Option<f64>,
    #[serde(rename = "ChangeYTD")]
    pub change_ytd: Option<f64>,
    #[serde(rename = "ChangePercentYTD")]
    pub change_percent_ytd: Option<f64>,
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
    #[serde(rename = "MarketCap", deserialize_with = "lenient_i64")]
    pub market_cap: Option<i64>,
    #[serde(rename = "Volume", deserialize_with = "lenient_i64")]
    pub volume: Option<i64>,
    #[serde(rename = "High")]
    pub high: Option<f64>,
    #[serde(rename = "Low")]
    pub low: Option<f64>,
    #[serde(rename = "Open")]
    pub open: Option<f64>,
    // Note: Status and MSDate are present on the wire but not mapped
}

impl MarkitQuoteResponse {
    pub fn into_quote(self) -> Quote {
        Quote {
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
            exchange: self.exchange.unwrap_or_default(),
            last_price: self.last_price.unwrap_or_default(),
            change_1h: self.change_1h.unwrap_or_default(),
            change_percent_1h: self.change_percent_1h.unwrap_or_default(),
            change_1d: self.change.unwrap_or_default(),
            change_percent_1d: self.change_percent.unwrap_or_default(),
            change_7d: self.change_7d.unwrap_or_default(),
            change_percent_7d: self.change_percent_7d.unwrap_or_default(),
            change_year: self.change_ytd.unwrap_or_default(),
            change_percent_year: self.change_percent_ytd.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
            market_cap: self.market_cap.unwrap_or_default(),
            volume: self.volume.unwrap_or_default(),
            high: self.high.unwrap_or_default(),
            low: self.low.unwrap_or_default(),
            open: self.open.unwrap_or_default(),
        }
    }
}

/// One element of the `lookup` response array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MarkitLookupItem {
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Exchange")]
    pub exchange: Option<String>,
}

impl MarkitLookupItem {
    pub fn into_lookup_result(self) -> LookupResult {
        LookupResult {
            symbol: self.symbol.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            exchange: self.exchange.unwrap_or_default(),
        }
    }
}

/// Integer fields are sometimes sent as floats (e.g. `MarketCap: 7.1e11`).
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_quote_mapping() {
        let json = r#"{
            "Status": "SUCCESS",
            "Name": "Apple Inc",
            "Symbol": "AAPL",
            "Exchange": "NASDAQ",
            "LastPrice": 150.25,
            "Change1h": 0.1,
            "ChangePercent1h": 0.2,
            "Change": 1.5,
            "ChangePercent": 1.01,
            "Change7d": 3.0,
            "ChangePercent7d": 2.0,
            "Timestamp": "Wed Oct 23 13:39:19 UTC-05:00 2013",
            "MSDate": 41570.568969907,
            "MarketCap": 476497591530,
            "Volume": 397562,
            "ChangeYTD": 532.1729,
            "ChangePercentYTD": -0.0749,
            "High": 152.0,
            "Low": 148.5,
            "Open": 149.0
        }"#;

        let response: MarkitQuoteResponse = serde_json::from_str(json).unwrap();
        let quote = response.into_quote();

        assert_eq!(quote.name, "Apple Inc");
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.exchange, "NASDAQ");
        assert_eq!(quote.last_price, 150.25);
        assert_eq!(quote.change_1h, 0.1);
        assert_eq!(quote.change_percent_1h, 0.2);
        assert_eq!(quote.change_1d, 1.5);
        assert_eq!(quote.change_percent_1d, 1.01);
        assert_eq!(quote.change_7d, 3.0);
        assert_eq!(quote.change_percent_7d, 2.0);
        assert_eq!(quote.change_year, 532.1729);
        assert_eq!(quote.change_percent_year, -0.0749);
        assert_eq!(quote.timestamp, "Wed Oct 23 13:39:19 UTC-05:00 2013");
        assert_eq!(quote.market_cap, 476497591530);
        assert_eq!(quote.volume, 397562);
        assert_eq!(quote.high, 152.0);
        assert_eq!(quote.low, 148.5);
        assert_eq!(quote.open, 149.0);
    }

    #[test]
    fn test_each_key_lands_in_one_field() {
        // Give every upstream key a distinct value and check that each value
        // appears exactly once in the mapped quote.
        let json = r#"{
            "LastPrice": 1.0, "Change1h": 2.0, "ChangePercent1h": 3.0,
            "Change": 4.0, "ChangePercent": 5.0, "Change7d": 6.0,
            "ChangePercent7d": 7.0, "ChangeYTD": 8.0, "ChangePercentYTD": 9.0,
            "High": 10.0, "Low": 11.0, "Open": 12.0
        }"#;
        let quote = serde_json::from_str::<MarkitQuoteResponse>(json)
            .unwrap()
            .into_quote();

        let mut values = vec![
            quote.last_price,
            quote.change_1h,
            quote.change_percent_1h,
            quote.change_1d,
            quote.change_percent_1d,
            quote.change_7d,
            quote.change_percent_7d,
            quote.change_year,
            quote.change_percent_year,
            quote.high,
            quote.low,
            quote.open,
        ];
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (1..=12).map(|v| v as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"Status": "SUCCESS", "Name": "Apple Inc", "Symbol": "AAPL", "LastPrice": 150.0}"#;
        let quote = serde_json::from_str::<MarkitQuoteResponse>(json)
            .unwrap()
            .into_quote();

        assert_eq!(quote.exchange, "");
        assert_eq!(quote.change_1h, 0.0);
        assert_eq!(quote.change_percent_7d, 0.0);
        assert_eq!(quote.change_year, 0.0);
        assert_eq!(quote.market_cap, 0);
        assert_eq!(quote.timestamp, "");
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{"Name": null, "Exchange": null, "Volume": null, "High": null}"#;
        let quote = serde_json::from_str::<MarkitQuoteResponse>(json)
            .unwrap()
            .into_quote();

        assert_eq!(quote.name, "");
        assert_eq!(quote.exchange, "");
        assert_eq!(quote.volume, 0);
        assert_eq!(quote.high, 0.0);
    }

    #[test]
    fn test_integer_fields_accept_floats() {
        let json = r#"{"MarketCap": 7.1e11, "Volume": 1234.0}"#;
        let quote = serde_json::from_str::<MarkitQuoteResponse>(json)
            .unwrap()
            .into_quote();

        assert_eq!(quote.market_cap, 710_000_000_000);
        assert_eq!(quote.volume, 1234);
    }

    #[test]
    fn test_wrong_type_fails() {
        let json = r#"{"LastPrice": "not a number"}"#;
        assert!(serde_json::from_str::<MarkitQuoteResponse>(json).is_err());
    }

    #[test]
    fn test_lookup_item_mapping() {
        let json = r#"[
            {"Symbol": "AAPL", "Name": "Apple Inc", "Exchange": "NASDAQ"},
            {"Symbol": "AAPL", "Name": "Apple Inc"}
        ]"#;

        let items: Vec<MarkitLookupItem> = serde_json::from_str(json).unwrap();
        let results: Vec<LookupResult> = items
            .into_iter()
            .map(MarkitLookupItem::into_lookup_result)
            .collect();

        assert_eq!(results[0], LookupResult::new("AAPL", "Apple Inc", "NASDAQ"));
        assert_eq!(results[1].exchange, "");
    }
}
