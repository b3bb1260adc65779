//! Yahoo Finance API response models.
//!
//! Wire-format DTOs for the quote, spark and trending endpoints, plus the
//! conversions into the crate's domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{HistoricalSeries, Quote, QuoteKind, SeriesPoint};

/// Envelope for `/v6/finance/quote` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteEnvelope {
    pub quote_response: Option<YahooQuoteResponse>,
}

/// Result container inside the quote envelope.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteResponse {
    #[serde(default)]
    pub result: Vec<YahooQuoteResult>,
}

/// One quoted instrument from `/v6/finance/quote`.
///
/// Only the fields the domain model needs are declared; everything else
/// in the payload is ignored. Numeric fields arrive as JSON floats and
/// are converted to `Decimal` at this boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResult {
    pub symbol: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub full_exchange_name: Option<String>,
    #[serde(default)]
    pub quote_type: Option<QuoteKind>,
    #[serde(default)]
    pub regular_market_time: Option<i64>,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub regular_market_change_percent: Option<f64>,
    #[serde(default)]
    pub regular_market_change: Option<f64>,
    #[serde(default)]
    pub regular_market_previous_close: Option<f64>,
    #[serde(default)]
    pub regular_market_open: Option<f64>,
}

impl YahooQuoteResult {
    /// Display label for ticker listings: `displayName` falling back to
    /// `shortName` when the provider sends no display name.
    pub fn display_label(&self) -> String {
        match &self.display_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.short_name.clone().unwrap_or_default(),
        }
    }

    /// Venue label used for exchange summaries.
    pub fn exchange_label(&self) -> String {
        self.full_exchange_name.clone().unwrap_or_default()
    }

    /// Converts into the domain quote, labelling it with `exchange`.
    pub fn into_quote(self, exchange: String) -> Quote {
        Quote {
            symbol: self.symbol,
            exchange,
            kind: self.quote_type.unwrap_or(QuoteKind::Other),
            timestamp: DateTime::from_timestamp(self.regular_market_time.unwrap_or(0), 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            price: decimal_or_zero(self.regular_market_price),
            change_percent: decimal_or_zero(self.regular_market_change_percent),
            change: decimal_or_zero(self.regular_market_change),
            previous_close: decimal_or_zero(self.regular_market_previous_close),
            open: decimal_or_zero(self.regular_market_open),
        }
    }
}

/// Per-symbol payload from `/v8/finance/spark`.
///
/// The endpoint answers with a top-level object keyed by symbol; each
/// entry carries parallel `timestamp` and `close` arrays. Close values
/// can be null for halted sessions.
#[derive(Debug, Deserialize)]
pub struct YahooSparkEntry {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl YahooSparkEntry {
    /// Converts into a domain series, dropping null closes and
    /// unrepresentable timestamps.
    pub fn into_series(self, symbol: String) -> HistoricalSeries {
        let points = self
            .timestamp
            .into_iter()
            .zip(self.close)
            .filter_map(|(ts, close)| {
                let close = close.and_then(Decimal::from_f64_retain)?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(SeriesPoint { timestamp, close })
            })
            .collect();
        HistoricalSeries { symbol, points }
    }
}

/// Envelope for `/v1/finance/trending/{region}` responses.
#[derive(Debug, Deserialize)]
pub struct YahooTrendingEnvelope {
    pub finance: Option<YahooTrendingFinance>,
}

#[derive(Debug, Deserialize)]
pub struct YahooTrendingFinance {
    #[serde(default)]
    pub result: Vec<YahooTrendingResult>,
}

#[derive(Debug, Deserialize)]
pub struct YahooTrendingResult {
    #[serde(default)]
    pub quotes: Vec<YahooTrendingQuote>,
}

#[derive(Debug, Deserialize)]
pub struct YahooTrendingQuote {
    pub symbol: String,
}

fn decimal_or_zero(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64_retain).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const QUOTE_FIXTURE: &str = r#"{
        "quoteResponse": {
            "result": [
                {
                    "symbol": "TSLA",
                    "displayName": "Tesla",
                    "shortName": "Tesla, Inc.",
                    "fullExchangeName": "NasdaqGS",
                    "quoteType": "EQUITY",
                    "regularMarketTime": 1633105800,
                    "regularMarketPrice": 775.22,
                    "regularMarketChangePercent": 0.83,
                    "regularMarketChange": 6.38,
                    "regularMarketPreviousClose": 768.84,
                    "regularMarketOpen": 770.0
                },
                {
                    "symbol": "BTC-USD",
                    "shortName": "Bitcoin USD",
                    "fullExchangeName": "CCC",
                    "quoteType": "CRYPTOCURRENCY",
                    "regularMarketTime": 1633105800,
                    "regularMarketPrice": 44854.95,
                    "regularMarketChangePercent": -1.2,
                    "regularMarketChange": -545.1,
                    "regularMarketPreviousClose": 45400.05,
                    "regularMarketOpen": 45100.0
                }
            ],
            "error": null
        }
    }"#;

    #[test]
    fn test_quote_envelope_deserializes_and_converts() {
        let envelope: YahooQuoteEnvelope = serde_json::from_str(QUOTE_FIXTURE).unwrap();
        let results = envelope.quote_response.unwrap().result;
        assert_eq!(results.len(), 2);

        let tesla = &results[0];
        assert_eq!(tesla.display_label(), "Tesla");
        assert_eq!(tesla.exchange_label(), "NasdaqGS");

        let quote = results.into_iter().next().unwrap();
        let label = quote.display_label();
        let quote = quote.into_quote(label);
        assert_eq!(quote.symbol, "TSLA");
        assert_eq!(quote.exchange, "Tesla");
        assert_eq!(quote.kind, QuoteKind::Equity);
        assert_eq!(quote.price, dec!(775.22));
        assert_eq!(quote.previous_close, dec!(768.84));
    }

    #[test]
    fn test_display_label_falls_back_to_short_name() {
        let envelope: YahooQuoteEnvelope = serde_json::from_str(QUOTE_FIXTURE).unwrap();
        let results = envelope.quote_response.unwrap().result;
        assert_eq!(results[1].display_label(), "Bitcoin USD");
    }

    #[test]
    fn test_unknown_quote_type_maps_to_other() {
        let json = r#"{"symbol": "XYZ", "quoteType": "WARRANT"}"#;
        let result: YahooQuoteResult = serde_json::from_str(json).unwrap();
        let quote = result.into_quote(String::new());
        assert_eq!(quote.kind, QuoteKind::Other);
        assert_eq!(quote.price, Decimal::ZERO);
    }

    #[test]
    fn test_spark_entry_skips_null_closes() {
        let json = r#"{
            "timestamp": [1633046400, 1633132800, 1633219200],
            "close": [775.22, null, 781.53]
        }"#;
        let entry: YahooSparkEntry = serde_json::from_str(json).unwrap();
        let series = entry.into_series("TSLA".to_string());
        assert_eq!(series.symbol, "TSLA");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].close, dec!(775.22));
        assert_eq!(series.points[1].close, dec!(781.53));
    }

    #[test]
    fn test_trending_envelope_deserializes() {
        let json = r#"{
            "finance": {
                "result": [
                    {
                        "count": 2,
                        "quotes": [
                            {"symbol": "TSLA"},
                            {"symbol": "BTC-USD"}
                        ],
                        "jobTimestamp": 1633105800,
                        "startInterval": 202110010000
                    }
                ],
                "error": null
            }
        }"#;
        let envelope: YahooTrendingEnvelope = serde_json::from_str(json).unwrap();
        let quotes = &envelope.finance.unwrap().result[0].quotes;
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "TSLA");
        assert_eq!(quotes[1].symbol, "BTC-USD");
    }
}
