//! Deterministic offline provider.
//!
//! Answers every well-formed symbol with a fixed quote so the application
//! can run without network access or API keys. Also the base provider for
//! ledger tests that do not care about programmable prices.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Quote, QuoteKind};
use crate::provider::MarketDataProvider;

/// Offline market data provider with canned responses.
///
/// Every non-blank symbol resolves to a quote priced 123.45 with a 1.234
/// change. Historical data is not available. Trending always reports the
/// same two symbols.
#[derive(Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn quote_for(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if symbol.trim().is_empty() {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(Quote {
            symbol: symbol.to_string(),
            exchange: format!("Asset {}", symbol),
            kind: QuoteKind::Other,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            price: Decimal::new(12345, 2),
            change_percent: Decimal::new(1234, 3),
            change: Decimal::new(1234, 3),
            previous_close: Decimal::new(1234, 3),
            open: Decimal::new(1234, 3),
        })
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.quote_for(symbol)
    }

    async fn get_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        Ok(symbols
            .iter()
            .filter_map(|symbol| self.quote_for(symbol).ok())
            .collect())
    }

    async fn get_historical_series(
        &self,
        _symbols: &[String],
        _interval: &str,
        _range: &str,
    ) -> Result<Vec<HistoricalSeries>, MarketDataError> {
        Ok(Vec::new())
    }

    async fn trending_symbols(&self, _region: &str) -> Result<Vec<String>, MarketDataError> {
        Ok(vec!["TSLA".to_string(), "AAPL".to_string()])
    }

    async fn exchange_info(
        &self,
        _region: &str,
        _exchange: &str,
    ) -> Result<String, MarketDataError> {
        let quote = Quote {
            symbol: "TSLA".to_string(),
            exchange: "NYSE".to_string(),
            kind: QuoteKind::Other,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            price: Decimal::new(12345, 2),
            change_percent: Decimal::new(1234, 3),
            change: Decimal::new(1234, 3),
            previous_close: Decimal::new(1234, 3),
            open: Decimal::new(1234, 3),
        };
        Ok(quote.exchange_summary())
    }
}
