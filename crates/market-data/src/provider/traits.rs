//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Quote};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// The portfolio ledger only ever talks to the market through this
/// boundary, so swapping the live provider for the mock (or anything
/// else) is a construction-time decision.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO" or "MOCK".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a single symbol.
    ///
    /// # Returns
    ///
    /// The latest quote on success, or `SymbolNotFound` when the provider
    /// does not recognize the symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch the latest quotes for several symbols in one round trip.
    ///
    /// Symbols the provider does not recognize are omitted from the
    /// result rather than failing the whole batch.
    async fn get_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError>;

    /// Fetch historical closing prices for the given symbols.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The symbols to fetch series for
    /// * `interval` - Sample spacing, e.g. "1d", "1wk", "1mo"
    /// * `range` - Lookback window, e.g. "5d", "1mo", "1y", "max"
    ///
    /// # Returns
    ///
    /// One series per recognized symbol, points ordered by timestamp
    /// ascending. Unrecognized symbols are skipped.
    async fn get_historical_series(
        &self,
        symbols: &[String],
        interval: &str,
        range: &str,
    ) -> Result<Vec<HistoricalSeries>, MarketDataError>;

    /// Symbols currently trending in the given region (e.g. "US", "GB").
    async fn trending_symbols(&self, region: &str) -> Result<Vec<String>, MarketDataError>;

    /// Formatted summary line for an exchange in the given region.
    async fn exchange_info(&self, region: &str, exchange: &str)
        -> Result<String, MarketDataError>;

    /// Whether the provider recognizes the symbol.
    ///
    /// Default implementation resolves a quote and reports success.
    async fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.get_quote(symbol).await.is_ok()
    }
}
