//! Yahoo Finance market data provider.
//!
//! Talks to a hosted Yahoo Finance API gateway (yfapi.net by default):
//! - `/v6/finance/quote` for live quotes and exchange information
//! - `/v8/finance/spark` for historical closing prices
//! - `/v1/finance/trending/{region}` for trending symbols
//!
//! Requests authenticate with an `X-API-KEY` header. The provider holds a
//! pool of keys and rotates them randomly between attempts, avoiding the
//! key that was just used when more than one is available.

mod models;

use async_trait::async_trait;
use log::{debug, warn};
use rand::Rng;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Quote};
use crate::provider::MarketDataProvider;

use models::{YahooQuoteEnvelope, YahooQuoteResult, YahooSparkEntry, YahooTrendingEnvelope};

/// Default public gateway for the Yahoo Finance API.
pub const DEFAULT_BASE_URL: &str = "https://yfapi.net";

const PROVIDER_ID: &str = "YAHOO";

/// Attempts per request before giving up, fresh key each time.
const MAX_ATTEMPTS: u32 = 4;

/// Yahoo Finance market data provider.
///
/// Provides live quotes, historical series, trending symbols and exchange
/// summaries for equities and cryptocurrencies.
pub struct YahooProvider {
    client: Client,
    base_url: String,
    api_keys: Vec<String>,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Gateway base URL, without a trailing slash
    /// * `api_keys` - Pool of API keys to rotate through; must not be empty
    pub fn new(
        base_url: impl Into<String>,
        api_keys: Vec<String>,
    ) -> Result<Self, MarketDataError> {
        if api_keys.is_empty() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "at least one API key is required".to_string(),
            });
        }
        Ok(Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_keys,
        })
    }

    /// Picks a random key from the pool, avoiding `last_used` when the
    /// pool has an alternative.
    fn pick_api_key(&self, last_used: Option<&str>) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let key = &self.api_keys[rng.gen_range(0..self.api_keys.len())];
            if self.api_keys.len() == 1 || last_used != Some(key.as_str()) {
                return key.clone();
            }
        }
    }

    /// GET with retry. Each attempt uses a fresh API key; non-success
    /// statuses and transport errors both count as failed attempts.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, MarketDataError> {
        let mut last_key: Option<String> = None;
        for attempt in 1..=MAX_ATTEMPTS {
            let api_key = self.pick_api_key(last_key.as_deref());
            debug!("GET {} (attempt {}/{})", url, attempt, MAX_ATTEMPTS);
            match self
                .client
                .get(url)
                .header("X-API-KEY", &api_key)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    let body = response.text().await?;
                    return serde_json::from_str(&body).map_err(|e| MarketDataError::Decode {
                        message: e.to_string(),
                    });
                }
                Ok(response) => {
                    warn!(
                        "GET {} returned status {} (attempt {}/{})",
                        url,
                        response.status(),
                        attempt,
                        MAX_ATTEMPTS
                    );
                }
                Err(e) => {
                    warn!(
                        "GET {} failed: {} (attempt {}/{})",
                        url, e, attempt, MAX_ATTEMPTS
                    );
                }
            }
            last_key = Some(api_key);
        }
        Err(MarketDataError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Shared fetch for the quote endpoint; also serves exchange lookups.
    async fn fetch_quote_results(
        &self,
        region: &str,
        symbols: &[String],
    ) -> Result<Vec<YahooQuoteResult>, MarketDataError> {
        let url = format!(
            "{}/v6/finance/quote?region={}&lang=en&symbols={}",
            self.base_url,
            encode(region),
            encode_symbols(symbols)
        );
        let envelope: YahooQuoteEnvelope = self.get_json(&url).await?;
        Ok(envelope
            .quote_response
            .map(|response| response.result)
            .unwrap_or_default())
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let quotes = self.get_quotes(&[symbol.to_string()]).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    async fn get_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let results = self.fetch_quote_results("US", symbols).await?;
        Ok(results
            .into_iter()
            .map(|result| {
                let label = result.display_label();
                result.into_quote(label)
            })
            .collect())
    }

    async fn get_historical_series(
        &self,
        symbols: &[String],
        interval: &str,
        range: &str,
    ) -> Result<Vec<HistoricalSeries>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        // One quote round trip tells us which symbols resolve; the spark
        // endpoint is only asked about those.
        let valid: Vec<String> = self
            .get_quotes(symbols)
            .await?
            .into_iter()
            .map(|quote| quote.symbol)
            .collect();
        if valid.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/v8/finance/spark?interval={}&range={}&symbols={}",
            self.base_url,
            encode(interval),
            encode(range),
            encode_symbols(&valid)
        );
        let mut entries: HashMap<String, Option<YahooSparkEntry>> = self.get_json(&url).await?;

        let mut series = Vec::with_capacity(valid.len());
        for symbol in valid {
            if let Some(Some(entry)) = entries.remove(&symbol) {
                series.push(entry.into_series(symbol));
            }
        }
        Ok(series)
    }

    async fn trending_symbols(&self, region: &str) -> Result<Vec<String>, MarketDataError> {
        let url = format!("{}/v1/finance/trending/{}", self.base_url, encode(region));
        let envelope: YahooTrendingEnvelope = self.get_json(&url).await?;
        let finance = envelope.finance.ok_or(MarketDataError::EmptyResponse {
            endpoint: "/v1/finance/trending".to_string(),
        })?;
        Ok(finance
            .result
            .into_iter()
            .flat_map(|result| result.quotes)
            .map(|quote| sanitize_symbol(&quote.symbol))
            .filter(|symbol| !symbol.is_empty())
            .collect())
    }

    async fn exchange_info(
        &self,
        region: &str,
        exchange: &str,
    ) -> Result<String, MarketDataError> {
        let results = self
            .fetch_quote_results(region, &[exchange.to_string()])
            .await?;
        let result = results
            .into_iter()
            .next_back()
            .ok_or_else(|| MarketDataError::SymbolNotFound(exchange.to_string()))?;
        let label = result.exchange_label();
        Ok(result.into_quote(label).exchange_summary())
    }
}

/// Percent-encodes each symbol and joins with commas for a query string.
fn encode_symbols(symbols: &[String]) -> String {
    symbols
        .iter()
        .map(|symbol| encode(symbol).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Strips every non-alphanumeric character, as trending symbols sometimes
/// carry exchange decorations.
fn sanitize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
