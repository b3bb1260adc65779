use std::sync::Arc;

use anyhow::Context;

use lotfolio_market_data::{MarketDataProvider, MockProvider, YahooProvider, DEFAULT_BASE_URL};

/// Runtime configuration, read once at startup.
///
/// * `LOTFOLIO_API_BASE_URL` - quote API endpoint, defaults to the public one
/// * `LOTFOLIO_API_KEYS` - comma-separated API key pool
/// * `LOTFOLIO_OFFLINE` - force the canned offline provider
pub struct Config {
    pub api_base_url: String,
    pub api_keys: Vec<String>,
    pub offline: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("LOTFOLIO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_keys = std::env::var("LOTFOLIO_API_KEYS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let offline = std::env::var("LOTFOLIO_OFFLINE")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            api_base_url,
            api_keys,
            offline,
        }
    }

    /// Builds the market data provider for this session. Without API keys
    /// the offline mock stands in so the shell stays usable.
    pub fn provider(&self) -> anyhow::Result<Arc<dyn MarketDataProvider>> {
        if self.offline {
            return Ok(Arc::new(MockProvider::new()));
        }
        if self.api_keys.is_empty() {
            tracing::warn!("LOTFOLIO_API_KEYS is not set, falling back to the offline provider");
            return Ok(Arc::new(MockProvider::new()));
        }

        let provider = YahooProvider::new(self.api_base_url.clone(), self.api_keys.clone())
            .context("failed to build the Yahoo market data provider")?;
        Ok(Arc::new(provider))
    }
}
