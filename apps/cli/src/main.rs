mod config;
mod menu;
mod prompt;

use std::sync::Arc;

use config::Config;
use lotfolio_core::PortfolioService;
use lotfolio_market_data::MarketDataProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let log_format = std::env::var("LOTFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_tracing();

    let provider = config.provider()?;
    tracing::info!("Market data provider in use: {}", provider.id());

    let service = Arc::new(PortfolioService::with_seed_portfolio(provider));
    menu::run(service).await
}
