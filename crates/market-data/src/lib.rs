//! Lotfolio Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching capabilities
//! for the lotfolio portfolio ledger.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Live quotes for equities and cryptocurrencies
//! - Historical closing-price series
//! - Trending symbols and exchange summaries per region
//! - A deterministic offline provider for demo and test runs
//!
//! # Core Types
//!
//! - [`Quote`] - Point-in-time market quote
//! - [`HistoricalSeries`] - Time-ordered closing prices for one symbol
//! - [`QuoteKind`] - Instrument classification reported by the provider
//! - [`MarketDataProvider`] - The boundary trait every provider implements
//!
//! The portfolio ledger never constructs HTTP clients itself; it receives
//! an `Arc<dyn MarketDataProvider>` and treats every provider failure as
//! "symbol did not resolve".

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{HistoricalSeries, Quote, QuoteKind, SeriesPoint};

// Re-export provider types
pub use provider::yahoo::DEFAULT_BASE_URL;
pub use provider::{MarketDataProvider, MockProvider, YahooProvider};

// Re-export error type
pub use errors::MarketDataError;
