//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Instrument classification (QuoteKind)
//! - `quote` - Point-in-time quote data (Quote)
//! - `series` - Historical price series (HistoricalSeries, SeriesPoint)

mod quote;
mod series;
mod types;

pub use quote::Quote;
pub use series::{HistoricalSeries, SeriesPoint};
pub use types::QuoteKind;
