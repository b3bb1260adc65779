use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::QuoteKind;

/// Point-in-time market quote for a single instrument.
///
/// All monetary fields are denominated in the unit of account (USD).
/// Quotes are immutable once constructed; there is no mutating API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument symbol, e.g. AAPL, TSLA or BTC-USD.
    pub symbol: String,

    /// Full name of the exchange providing the quote.
    pub exchange: String,

    /// Instrument classification reported by the provider.
    pub kind: QuoteKind,

    /// Timestamp of the quote.
    pub timestamp: DateTime<Utc>,

    /// Current market price.
    pub price: Decimal,

    /// Change since the previous close, as a percentage.
    pub change_percent: Decimal,

    /// Change since the previous close, in USD.
    pub change: Decimal,

    /// Closing price of the previous trading day.
    pub previous_close: Decimal,

    /// Price at the most recent market open.
    pub open: Decimal,
}

impl Quote {
    /// One-line ticker summary: symbol, current price, percent and dollar change.
    pub fn ticker_summary(&self) -> String {
        format!(
            "{}\t\t - Current Price (USD): {}\t\t - % change: {}\t\t - $ change: {}",
            self.symbol, self.price, self.change_percent, self.change
        )
    }

    /// Detailed one-line summary including exchange name and session prices.
    pub fn exchange_summary(&self) -> String {
        format!(
            "{} - {}\t || Current Price (USD): {}\t || % change: {}\t || $ change: {}\t || Quote Type: {}\t || Previous Close: (USD) {}\t || Market Open: (USD) {}",
            self.exchange,
            self.symbol,
            self.price,
            self.change_percent,
            self.change,
            self.kind,
            self.previous_close,
            self.open
        )
    }
}
