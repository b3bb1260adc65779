use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument classification as reported by the quote provider.
///
/// Variants follow the provider's `quoteType` taxonomy. Anything the
/// provider introduces that we do not know about lands on [`QuoteKind::Other`]
/// so deserialization never fails on new instrument types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteKind {
    Equity,
    Cryptocurrency,
    Etf,
    Index,
    MutualFund,
    Currency,
    #[serde(other)]
    Other,
}

impl QuoteKind {
    /// Provider wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteKind::Equity => "EQUITY",
            QuoteKind::Cryptocurrency => "CRYPTOCURRENCY",
            QuoteKind::Etf => "ETF",
            QuoteKind::Index => "INDEX",
            QuoteKind::MutualFund => "MUTUALFUND",
            QuoteKind::Currency => "CURRENCY",
            QuoteKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
