use rust_decimal_macros::dec;

use chrono::{DateTime, Utc};

use super::portfolio_model::Lot;
use crate::utils::time_utils::instant_for_date;

/// Symbols trusted as tradable without a provider round trip.
///
/// Validating symbols against the provider on every call invites rate
/// limiting, so the cache starts out primed with these and every
/// successful live lookup extends it.
pub const SEED_KNOWN_SYMBOLS: [&str; 6] = ["TSLA", "AAPL", "GME", "NVDA", "BTC-USD", "MSFT"];

fn seed_instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    instant_for_date(year, month, day).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// The demo holdings loaded by `PortfolioService::with_seed_portfolio`.
/// Purchase instants are midnight in the valuation timezone.
pub(crate) fn seed_lots() -> Vec<Lot> {
    vec![
        Lot::new(
            "TSLA".to_string(),
            seed_instant(2021, 10, 1),
            dec!(10),
            dec!(775.22),
        ),
        Lot::new(
            "AAPL".to_string(),
            seed_instant(2021, 7, 5),
            dec!(20),
            dec!(139.96),
        ),
        Lot::new(
            "NVDA".to_string(),
            seed_instant(2021, 4, 14),
            dec!(12),
            dec!(152.77),
        ),
        Lot::new(
            "BTC-USD".to_string(),
            seed_instant(2021, 2, 9),
            dec!(0.0445881),
            dec!(44854.95),
        ),
    ]
}
