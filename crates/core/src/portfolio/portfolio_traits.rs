//! Portfolio ledger service trait.
//!
//! This trait defines the contract for ledger operations without tying
//! callers to a concrete service, allowing shells and tests to swap in
//! their own implementations.

use async_trait::async_trait;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use lotfolio_market_data::{HistoricalSeries, Quote};

use super::portfolio_model::Lot;

/// Trait defining the contract for portfolio ledger operations.
///
/// Every operation is total: failures surface as `false`, `None` or an
/// empty result, never as an error value. Operations that fail leave the
/// ledger untouched.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Adds `amount` to available cash. Non-positive amounts are ignored.
    async fn add_funds(&self, amount: Decimal);

    /// Withdraws `amount` from available cash.
    ///
    /// Succeeds iff `amount` does not exceed the cash on hand; otherwise
    /// the balance is unchanged and `false` is returned.
    async fn withdraw_funds(&self, amount: Decimal) -> bool;

    /// Cash currently available for purchases.
    async fn available_funds(&self) -> Decimal;

    /// Reports whether `symbol` is tradable.
    ///
    /// Satisfied from the known-good cache (case-insensitively) when
    /// possible; on a miss the provider is asked for a live quote and a
    /// hit extends the cache. Provider failures read as "not tradable".
    async fn check_symbol(&self, symbol: &str) -> bool;

    /// Buys `quantity` units of `symbol` at the live quoted price.
    ///
    /// All-or-nothing: a new lot is opened and cash debited only when a
    /// quote is available, `quantity` is positive and the full cost is
    /// covered by available cash.
    async fn purchase_asset(&self, symbol: &str, quantity: Decimal) -> bool;

    /// Sells `quantity` units of `symbol` at the live quoted price.
    ///
    /// Units are drawn from the cheapest-cost-basis lots first; lots with
    /// equal purchase price are drawn in purchase order. Fails without
    /// touching any lot when the symbol is invalid, the aggregate balance
    /// is short or no disposal quote can be fetched.
    async fn sell_asset(&self, symbol: &str, quantity: Decimal) -> bool;

    /// Live market value of every open lot. Lots whose quote cannot be
    /// resolved contribute zero.
    async fn portfolio_value(&self) -> Decimal;

    /// Quantity-weighted average purchase price across every lot ever
    /// opened for `symbol`, fully-sold lots included. `None` when the
    /// symbol was never purchased.
    async fn average_investment_price(&self, symbol: &str) -> Option<Decimal>;

    /// Live quote for one symbol, or `None` when it cannot be resolved.
    async fn get_quote(&self, symbol: &str) -> Option<Quote>;

    /// Live quotes for a batch of symbols. Unresolved symbols are
    /// omitted from the result rather than erroring.
    async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote>;

    /// Live quotes for the named assets, restricted to symbols the
    /// portfolio currently holds with a positive balance. Names that are
    /// not tradable or not held are skipped.
    async fn held_asset_quotes(&self, names: &[String]) -> Vec<Quote>;

    /// Historical closing-price series, one per resolvable symbol.
    ///
    /// # Arguments
    /// * `interval` - sampling interval, e.g. "1d"
    /// * `range` - how far back to reach, e.g. "1mo"
    async fn get_historical_data(
        &self,
        symbols: &[String],
        interval: &str,
        range: &str,
    ) -> Vec<HistoricalSeries>;

    /// Symbols currently trending in `region` (e.g. "US").
    async fn trending_symbols(&self, region: &str) -> Vec<String>;

    /// Formatted one-line summary for an exchange-listed symbol, or
    /// `None` when the exchange cannot be resolved.
    async fn exchange_summary(&self, region: &str, exchange: &str) -> Option<String>;

    /// Formatted report of every lot ever opened, including fully-sold
    /// ones, with the lifetime average entry price per lot.
    async fn list_all_investments(&self) -> String;

    /// Formatted report of open holdings whose provider quote type
    /// matches the caller's informal category ("stock" or "crypto").
    /// Any other label yields an empty report.
    async fn list_assets_by_type(&self, kind_label: &str) -> String;

    /// Formatted report of open holdings whose name or symbol matches
    /// one of `names`, case-insensitively.
    async fn list_assets_by_name(&self, names: &[String]) -> String;

    /// Formatted report of purchases dated strictly between `start` and
    /// `end` at calendar-day granularity. Events on the boundary dates
    /// are excluded.
    async fn list_purchases_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String;

    /// Formatted report of sales dated strictly between `start` and
    /// `end` at calendar-day granularity. Events on the boundary dates
    /// are excluded.
    async fn list_sales_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String;

    /// Snapshot of lots with a positive balance. An empty `symbol`
    /// matches every holding; otherwise the match is exact.
    async fn open_lots(&self, symbol: &str) -> Vec<Lot>;
}
