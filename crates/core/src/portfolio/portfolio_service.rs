use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use lotfolio_market_data::{HistoricalSeries, MarketDataProvider, Quote};

use super::portfolio_constants::{seed_lots, SEED_KNOWN_SYMBOLS};
use super::portfolio_model::{AssetKind, Lot};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::utils::time_utils::{format_instant, in_date_range_exclusive};

/// Cash and holdings, guarded as one unit.
///
/// Purchases and sales are check-then-mutate sequences over both fields,
/// so they share a single lock.
struct LedgerState {
    available_funds: Decimal,
    holdings: Vec<Lot>,
}

/// Service for managing the portfolio ledger.
pub struct PortfolioService {
    provider: Arc<dyn MarketDataProvider>,
    state: RwLock<LedgerState>,
    /// Symbols confirmed tradable, uppercased. Grows for the process
    /// lifetime; independent validations may extend it concurrently.
    known_symbols: std::sync::RwLock<HashSet<String>>,
}

impl PortfolioService {
    /// Creates an empty ledger backed by `provider`.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_holdings(provider, Vec::new())
    }

    /// Creates a ledger pre-loaded with the demo holdings.
    pub fn with_seed_portfolio(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_holdings(provider, seed_lots())
    }

    fn with_holdings(provider: Arc<dyn MarketDataProvider>, holdings: Vec<Lot>) -> Self {
        let known_symbols = SEED_KNOWN_SYMBOLS
            .iter()
            .map(|symbol| symbol.to_string())
            .collect();
        Self {
            provider,
            state: RwLock::new(LedgerState {
                available_funds: Decimal::ZERO,
                holdings,
            }),
            known_symbols: std::sync::RwLock::new(known_symbols),
        }
    }

    async fn open_holdings(&self) -> Vec<Lot> {
        let state = self.state.read().await;
        state
            .holdings
            .iter()
            .filter(|lot| lot.balance() > Decimal::ZERO)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn add_funds(&self, amount: Decimal) {
        if amount <= Decimal::ZERO {
            return;
        }
        let mut state = self.state.write().await;
        state.available_funds += amount;
    }

    async fn withdraw_funds(&self, amount: Decimal) -> bool {
        let mut state = self.state.write().await;
        if amount <= state.available_funds {
            state.available_funds -= amount;
            true
        } else {
            false
        }
    }

    async fn available_funds(&self) -> Decimal {
        self.state.read().await.available_funds
    }

    async fn check_symbol(&self, symbol: &str) -> bool {
        let cache_key = symbol.to_uppercase();
        if self.known_symbols.read().unwrap().contains(&cache_key) {
            return true;
        }

        match self.provider.get_quote(symbol).await {
            Ok(_) => {
                self.known_symbols.write().unwrap().insert(cache_key);
                true
            }
            Err(err) => {
                debug!("Symbol {} failed validation: {}", symbol, err);
                false
            }
        }
    }

    async fn purchase_asset(&self, symbol: &str, quantity: Decimal) -> bool {
        let quote = match self.provider.get_quote(symbol).await {
            Ok(quote) => quote,
            Err(err) => {
                debug!("Purchase of {} aborted, no quote: {}", symbol, err);
                return false;
            }
        };

        if quantity <= Decimal::ZERO {
            return false;
        }

        let cost = quote.price * quantity;

        let mut state = self.state.write().await;
        if state.available_funds < cost {
            return false;
        }

        state
            .holdings
            .push(Lot::new(symbol.to_string(), Utc::now(), quantity, quote.price));
        state.available_funds -= cost;
        true
    }

    async fn sell_asset(&self, symbol: &str, quantity: Decimal) -> bool {
        if quantity <= Decimal::ZERO {
            return false;
        }
        if !self.check_symbol(symbol).await {
            return false;
        }

        let mut state = self.state.write().await;

        let mut candidates: Vec<usize> = state
            .holdings
            .iter()
            .enumerate()
            .filter(|(_, lot)| lot.symbol() == symbol && lot.balance() > Decimal::ZERO)
            .map(|(index, _)| index)
            .collect();

        let total: Decimal = candidates
            .iter()
            .map(|&index| state.holdings[index].balance())
            .sum();
        if total < quantity {
            return false;
        }

        // Disposal price comes from one live quote and applies uniformly
        // to every lot drawn in this call. The lock stays held so the
        // checked balances cannot move before the mutation below.
        let quote = match self.provider.get_quote(symbol).await {
            Ok(quote) => quote,
            Err(err) => {
                debug!("Sale of {} aborted, no quote: {}", symbol, err);
                return false;
            }
        };

        // Cheapest cost basis first; the sort is stable, so lots bought
        // at the same price are drawn in purchase order.
        candidates.sort_by(|&a, &b| {
            state.holdings[a]
                .purchase_price()
                .cmp(&state.holdings[b].purchase_price())
        });

        let mut remaining = quantity;
        for index in candidates {
            let take = state.holdings[index].balance().min(remaining);
            state.holdings[index].record_sale(take, quote.price);
            remaining -= take;
            if remaining.is_zero() {
                break;
            }
        }

        state.available_funds += quantity * quote.price;
        true
    }

    async fn portfolio_value(&self) -> Decimal {
        let open = self.open_holdings().await;
        if open.is_empty() {
            return Decimal::ZERO;
        }

        // One batched lookup over the distinct symbols rather than one
        // request per lot.
        let symbols = distinct_symbols(&open);
        let quotes = self.get_quotes(&symbols).await;

        open.iter()
            .map(|lot| {
                quotes
                    .iter()
                    .find(|quote| quote.symbol == lot.symbol())
                    .map(|quote| lot.current_value(quote))
                    .unwrap_or(Decimal::ZERO)
            })
            .sum()
    }

    async fn average_investment_price(&self, symbol: &str) -> Option<Decimal> {
        let state = self.state.read().await;
        average_price(&state.holdings, symbol)
    }

    async fn get_quote(&self, symbol: &str) -> Option<Quote> {
        match self.provider.get_quote(symbol).await {
            Ok(quote) => Some(quote),
            Err(err) => {
                debug!("Quote for {} unavailable: {}", symbol, err);
                None
            }
        }
    }

    async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        if symbols.is_empty() {
            return Vec::new();
        }
        match self.provider.get_quotes(symbols).await {
            Ok(quotes) => quotes,
            Err(err) => {
                warn!("Batch quote lookup failed: {}", err);
                Vec::new()
            }
        }
    }

    async fn held_asset_quotes(&self, names: &[String]) -> Vec<Quote> {
        let mut valid = Vec::new();
        for name in names {
            if self.check_symbol(name).await {
                valid.push(name.clone());
            } else {
                debug!("Skipping invalid symbol {}", name);
            }
        }
        if valid.is_empty() {
            return Vec::new();
        }

        let held = distinct_symbols(&self.open_holdings().await);
        if held.is_empty() {
            return Vec::new();
        }

        let mut lookup: Vec<String> = Vec::new();
        for name in valid {
            if held.contains(&name) && !lookup.contains(&name) {
                lookup.push(name);
            }
        }
        if lookup.is_empty() {
            return Vec::new();
        }

        self.get_quotes(&lookup).await
    }

    async fn get_historical_data(
        &self,
        symbols: &[String],
        interval: &str,
        range: &str,
    ) -> Vec<HistoricalSeries> {
        match self
            .provider
            .get_historical_series(symbols, interval, range)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                warn!("Historical lookup failed: {}", err);
                Vec::new()
            }
        }
    }

    async fn trending_symbols(&self, region: &str) -> Vec<String> {
        match self.provider.trending_symbols(region).await {
            Ok(symbols) => symbols,
            Err(err) => {
                warn!("Trending lookup for region {} failed: {}", region, err);
                Vec::new()
            }
        }
    }

    async fn exchange_summary(&self, region: &str, exchange: &str) -> Option<String> {
        match self.provider.exchange_info(region, exchange).await {
            Ok(summary) => Some(summary),
            Err(err) => {
                debug!("Exchange info for {} unavailable: {}", exchange, err);
                None
            }
        }
    }

    async fn list_all_investments(&self) -> String {
        let lots: Vec<Lot> = self.state.read().await.holdings.clone();
        let symbols = distinct_symbols(&lots);
        let quotes = self.get_quotes(&symbols).await;

        let mut report = String::from("PERSONAL ASSETS: \n");
        for lot in &lots {
            let current_price = quotes
                .iter()
                .find(|quote| quote.symbol == lot.symbol())
                .map(|quote| quote.price)
                .unwrap_or(Decimal::ZERO);
            let average = average_price(&lots, lot.symbol()).unwrap_or_default();

            report.push_str(&lot.describe(current_price));
            report.push_str(&format!(" - AverageUnitPrice: {}\n", average));
        }
        report
    }

    async fn list_assets_by_type(&self, kind_label: &str) -> String {
        let kind = match AssetKind::from_label(kind_label) {
            Some(kind) => kind,
            None => return String::new(),
        };

        let lots: Vec<Lot> = self.state.read().await.holdings.clone();
        let open: Vec<Lot> = lots
            .iter()
            .filter(|lot| lot.balance() > Decimal::ZERO)
            .cloned()
            .collect();
        if open.is_empty() {
            return String::new();
        }

        let symbols = distinct_symbols(&open);
        let quotes = self.get_quotes(&symbols).await;

        let mut report = String::new();
        for symbol in &symbols {
            let quote = match quotes.iter().find(|quote| &quote.symbol == symbol) {
                Some(quote) => quote,
                None => continue,
            };
            if quote.kind != kind.quote_kind() {
                continue;
            }

            let units: Decimal = open
                .iter()
                .filter(|lot| lot.symbol() == symbol.as_str())
                .map(Lot::balance)
                .sum();
            let average = average_price(&lots, symbol).unwrap_or_default();

            report.push_str(&format!(
                "Name: {}\t Symbol: {}\t\t Average Investment Price: {}\t\tCurrent Units: {}\n",
                quote.exchange,
                quote.ticker_summary(),
                average,
                units
            ));
        }
        report
    }

    async fn list_assets_by_name(&self, names: &[String]) -> String {
        let lots: Vec<Lot> = self.state.read().await.holdings.clone();
        let open: Vec<Lot> = lots
            .iter()
            .filter(|lot| lot.balance() > Decimal::ZERO)
            .cloned()
            .collect();
        if open.is_empty() {
            return String::new();
        }

        let symbols = distinct_symbols(&open);
        let quotes = self.get_quotes(&symbols).await;

        let mut report = String::new();
        for name in names {
            let needle = name.to_lowercase();
            for quote in &quotes {
                let matches = quote.exchange.to_lowercase().contains(&needle)
                    || quote.symbol.to_lowercase().contains(&needle);
                if !matches {
                    continue;
                }

                let units: Decimal = open
                    .iter()
                    .filter(|lot| lot.symbol() == quote.symbol.as_str())
                    .map(Lot::balance)
                    .sum();
                let average = average_price(&lots, &quote.symbol).unwrap_or_default();

                report.push_str(&format!(
                    " Name: \t{}\tSymbol: {}\n\t  Average price {}\t\tCurrent Units: {}\n",
                    quote.exchange,
                    quote.ticker_summary(),
                    average,
                    units
                ));
            }
        }
        report
    }

    async fn list_purchases_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        let state = self.state.read().await;
        let mut report = String::new();
        for lot in &state.holdings {
            if in_date_range_exclusive(lot.purchased_at(), start, end) {
                report.push_str(&format!(
                    "{} purchased {} on {} at ${} each \n",
                    lot.symbol(),
                    lot.quantity(),
                    format_instant(lot.purchased_at()),
                    lot.purchase_price()
                ));
            }
        }
        report
    }

    async fn list_sales_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        let state = self.state.read().await;
        let mut report = String::new();
        for lot in &state.holdings {
            for sale in lot.sales() {
                if in_date_range_exclusive(sale.sold_at(), start, end) {
                    report.push_str(&format!(
                        "{} sold {} on {} at ${}\n",
                        lot.symbol(),
                        sale.units(),
                        format_instant(sale.sold_at()),
                        sale.price()
                    ));
                }
            }
        }
        report
    }

    async fn open_lots(&self, symbol: &str) -> Vec<Lot> {
        let state = self.state.read().await;
        state
            .holdings
            .iter()
            .filter(|lot| {
                lot.balance() > Decimal::ZERO && (symbol.is_empty() || lot.symbol() == symbol)
            })
            .cloned()
            .collect()
    }
}

/// Distinct symbols in first-appearance order.
fn distinct_symbols(lots: &[Lot]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for lot in lots {
        if seen.insert(lot.symbol().to_string()) {
            symbols.push(lot.symbol().to_string());
        }
    }
    symbols
}

/// Quantity-weighted average purchase price over every lot for `symbol`,
/// drained lots included. `None` when no lot matches.
fn average_price(lots: &[Lot], symbol: &str) -> Option<Decimal> {
    let mut units = Decimal::ZERO;
    let mut cost = Decimal::ZERO;
    for lot in lots.iter().filter(|lot| lot.symbol() == symbol) {
        units += lot.quantity();
        cost += lot.purchase_price() * lot.quantity();
    }
    if units.is_zero() {
        None
    } else {
        Some(cost / units)
    }
}
