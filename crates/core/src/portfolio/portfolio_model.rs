use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lotfolio_market_data::{Quote, QuoteKind};

use crate::utils::time_utils::format_instant;

/// Category label accepted by the asset-type report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Stock,
    Crypto,
}

impl AssetKind {
    /// Parses the caller's informal label, case-insensitively.
    /// Anything other than "stock" or "crypto" is rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("stock") {
            Some(AssetKind::Stock)
        } else if label.eq_ignore_ascii_case("crypto") {
            Some(AssetKind::Crypto)
        } else {
            None
        }
    }

    /// The provider classification this label corresponds to.
    pub fn quote_kind(&self) -> QuoteKind {
        match self {
            AssetKind::Stock => QuoteKind::Equity,
            AssetKind::Crypto => QuoteKind::Cryptocurrency,
        }
    }
}

/// One recorded disposal against a lot.
///
/// Created by the ledger at sale time. The timestamp is stamped on
/// creation and never supplied by callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SellTransaction {
    units: Decimal,
    price: Decimal,
    sold_at: DateTime<Utc>,
}

impl SellTransaction {
    pub(crate) fn new(units: Decimal, price: Decimal) -> Self {
        Self {
            units,
            price,
            sold_at: Utc::now(),
        }
    }

    pub fn units(&self) -> Decimal {
        self.units
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }
}

/// A single purchase event and the disposals recorded against it.
///
/// The purchase quantity and unit price never change after construction;
/// the current balance is derived from the append-only sale list. A lot
/// with a zero balance stays in the ledger for cost-basis and reporting
/// purposes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lot {
    symbol: String,
    purchased_at: DateTime<Utc>,
    quantity: Decimal,
    purchase_price: Decimal,
    sales: Vec<SellTransaction>,
}

impl Lot {
    pub fn new(
        symbol: String,
        purchased_at: DateTime<Utc>,
        quantity: Decimal,
        purchase_price: Decimal,
    ) -> Self {
        Self {
            symbol,
            purchased_at,
            quantity,
            purchase_price,
            sales: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    /// Units originally purchased. Fixed for the lifetime of the lot.
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Unit price paid at purchase. Fixed for the lifetime of the lot.
    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    /// Disposals recorded against this lot, in the order they happened.
    pub fn sales(&self) -> &[SellTransaction] {
        &self.sales
    }

    /// Total units disposed across all sales.
    pub fn units_sold(&self) -> Decimal {
        self.sales.iter().map(SellTransaction::units).sum()
    }

    /// Units still held: original quantity less units sold.
    pub fn balance(&self) -> Decimal {
        self.quantity - self.units_sold()
    }

    /// Market value of the remaining balance at the quoted price.
    /// Zero when nothing is left.
    pub fn current_value(&self, quote: &Quote) -> Decimal {
        let balance = self.balance();
        if balance <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        quote.price * balance
    }

    /// Per-unit dollar change against the original purchase price.
    /// Negative when the asset trades below what was paid.
    pub fn change_amount(&self, current_price: Decimal) -> Decimal {
        current_price - self.purchase_price
    }

    /// Per-unit percent change against the original purchase price.
    /// Zero when the purchase price is zero.
    pub fn change_percent(&self, current_price: Decimal) -> Decimal {
        self.change_amount(current_price)
            .checked_div(self.purchase_price)
            .map(|ratio| ratio * Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO)
    }

    /// Appends one disposal. The lot itself does not police overdraw;
    /// the ledger checks balances before recording.
    pub(crate) fn record_sale(&mut self, units: Decimal, price: Decimal) {
        self.sales.push(SellTransaction::new(units, price));
    }

    /// Multi-line report block: purchase details, price movement and the
    /// running units balance.
    pub fn describe(&self, current_price: Decimal) -> String {
        format!(
            "{} - |Purchase Date: {} - |UnitPrice@Purchase: (USD){}\n\
             |CurrentUnitPrice: {} |Change: (USD) {} - |Change: (%) {}\n\
             |Units Purchased: {} less sold: {} = Current Units Balance:{}\n",
            self.symbol,
            format_instant(self.purchased_at),
            self.purchase_price,
            current_price,
            self.change_amount(current_price),
            self.change_percent(current_price),
            self.quantity,
            self.units_sold(),
            self.balance()
        )
    }
}
