//! Portfolio module - lot-based ledger models, services, and traits.

mod portfolio_constants;
mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;



pub use portfolio_constants::SEED_KNOWN_SYMBOLS;
pub use portfolio_model::{AssetKind, Lot, SellTransaction};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
