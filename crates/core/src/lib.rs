//! Lotfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio ledger business logic for Lotfolio.
//! It is transport-agnostic and talks to market data exclusively through
//! the provider trait defined in `lotfolio-market-data`.

pub mod portfolio;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;
