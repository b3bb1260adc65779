//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (Yahoo, mock)
//!
//! The provider system is designed to be:
//! - **Provider-agnostic**: The portfolio ledger doesn't know about specific providers
//! - **Extensible**: New providers can be added by implementing `MarketDataProvider`

mod mock;
mod traits;

pub mod yahoo;

// Re-exports
pub use mock::MockProvider;
pub use traits::MarketDataProvider;
pub use yahoo::YahooProvider;
