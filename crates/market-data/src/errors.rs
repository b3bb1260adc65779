//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Callers that cannot act on the distinction (the portfolio ledger treats
/// every failure as "symbol did not resolve") are expected to log the error
/// and collapse it; the variants exist for diagnostics and for the provider
/// retry loop.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not recognized by the provider.
    /// Terminal - retrying will not help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered but the payload carried no usable data.
    #[error("Empty response from {endpoint}")]
    EmptyResponse {
        /// The endpoint that returned the empty payload
        endpoint: String,
    },

    /// Every attempt against the provider failed.
    #[error("Request failed after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made before giving up
        attempts: u32,
    },

    /// The provider response could not be decoded.
    #[error("Failed to decode provider response: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
