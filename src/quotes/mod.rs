//! Quote source abstraction
//!
//! The portfolio core only needs "a current price for one ticker"; the
//! concrete Alpha Vantage client lives in [`alphavantage`].

pub mod alphavantage;

pub use alphavantage::AlphaVantageClient;

use async_trait::async_trait;

/// Quote fetch errors
///
/// The refresh loop treats every variant identically (purchase-price
/// fallback); the taxonomy exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Quote API rate limit reached")]
    RateLimited,

    #[error("No price data available for {0}")]
    MissingPrice(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of current prices, one ticker per request
#[async_trait]
pub trait QuoteSource {
    async fn fetch_price(&self, ticker: &str) -> Result<f64, QuoteError>;
}
