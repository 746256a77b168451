//! Refresh orchestration: one current price per holding
//!
//! Holdings are processed strictly one at a time, in stored order. Alpha
//! Vantage's free tier caps requests at 5/minute, so the loop paces
//! itself between attempts instead of fetching in parallel.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::portfolio::types::{Holding, PriceSource, ValuedHolding};
use crate::portfolio::valuation::valuate;
use crate::quotes::QuoteSource;

/// Gate between consecutive quote requests
///
/// Reified so tests can run the loop under paused time or skip the waits
/// entirely.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Fixed inter-request delay; not adaptive
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Fetch a current price for every holding and produce ValuedHoldings
///
/// Output has the same order and length as the input. A failed fetch
/// substitutes the holding's own purchase price (pnl 0), marks the result
/// as fallback-priced and the refresh continues; no retry, no abort.
pub async fn refresh_holdings(
    source: &dyn QuoteSource,
    holdings: &[Holding],
    pacer: &dyn Pacer,
) -> Vec<ValuedHolding> {
    let mut valued = Vec::with_capacity(holdings.len());

    for (i, holding) in holdings.iter().enumerate() {
        let item = match source.fetch_price(&holding.ticker).await {
            Ok(price) => {
                debug!("Fetched {} at {}", holding.ticker, price);
                valuate(holding, price, PriceSource::Live)
            }
            Err(e) => {
                warn!(
                    "Quote fetch failed for {}, falling back to purchase price: {}",
                    holding.ticker, e
                );
                valuate(holding, holding.purchase_price, PriceSource::PurchaseFallback)
            }
        };
        valued.push(item);

        if i + 1 < holdings.len() {
            pacer.pause().await;
        }
    }

    valued
}
