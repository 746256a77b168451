//! Type definitions for holdings and derived portfolio values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's position in one ticker, as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Opaque unique id assigned at creation, sole key for removal
    pub id: String,

    /// Stock symbol, stored uppercased (e.g. "AAPL")
    pub ticker: String,

    /// Number of shares, strictly positive
    pub quantity: f64,

    /// Price paid per share, strictly positive
    pub purchase_price: f64,

    /// Stamped at creation; not editable and not used in any calculation
    pub purchase_date: DateTime<Utc>,
}

/// Creation payload for a holding, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewHolding {
    pub ticker: String,
    pub quantity: f64,
    pub purchase_price: f64,
}

/// Where a valued holding's current price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSource {
    /// Price fetched from the quote API this cycle
    Live,
    /// Quote fetch failed; the purchase price was substituted
    PurchaseFallback,
}

/// A holding enriched with a point-in-time quote and derived P&L fields
///
/// Recomputed on every refresh, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedHolding {
    pub holding: Holding,

    /// Most recently fetched price, or purchase_price on fetch failure
    pub current_price: f64,

    /// Marks fallback pricing so a failed fetch is distinguishable from
    /// a position that has exactly broken even
    pub price_source: PriceSource,

    /// current_price * quantity
    pub current_value: f64,

    /// purchase_price * quantity
    pub cost_basis: f64,

    /// current_value - cost_basis
    pub pnl: f64,

    /// pnl / cost_basis * 100, or 0 when the cost basis is zero
    pub pnl_percent: f64,
}

/// Aggregate figures over all valued holdings at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,

    /// Holding with the highest pnl_percent; None for an empty portfolio
    pub best_performer: Option<ValuedHolding>,

    /// Holding with the lowest pnl_percent; None for an empty portfolio
    pub worst_performer: Option<ValuedHolding>,
}

/// One holding's share of the total portfolio value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub ticker: String,
    pub value: f64,
    pub percentage: f64,
}
