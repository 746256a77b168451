//! Pure P&L and aggregation arithmetic
//!
//! No I/O here: these functions map holdings plus point-in-time prices to
//! derived valuation figures and are total over finite inputs.

use crate::portfolio::types::{
    Allocation, Holding, PortfolioSummary, PriceSource, ValuedHolding,
};

/// Derive the valuation fields for one holding at the given price
pub fn valuate(holding: &Holding, current_price: f64, price_source: PriceSource) -> ValuedHolding {
    let current_value = current_price * holding.quantity;
    let cost_basis = holding.purchase_price * holding.quantity;
    let pnl = current_value - cost_basis;
    let pnl_percent = if cost_basis > 0.0 {
        pnl / cost_basis * 100.0
    } else {
        0.0
    };

    ValuedHolding {
        holding: holding.clone(),
        current_price,
        price_source,
        current_value,
        cost_basis,
        pnl,
        pnl_percent,
    }
}

/// Aggregate valued holdings into portfolio-wide totals and performers
///
/// An empty portfolio yields zero totals and no performers; that is a
/// defined case, not an error. Best/worst are selected by pnl_percent
/// with ties broken by input order (stable sort).
pub fn summarize(holdings: &[ValuedHolding]) -> PortfolioSummary {
    if holdings.is_empty() {
        return PortfolioSummary {
            total_value: 0.0,
            total_cost: 0.0,
            total_pnl: 0.0,
            total_pnl_percent: 0.0,
            best_performer: None,
            worst_performer: None,
        };
    }

    let total_value: f64 = holdings.iter().map(|h| h.current_value).sum();
    let total_cost: f64 = holdings.iter().map(|h| h.cost_basis).sum();
    let total_pnl = total_value - total_cost;
    let total_pnl_percent = if total_cost > 0.0 {
        total_pnl / total_cost * 100.0
    } else {
        0.0
    };

    let mut by_percent: Vec<&ValuedHolding> = holdings.iter().collect();
    by_percent.sort_by(|a, b| {
        b.pnl_percent
            .partial_cmp(&a.pnl_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    PortfolioSummary {
        total_value,
        total_cost,
        total_pnl,
        total_pnl_percent,
        best_performer: by_percent.first().map(|h| (*h).clone()),
        worst_performer: by_percent.last().map(|h| (*h).clone()),
    }
}

/// Each holding's share of total portfolio value
///
/// Empty when the total value is zero (nothing meaningful to allocate).
pub fn allocations(holdings: &[ValuedHolding]) -> Vec<Allocation> {
    let total_value: f64 = holdings.iter().map(|h| h.current_value).sum();
    if total_value == 0.0 {
        return Vec::new();
    }

    holdings
        .iter()
        .map(|h| Allocation {
            ticker: h.holding.ticker.clone(),
            value: h.current_value,
            percentage: h.current_value / total_value * 100.0,
        })
        .collect()
}
