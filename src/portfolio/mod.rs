//! Portfolio core: holdings persistence, valuation arithmetic and the
//! quote refresh cycle

pub mod display;
pub mod refresh;
pub mod store;
pub mod types;
pub mod valuation;

pub use refresh::{refresh_holdings, FixedDelay, Pacer};
pub use store::{HoldingStore, StoreError};
pub use types::{
    Allocation, Holding, NewHolding, PortfolioSummary, PriceSource, ValuedHolding,
};
pub use valuation::{allocations, summarize, valuate};
