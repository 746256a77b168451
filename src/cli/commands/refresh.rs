//! Refresh command: fetch live quotes and display P&L

use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::portfolio::{
    allocations, display, refresh_holdings, summarize, FixedDelay, HoldingStore,
};
use crate::quotes::AlphaVantageClient;

#[derive(Args, Clone)]
pub struct RefreshArgs {}

pub struct RefreshCommand {
    _args: RefreshArgs,
}

impl RefreshCommand {
    pub fn new(args: RefreshArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, api_key: String, data_paths: DataPaths) -> Result<()> {
        let store = HoldingStore::new(data_paths.holdings_file());
        let holdings = store.load();

        if holdings.is_empty() {
            display::display_holdings(&holdings);
            return Ok(());
        }

        tracing::info!("Refreshing quotes for {} holdings", holdings.len());

        let client = AlphaVantageClient::new(api_key)?;
        let valued = refresh_holdings(&client, &holdings, &FixedDelay::default()).await;

        display::display_valued_holdings(&valued);
        display::display_summary(&summarize(&valued));
        display::display_allocations(&allocations(&valued));
        Ok(())
    }
}
