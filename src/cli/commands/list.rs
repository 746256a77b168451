use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::portfolio::{display, HoldingStore};

#[derive(Args, Clone)]
pub struct ListArgs {}

pub struct ListCommand {
    _args: ListArgs,
}

impl ListCommand {
    pub fn new(args: ListArgs) -> Self {
        Self { _args: args }
    }

    pub fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let store = HoldingStore::new(data_paths.holdings_file());
        display::display_holdings(&store.load());
        Ok(())
    }
}
