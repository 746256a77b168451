use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::portfolio::HoldingStore;

#[derive(Args, Clone)]
pub struct RemoveArgs {
    /// Id of the holding to remove (see 'stockfolio list')
    pub id: String,
}

pub struct RemoveCommand {
    args: RemoveArgs,
}

impl RemoveCommand {
    pub fn new(args: RemoveArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let store = HoldingStore::new(data_paths.holdings_file());

        if store.remove(&self.args.id)? {
            println!("Removed holding {}", self.args.id.bright_cyan());
        } else {
            println!(
                "{}",
                format!("No holding with id {}", self.args.id).bright_black()
            );
        }
        Ok(())
    }
}
