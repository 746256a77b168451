use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use crate::data_paths::DataPaths;
use crate::portfolio::HoldingStore;

#[derive(Args, Clone)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub struct ClearCommand {
    args: ClearArgs,
}

impl ClearCommand {
    pub fn new(args: ClearArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let store = HoldingStore::new(data_paths.holdings_file());
        let count = store.load().len();

        if count == 0 {
            println!("{}", "Portfolio is already empty".bright_black());
            return Ok(());
        }

        if !self.args.yes {
            print!("Remove all {} holdings? [y/N] ", count);
            std::io::stdout().flush()?;

            let mut answer = String::new();
            std::io::stdin().lock().read_line(&mut answer)?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                println!("{}", "Aborted".bright_black());
                return Ok(());
            }
        }

        store.clear()?;
        println!("Removed {} holdings", count.to_string().bright_white());
        Ok(())
    }
}
