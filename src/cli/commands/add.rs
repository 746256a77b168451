//! Add command for recording a new holding

use anyhow::{anyhow, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::portfolio::display::format_currency;
use crate::portfolio::{HoldingStore, NewHolding};

#[derive(Args, Clone)]
pub struct AddArgs {
    /// Ticker symbol, e.g. AAPL
    pub ticker: String,

    /// Number of shares
    #[arg(value_parser = crate::cli::parse_positive)]
    pub quantity: f64,

    /// Purchase price per share
    #[arg(value_parser = crate::cli::parse_positive)]
    pub price: f64,
}

pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, data_paths: DataPaths) -> Result<()> {
        if self.args.ticker.trim().is_empty() {
            return Err(anyhow!("Ticker must not be empty"));
        }

        let store = HoldingStore::new(data_paths.holdings_file());
        let holding = store.add(NewHolding {
            ticker: self.args.ticker.clone(),
            quantity: self.args.quantity,
            purchase_price: self.args.price,
        })?;

        println!(
            "Added {} x {} at {} {}",
            format!("{}", holding.quantity).bright_white(),
            holding.ticker.bright_cyan(),
            format_currency(holding.purchase_price).bright_yellow(),
            format!("(id {})", holding.id).bright_black()
        );
        Ok(())
    }
}
