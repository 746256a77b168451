use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::quotes::AlphaVantageClient;

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Keywords to search for, e.g. a company name
    pub keywords: String,
}

pub struct SearchCommand {
    args: SearchArgs,
}

impl SearchCommand {
    pub fn new(args: SearchArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_key: String, _data_paths: DataPaths) -> Result<()> {
        let client = AlphaVantageClient::new(api_key)?;
        let matches = client.search(&self.args.keywords).await?;

        if matches.is_empty() {
            println!(
                "{}",
                format!("No symbols found for '{}'", self.args.keywords).bright_black()
            );
            return Ok(());
        }

        for (idx, m) in matches.iter().enumerate() {
            println!(
                "{} {} {} {}",
                format!("{}.", idx + 1).bright_black(),
                m.symbol.bright_cyan(),
                m.name.bright_white(),
                format!("({}, {})", m.region, m.currency).bright_black()
            );
        }
        Ok(())
    }
}
