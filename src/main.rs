use anyhow::Result;
use clap::Parser;

mod cli;
mod data_paths;
mod logging;
mod portfolio;
mod quotes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (ALPHA_VANTAGE_API_KEY may live in .env)
    dotenvy::dotenv().ok();

    // Parse CLI and execute (CLI handles logging initialization)
    let cli = cli::Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Application error: {}", e);

            // Log error chain if available
            for cause in e.chain().skip(1) {
                tracing::error!("   Caused by: {}", cause);
            }

            Err(e)
        }
    }
}
