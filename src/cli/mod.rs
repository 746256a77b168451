//! CLI module for stockfolio
//!
//! Argument parsing with clap and a structured command pattern: each
//! subcommand owns an Args struct and a Command struct with an execute
//! method.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod args;
pub mod commands;

pub use args::parse_positive;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LoggingConfig};

use commands::add::{AddArgs, AddCommand};
use commands::clear::{ClearArgs, ClearCommand};
use commands::list::{ListArgs, ListCommand};
use commands::refresh::{RefreshArgs, RefreshCommand};
use commands::remove::{RemoveArgs, RemoveCommand};
use commands::search::{SearchArgs, SearchCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "stockfolio")]
#[command(version)]
#[command(about = "Personal stock portfolio tracker with live quotes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Alpha Vantage API key (falls back to ALPHA_VANTAGE_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a holding to the portfolio
    Add(AddArgs),

    /// Remove a holding by id
    Remove(RemoveArgs),

    /// List holdings without fetching quotes
    List(ListArgs),

    /// Fetch live quotes and show P&L and allocation
    Refresh(RefreshArgs),

    /// Search for ticker symbols by keyword
    Search(SearchArgs),

    /// Remove every holding
    Clear(ClearArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Resolve the quote API key from the flag or the environment
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("ALPHA_VANTAGE_API_KEY").map_err(|_| {
            anyhow::anyhow!(
                "No API key configured. Pass --api-key or set ALPHA_VANTAGE_API_KEY"
            )
        })
    }

    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose))?;

        let api_key = self.resolve_api_key();

        match self.command {
            Commands::Add(args) => AddCommand::new(args).execute(data_paths),
            Commands::Remove(args) => RemoveCommand::new(args).execute(data_paths),
            Commands::List(args) => ListCommand::new(args).execute(data_paths),
            Commands::Refresh(args) => RefreshCommand::new(args).execute(api_key?, data_paths).await,
            Commands::Search(args) => SearchCommand::new(args).execute(api_key?, data_paths).await,
            Commands::Clear(args) => ClearCommand::new(args).execute(data_paths),
            Commands::Version(args) => VersionCommand::new(args).execute(data_paths),
        }
    }
}
