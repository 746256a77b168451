pub mod cli;
pub mod data_paths;
pub mod logging;
pub mod portfolio;
pub mod quotes;
