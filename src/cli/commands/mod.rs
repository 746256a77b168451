//! CLI command implementations
//!
//! Each command follows a consistent pattern with dedicated Args and
//! Command structs.

pub mod add;
pub mod clear;
pub mod list;
pub mod refresh;
pub mod remove;
pub mod search;
pub mod version;
