//! CLI module
//!
//! Command-line interface for running an export.
//!
//! # Usage
//!
//! ```text
//! school-geojson --csv Query_Results_ghana.csv --threshold 0.9 --country ghana
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;

#[cfg(test)]
mod tests;
