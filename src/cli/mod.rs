//! Command-line interface for bias-forge.
//!
//! Provides commands for corpus extraction, catalog inspection, and recipe
//! evaluation.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
