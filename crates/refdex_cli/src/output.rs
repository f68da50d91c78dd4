//! Output format strategy for command results.
//!
//! # Responsibility
//! - Write one result value to stdout in the selected format.
//!
//! # Invariants
//! - `quiet` writes nothing to stdout.
//! - Structured formats serialize the value as-is; only `table` goes through
//!   the per-command renderer.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// How a command result is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines (default).
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
    /// No stdout output.
    Quiet,
}

/// Writes one result value in the selected format.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    render_table: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(value)?),
        OutputFormat::Quiet => {}
    }
    Ok(())
}
