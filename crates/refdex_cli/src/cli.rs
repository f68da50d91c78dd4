//! CLI argument surface.
//!
//! # Responsibility
//! - Define the `refdex` command tree and its flags.
//! - Keep parsing declarative; command behavior lives in `commands`.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "refdex", version, about = "Rebuild and inspect the research index")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file to use instead of ~/.config/refdex/config.toml"
    )]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the markdown index file from the research store.
    Rebuild {
        #[arg(
            short = 'f',
            long,
            value_name = "PATH",
            help = "Write the index here instead of {research_root}/_INDEX.md"
        )]
        out_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Report item and tag counts for the research store.
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}
