//! refdex binary entry point.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod output;

use cli::{Cli, Commands};
use config::Config;
use refdex_core::{default_log_level, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if let Some(log_dir) = config.log_dir() {
        let level = config.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    match cli.command {
        Commands::Rebuild { out_file, output } => {
            commands::rebuild::run(&config, out_file.as_deref(), output)
        }
        Commands::Stats { output } => commands::stats::run(&config, output),
    }
}
