//! `refdex rebuild` command.
//!
//! # Responsibility
//! - Render the markdown index from the store and write it to the resolved
//!   output path.
//!
//! # Invariants
//! - Any store or filesystem failure aborts the command; the index file is
//!   never written from a failed render.

use crate::config::{expand_path, Config};
use crate::output::{emit, OutputFormat};
use anyhow::{Context, Result};
use log::info;
use refdex_core::db::open_db;
use refdex_core::{render_index, SqliteItemRepository};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Structured result reported after a rebuild.
#[derive(Debug, Serialize)]
pub struct RebuildReport {
    /// Where the index was written.
    pub path: String,
    /// Research root the run was configured with.
    pub research: String,
    /// Fixed `rebuilt` marker for scripted consumers.
    pub status: String,
}

pub fn run(config: &Config, out_file: Option<&str>, format: OutputFormat) -> Result<()> {
    let output_path: PathBuf = match out_file {
        Some(raw) => expand_path(raw),
        None => config.default_index_path(),
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }

    let db_path = config.db_path();
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open research database {}", db_path.display()))?;
    let repo =
        SqliteItemRepository::try_new(&conn).context("research store failed schema validation")?;
    let content = render_index(&repo).context("failed to generate index")?;

    fs::write(&output_path, &content)
        .with_context(|| format!("failed to write index file to {}", output_path.display()))?;
    info!(
        "event=rebuild_write module=cli status=ok path={} bytes={}",
        output_path.display(),
        content.len()
    );

    let report = RebuildReport {
        path: output_path.display().to_string(),
        research: config.research_root().display().to_string(),
        status: "rebuilt".to_string(),
    };
    emit(format, &report, |report| {
        format!("Index rebuilt successfully: {}", report.path)
    })
}
