//! `refdex stats` command.
//!
//! # Responsibility
//! - Report item and tag counts for the research store.
//!
//! # Invariants
//! - The report never aborts on store trouble: an unopenable or invalid
//!   store degrades to all-zero counts, matching the per-count fallback
//!   inside `collect_stats`.

use crate::config::Config;
use crate::output::{emit, OutputFormat};
use anyhow::Result;
use log::warn;
use refdex_core::db::open_db;
use refdex_core::{collect_stats, IndexStats, SqliteItemRepository};

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let stats = load_stats(config);
    emit(format, &stats, render_table)
}

fn load_stats(config: &Config) -> IndexStats {
    let db_path = config.db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=stats_degraded module=cli status=error stage=open error={err}");
            return IndexStats::default();
        }
    };

    match SqliteItemRepository::try_new(&conn) {
        Ok(repo) => collect_stats(&repo),
        Err(err) => {
            warn!("event=stats_degraded module=cli status=error stage=schema error={err}");
            IndexStats::default()
        }
    }
}

fn render_table(stats: &IndexStats) -> String {
    format!(
        "Papers:   {}\nArticles: {}\nTotal:    {}\nTags:     {}",
        stats.papers, stats.articles, stats.total, stats.tags
    )
}
