//! Store statistics reporter.
//!
//! # Responsibility
//! - Compute paper/article/total/tag counts over the research store.
//!
//! # Invariants
//! - Reporting is best-effort: a failed count degrades to zero and is
//!   logged, never propagated.

use crate::model::item::ItemType;
use crate::repo::item_repo::{ItemRepository, RepoResult};
use log::warn;
use serde::Serialize;

/// Item and tag counts for the research store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Items stored with type `paper`.
    pub papers: i64,
    /// Items stored with type `article`.
    pub articles: i64,
    /// All items regardless of type.
    pub total: i64,
    /// All known tags.
    pub tags: i64,
}

/// Collects store statistics, degrading failed counts to zero.
///
/// Each count runs as an independent query; one failure never poisons the
/// others.
pub fn collect_stats<R: ItemRepository>(repo: &R) -> IndexStats {
    IndexStats {
        papers: count_or_zero("papers", repo.count_items(Some(ItemType::Paper))),
        articles: count_or_zero("articles", repo.count_items(Some(ItemType::Article))),
        total: count_or_zero("total", repo.count_items(None)),
        tags: count_or_zero("tags", repo.count_tags()),
    }
}

fn count_or_zero(field: &str, outcome: RepoResult<i64>) -> i64 {
    match outcome {
        Ok(count) => count,
        Err(err) => {
            warn!("event=stats_count module=stats status=error field={field} error={err}");
            0
        }
    }
}
