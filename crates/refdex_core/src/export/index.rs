//! Markdown index renderer.
//!
//! # Responsibility
//! - Render the research index document: top heading, `Papers` section,
//!   `Blog Posts` section.
//! - Format one index line per item.
//!
//! # Invariants
//! - Section order and item order come straight from the repository; nothing
//!   is re-sorted here.
//! - Any repository error aborts the render; a partial document is never
//!   returned.

use crate::model::item::{ItemRecord, ItemType};
use crate::repo::item_repo::{ItemRepository, RepoResult};
use chrono::{DateTime, Datelike};
use log::info;
use std::time::Instant;

/// Renders the full markdown index document.
///
/// The document lists papers first, then blog posts, each section in the
/// repository's newest-first order with per-item tags fetched on the fly.
pub fn render_index<R: ItemRepository>(repo: &R) -> RepoResult<String> {
    let started_at = Instant::now();
    let mut doc = String::from("# Research Index\n\n");

    let papers = push_section(&mut doc, repo, "## Papers", ItemType::Paper)?;
    let articles = push_section(&mut doc, repo, "## Blog Posts", ItemType::Article)?;

    info!(
        "event=index_render module=export status=ok papers={} articles={} duration_ms={}",
        papers,
        articles,
        started_at.elapsed().as_millis()
    );
    Ok(doc)
}

fn push_section<R: ItemRepository>(
    doc: &mut String,
    repo: &R,
    heading: &str,
    kind: ItemType,
) -> RepoResult<usize> {
    doc.push_str(heading);
    doc.push('\n');

    let items = repo.list_items(kind)?;
    for item in &items {
        let tags = repo.tags_for_item(&item.slug)?;
        doc.push_str(&format_line(item, &tags));
    }
    doc.push('\n');

    Ok(items.len())
}

/// Formats one index line: `- [title](slug.md) - authors (year) [tags]`.
pub fn format_line(item: &ItemRecord, tags: &[String]) -> String {
    format!(
        "- [{}]({}.md) - {} ({}) [{}]\n",
        item.title,
        item.slug,
        author_display(&item.authors),
        year_from(item.effective_date.as_deref().unwrap_or_default()),
        tags.join(", ")
    )
}

/// Collapses an author list to its display form.
///
/// Zero authors display as nothing, one author verbatim, two or more as
/// `<first> et al.`.
pub fn author_display(authors: &[String]) -> String {
    match authors {
        [] => String::new(),
        [only] => only.clone(),
        [first, ..] => format!("{first} et al."),
    }
}

/// Extracts a display year from a stored date string.
///
/// Uses the first four bytes when they form a valid string prefix, falls
/// back to a full RFC 3339 parse, and yields an empty string when neither
/// applies.
pub fn year_from(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    if let Some(prefix) = date.get(..4) {
        return prefix.to_string();
    }
    DateTime::parse_from_rfc3339(date)
        .map(|parsed| parsed.year().to_string())
        .unwrap_or_default()
}
