//! Research item read model.
//!
//! # Responsibility
//! - Define the item categories and the per-item projection used by the
//!   markdown renderer.
//! - Decode stored author lists leniently.
//!
//! # Invariants
//! - `ItemType` database strings match the store's `items.type` values
//!   exactly.
//! - Malformed stored author JSON degrades to an empty author list.

/// Research item category as recorded in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Academic paper.
    Paper,
    /// Blog post or long-form article.
    Article,
}

impl ItemType {
    /// Returns the `items.type` column value for this category.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Article => "article",
        }
    }
}

/// One research item row as consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Stable unique slug; also names the per-item markdown file.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
    /// Ordered author names decoded from `authors_json`.
    pub authors: Vec<String>,
    /// Publication date when recorded, creation timestamp otherwise.
    pub effective_date: Option<String>,
}

/// Decodes a stored author list.
///
/// The store keeps authors as a JSON string array. Input that does not
/// decode as one (including non-array JSON) yields an empty list rather
/// than an error.
pub fn parse_authors(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
