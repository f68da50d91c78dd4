//! Item/tag repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide ordered item reads, per-item tag reads, and count queries over
//!   the `items`/`tags`/`item_tags` schema.
//! - Validate the externally-owned schema before any query runs.
//!
//! # Invariants
//! - Item listing order is `COALESCE(date_published, created_at) DESC,
//!   slug ASC`; nothing downstream re-sorts.
//! - Tag names for one item come back sorted ascending.
//! - All APIs are read-only.

use crate::db::DbError;
use crate::model::item::{parse_authors, ItemRecord, ItemType};
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for research store access.
#[derive(Debug)]
pub enum RepoError {
    /// Connection-level database failure.
    Db(DbError),
    /// Required table is missing from the store.
    MissingRequiredTable(&'static str),
    /// Required column is missing from an expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "research store is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(
                    f,
                    "research store table `{table}` is missing required column `{column}`"
                )
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read-only repository contract over the research store.
pub trait ItemRepository {
    /// Lists items of one category, newest effective date first, slug
    /// ascending as tie-break.
    fn list_items(&self, kind: ItemType) -> RepoResult<Vec<ItemRecord>>;
    /// Returns tag names linked to one item slug, sorted ascending.
    fn tags_for_item(&self, slug: &str) -> RepoResult<Vec<String>>;
    /// Counts items, optionally restricted to one category.
    fn count_items(&self, kind: Option<ItemType>) -> RepoResult<i64>;
    /// Counts all known tags.
    fn count_tags(&self) -> RepoResult<i64>;
}

/// SQLite-backed research item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository after validating the store schema.
    ///
    /// # Errors
    /// - [`RepoError::MissingRequiredTable`] / [`RepoError::MissingRequiredColumn`]
    ///   when the connection does not look like a research store.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_item_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn list_items(&self, kind: ItemType) -> RepoResult<Vec<ItemRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                slug,
                title,
                authors_json,
                COALESCE(date_published, created_at) AS effective_date
             FROM items
             WHERE type = ?1
             ORDER BY COALESCE(date_published, created_at) DESC, slug ASC;",
        )?;

        let mut rows = stmt.query([kind.as_db_str()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn tags_for_item(&self, slug: &str) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name
             FROM tags t
             INNER JOIN item_tags it ON it.tag_id = t.id
             INNER JOIN items i ON i.id = it.item_id
             WHERE i.slug = ?1
             ORDER BY t.name ASC;",
        )?;

        let mut rows = stmt.query([slug])?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            let value: String = row.get(0)?;
            tags.push(value);
        }

        Ok(tags)
    }

    fn count_items(&self, kind: Option<ItemType>) -> RepoResult<i64> {
        let count = match kind {
            Some(kind) => self.conn.query_row(
                "SELECT COUNT(*) FROM items WHERE type = ?1;",
                [kind.as_db_str()],
                |row| row.get(0),
            )?,
            None => {
                self.conn
                    .query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?
            }
        };

        Ok(count)
    }

    fn count_tags(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM tags;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<ItemRecord> {
    let authors_json: String = row.get("authors_json")?;
    Ok(ItemRecord {
        slug: row.get("slug")?,
        title: row.get("title")?,
        authors: parse_authors(&authors_json),
        effective_date: row.get("effective_date")?,
    })
}

fn ensure_item_connection_ready(conn: &Connection) -> RepoResult<()> {
    for table in ["items", "tags", "item_tags"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for column in [
        "id",
        "slug",
        "title",
        "authors_json",
        "type",
        "date_published",
        "created_at",
    ] {
        if !table_has_column(conn, "items", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "items",
                column,
            });
        }
    }

    for column in ["id", "name"] {
        if !table_has_column(conn, "tags", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "tags",
                column,
            });
        }
    }

    for column in ["item_id", "tag_id"] {
        if !table_has_column(conn, "item_tags", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "item_tags",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
