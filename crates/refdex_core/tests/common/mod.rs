use rusqlite::{params, Connection};

/// Creates the externally-owned research schema on a fresh connection.
///
/// Production stores are created by other tools; tests fabricate the same
/// shape locally.
pub fn create_research_schema(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            slug TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            authors_json TEXT NOT NULL DEFAULT '[]',
            type TEXT NOT NULL,
            date_published TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE TABLE tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        CREATE TABLE item_tags (
            item_id INTEGER NOT NULL REFERENCES items(id),
            tag_id INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (item_id, tag_id)
        );",
    )
    .unwrap();
}

pub fn insert_item(
    conn: &Connection,
    slug: &str,
    title: &str,
    authors_json: &str,
    kind: &str,
    date_published: Option<&str>,
    created_at: &str,
) {
    conn.execute(
        "INSERT INTO items (slug, title, authors_json, type, date_published, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![slug, title, authors_json, kind, date_published, created_at],
    )
    .unwrap();
}

/// Links one tag (created on first use) to an existing item.
pub fn tag_item(conn: &Connection, slug: &str, tag: &str) {
    conn.execute("INSERT OR IGNORE INTO tags (name) VALUES (?1);", [tag])
        .unwrap();
    conn.execute(
        "INSERT INTO item_tags (item_id, tag_id)
         SELECT i.id, t.id
         FROM items i, tags t
         WHERE i.slug = ?1 AND t.name = ?2;",
        params![slug, tag],
    )
    .unwrap();
}
