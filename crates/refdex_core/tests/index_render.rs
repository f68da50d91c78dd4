mod common;

use common::{create_research_schema, insert_item, tag_item};
use refdex_core::db::open_db_in_memory;
use refdex_core::{render_index, SqliteItemRepository};
use rusqlite::Connection;

fn seeded_store() -> Connection {
    let conn = open_db_in_memory().unwrap();
    create_research_schema(&conn);
    conn
}

#[test]
fn empty_store_renders_empty_sections() {
    let conn = seeded_store();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let doc = render_index(&repo).unwrap();
    assert_eq!(doc, "# Research Index\n\n## Papers\n\n## Blog Posts\n\n");
}

#[test]
fn single_paper_renders_expected_document() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "p1",
        "T",
        r#"["X"]"#,
        "paper",
        Some("2022-01-01"),
        "2022-01-01",
    );
    tag_item(&conn, "p1", "ml");

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert_eq!(
        doc,
        "# Research Index\n\n## Papers\n- [T](p1.md) - X (2022) [ml]\n\n## Blog Posts\n\n"
    );
}

#[test]
fn papers_and_articles_land_in_their_sections_newest_first() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "alpha",
        "Alpha",
        r#"["A"]"#,
        "paper",
        Some("2024-02-01"),
        "2024-01-01",
    );
    insert_item(
        &conn,
        "beta",
        "Beta",
        r#"["B"]"#,
        "paper",
        Some("2021-07-09"),
        "2021-01-01",
    );
    insert_item(
        &conn,
        "gamma",
        "Gamma",
        r#"["G"]"#,
        "article",
        Some("2023-03-03"),
        "2023-01-01",
    );
    insert_item(
        &conn,
        "delta",
        "Delta",
        r#"["D"]"#,
        "article",
        Some("2022-01-01"),
        "2022-01-01",
    );
    tag_item(&conn, "alpha", "ml");
    tag_item(&conn, "gamma", "rust");

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert_eq!(
        doc,
        "# Research Index\n\n\
         ## Papers\n\
         - [Alpha](alpha.md) - A (2024) [ml]\n\
         - [Beta](beta.md) - B (2021) []\n\n\
         ## Blog Posts\n\
         - [Gamma](gamma.md) - G (2023) [rust]\n\
         - [Delta](delta.md) - D (2022) []\n\n"
    );
}

#[test]
fn tags_render_alphabetically_regardless_of_link_order() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "p1",
        "T",
        "[]",
        "paper",
        Some("2022-01-01"),
        "2022-01-01",
    );
    tag_item(&conn, "p1", "zettel");
    tag_item(&conn, "p1", "agents");

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert!(doc.contains("[agents, zettel]"));
}

#[test]
fn multi_author_items_render_first_author_et_al() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "p1",
        "T",
        r#"["Ada","Alan","Grace"]"#,
        "paper",
        Some("2022-01-01"),
        "2022-01-01",
    );

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert!(doc.contains("- [T](p1.md) - Ada et al. (2022) []"));
}

#[test]
fn malformed_author_json_renders_empty_author_display() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "p1",
        "T",
        "{oops",
        "paper",
        Some("2022-01-01"),
        "2022-01-01",
    );

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert!(doc.contains("- [T](p1.md) -  (2022) []"));
}

#[test]
fn untyped_items_are_excluded_from_both_sections() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "d1",
        "Dataset",
        "[]",
        "dataset",
        Some("2022-01-01"),
        "2022-01-01",
    );

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let doc = render_index(&repo).unwrap();
    assert_eq!(doc, "# Research Index\n\n## Papers\n\n## Blog Posts\n\n");
}

#[test]
fn render_surfaces_tag_query_failures() {
    let conn = seeded_store();
    insert_item(
        &conn,
        "p1",
        "T",
        "[]",
        "paper",
        Some("2022-01-01"),
        "2022-01-01",
    );

    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    conn.execute_batch("DROP TABLE item_tags;").unwrap();

    assert!(render_index(&repo).is_err());
}
