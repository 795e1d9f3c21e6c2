//! Unit tests for the bookmarkd database layer (connection + migrations).

use bookmarkd::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use bookmarkd::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_bookmarks_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='bookmarks'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "Table 'bookmarks' should exist after migrations");
}

#[test]
fn test_migrations_create_name_index() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name='idx_bookmarks_name'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "Index 'idx_bookmarks_name' should exist after migrations");
}

#[test]
fn test_migrations_record_schema_version() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    // Running migrations a second time should not fail
    let result = bookmarkd::database::migrations::run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed (idempotent)");
}

#[test]
fn test_open_file_database() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let db_path = dir.path().join("test.db");

    let db = Database::open(&db_path);
    assert!(db.is_ok(), "open with file path should succeed");

    // Verify the file was created
    assert!(db_path.exists(), "Database file should exist on disk");
}

#[test]
fn test_bookmarks_table_schema() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    // Insert a bookmark row to verify the schema is correct
    conn.execute(
        "INSERT INTO bookmarks (id, name, url, tags, created_at, updated_at)
         VALUES (X'0102030405060708090A0B0C', 'Example', 'https://example.com', '[\"web\"]', 1700000000, 1700000000)",
        [],
    )
    .expect("Should be able to insert into bookmarks table");

    let (name, url, tags): (String, String, String) = conn
        .query_row(
            "SELECT name, url, tags FROM bookmarks WHERE id = X'0102030405060708090A0B0C'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("Should be able to query bookmarks");

    assert_eq!(name, "Example");
    assert_eq!(url, "https://example.com");
    assert_eq!(tags, "[\"web\"]");
}

#[test]
fn test_bookmarks_id_is_unique() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT INTO bookmarks (id, name, url, tags, created_at, updated_at)
         VALUES (X'0102030405060708090A0B0C', 'First', 'https://a.example', '[]', 1700000000, 1700000000)",
        [],
    )
    .expect("Should insert first row");

    let result = conn.execute(
        "INSERT INTO bookmarks (id, name, url, tags, created_at, updated_at)
         VALUES (X'0102030405060708090A0B0C', 'Second', 'https://b.example', '[]', 1700000000, 1700000000)",
        [],
    );
    assert!(result.is_err(), "Duplicate id should violate the PRIMARY KEY constraint");
}
