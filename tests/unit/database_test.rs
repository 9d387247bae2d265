//! Unit tests for the SQLite layer backing the emulated hosted table.

use linkbox::database::{migrations, Database};

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
    assert!(exists, "bookmarks table should exist after migrations");
}

#[test]
fn test_migrations_create_owner_index() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name='idx_bookmarks_owner_created'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "owner/created index should exist after migrations");
}

#[test]
fn test_schema_version_is_recorded() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let version = migrations::get_schema_version(db.connection());
    assert_eq!(version, migrations::CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    // Running the full set again must not fail or re-apply anything.
    migrations::run_all(db.connection()).expect("second run should be a no-op");
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
