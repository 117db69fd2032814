//! SQLite schema creation for the inventory store.

use crate::domain::{UNCATEGORISED_TAG_ID, UNCATEGORISED_TAG_NAME};
use rusqlite::Connection;

/// Current schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema for the inventory store.
///
/// Idempotent: calling it on an existing database changes nothing.
///
/// # Tables Created
/// - `items` - Scalar item columns
/// - `tags` - Tag names
/// - `item_tags` - Many-to-many junction for items and tags
/// - `schema_version` - Schema version tracking
///
/// The junction has foreign keys but no cascades; deletes of items and tags
/// remove their association rows explicitly.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL COLLATE NOCASE,
            description TEXT,
            date_stored TEXT NOT NULL,
            quantity REAL NOT NULL,
            storage_location TEXT NOT NULL,
            item_location TEXT NOT NULL,
            category TEXT
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS item_tags (
            item_id INTEGER NOT NULL REFERENCES items(id),
            tag_id INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (item_id, tag_id)
        );
        CREATE INDEX IF NOT EXISTS idx_item_tags_tag ON item_tags(tag_id);
        CREATE INDEX IF NOT EXISTS idx_items_name ON items(name);",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO tags (id, name) VALUES (?1, ?2)",
        rusqlite::params![UNCATEGORISED_TAG_ID.get(), UNCATEGORISED_TAG_NAME],
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        );",
    )?;
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| {
        row.get(0)
    })?;
    if existing == 0 {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [SCHEMA_VERSION],
        )?;
    }

    Ok(())
}
