//! SQL DDL for the key-value tables.
//!
//! Defines `kv_store` (one row per persisted list) and `schema_meta`. All DDL
//! uses `IF NOT EXISTS` for idempotent initialization. Columns added after the
//! first release are introduced by [`super::migrations`], not here.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Persisted blobs, one per storage key
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
