mod helpers;

use daily_inspiration::db;
use daily_inspiration::quotes::QuoteId;
use daily_inspiration::storage::SqliteStore;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("inspire.db");

    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();
    assert!(db_path.exists());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn health_check_passes_on_fresh_db() {
    let conn = db::open_memory_database().unwrap();
    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::migrations::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.key_count, 0);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let conn = db::open_database(tmp.path().join("test.db")).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}

#[test]
fn lists_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("inspire.db");

    {
        let store = Arc::new(SqliteStore::open(&db_path).unwrap());
        let (book, _) = helpers::test_book(store);
        book.history().record_seen(QuoteId(3)).unwrap();
        book.history().record_seen(QuoteId(7)).unwrap();
        book.favorites().add(QuoteId(7)).unwrap();
    }

    let store = Arc::new(SqliteStore::open(&db_path).unwrap());
    let (book, diagnostics) = helpers::test_book(store);
    assert_eq!(book.history().current(), helpers::ids(&[7, 3]));
    assert_eq!(book.favorites().all(), helpers::ids(&[7]));
    assert!(diagnostics.is_empty());
}
