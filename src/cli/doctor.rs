//! CLI `doctor` command — run database diagnostics and print a health report.

use anyhow::{Context, Result};
use std::sync::Arc;

use daily_inspiration::config::InspireConfig;
use daily_inspiration::db;
use daily_inspiration::diagnostics::RecordingDiagnostics;
use daily_inspiration::storage::{KeyValueStore, SqliteStore};

/// Run database diagnostics and print a health report.
pub fn doctor(config: &InspireConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `inspire show` to initialize.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let store = Arc::new(
        SqliteStore::open(&db_path).context("failed to open database (may be corrupt)")?,
    );
    let report = store
        .with_connection(db::check_database_health)
        .context("failed to run health check")?;

    println!("Inspire Health Report");
    println!("=====================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!("Stored keys:       {}", report.key_count);
    println!();

    let recorder = Arc::new(RecordingDiagnostics::new());
    let book = super::book_over(config, store.clone(), recorder.clone());
    for list in [book.history().list(), book.favorites().list()] {
        let key = list.key();
        println!("{key}:");

        // Read failures are printed here and also land in the recorder via load().
        match store.get(key) {
            Ok(None) => println!("  Blob:            (not written yet)"),
            Ok(Some(blob)) => println!("  Blob:            {}", format_bytes(blob.len() as u64)),
            Err(e) => println!("  Blob:            unreadable ({e})"),
        }
        println!("  Entries:         {}", list.load().len());
        match store.updated_at(key) {
            Ok(Some(ts)) => println!("  Last written:    {ts}"),
            Ok(None) => {}
            Err(e) => println!("  Last written:    unreadable ({e})"),
        }
    }
    println!();

    let faults = recorder.faults();
    if faults.is_empty() {
        println!("Stored lists:      OK");
    } else {
        println!("Stored lists:      {} problem(s), read as empty", faults.len());
        for fault in &faults {
            println!("  - {fault}");
        }
    }

    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery steps:");
        println!("  1. Save what is still readable: inspire export > backup.json");
        println!("  2. Start over: inspire reset");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
