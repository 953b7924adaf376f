pub mod catalog;
pub mod doctor;
pub mod export;
pub mod favorites;
pub mod history;
pub mod reset;
pub mod show;

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use daily_inspiration::config::InspireConfig;
use daily_inspiration::diagnostics::{Diagnostics, TracingDiagnostics};
use daily_inspiration::quotes::{Catalog, QuoteBook, QuoteId};
use daily_inspiration::storage::SqliteStore;

/// Open the configured database and wire a [`QuoteBook`] over it.
pub fn open_book(config: &InspireConfig) -> Result<QuoteBook> {
    let store = Arc::new(SqliteStore::open(config.resolved_db_path())?);
    Ok(book_over(config, store, Arc::new(TracingDiagnostics)))
}

/// Wire a [`QuoteBook`] over an already opened store.
pub fn book_over(
    config: &InspireConfig,
    store: Arc<SqliteStore>,
    diagnostics: Arc<dyn Diagnostics>,
) -> QuoteBook {
    QuoteBook::new(
        Catalog::builtin(),
        store,
        diagnostics,
        config.history.max_entries,
    )
}

/// Ask for `YES` on stdin. Returns `true` only on an exact match.
pub fn confirm(warning: &str) -> Result<bool> {
    println!("{warning}");
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "YES")
}

/// Print one quote as a list entry, or a placeholder if the id is unknown.
pub fn print_entry(label: &str, id: QuoteId, catalog: &Catalog) {
    match catalog.get(id) {
        Some(record) => {
            println!("{label:>4}  \u{201c}{}\u{201d}", record.quote);
            println!("      \u{2014} {}", record.author);
        }
        None => println!("{label:>4}  Quote not found. (id {id})"),
    }
}
