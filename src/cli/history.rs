//! CLI `history` commands — list or clear previously shown quotes.

use anyhow::{bail, Result};

use daily_inspiration::config::InspireConfig;

/// List history, most recent first. Ids the catalog no longer has are skipped.
pub fn list(config: &InspireConfig) -> Result<()> {
    let book = super::open_book(config)?;
    let ids = book.history().current();

    if ids.is_empty() {
        println!("No previously seen inspirations yet.");
        return Ok(());
    }

    println!("History (most recent first)");
    println!("{}", "=".repeat(40));
    for (n, (id, _)) in book.catalog().resolve(&ids).into_iter().enumerate() {
        super::print_entry(&(n + 1).to_string(), id, book.catalog());
    }

    Ok(())
}

pub fn clear(config: &InspireConfig, yes: bool) -> Result<()> {
    if !yes && !super::confirm("This will permanently forget every previously shown quote.")? {
        bail!("clear cancelled");
    }

    let book = super::open_book(config)?;
    book.history().clear()?;
    println!("History cleared.");
    Ok(())
}
