//! CLI `favorites` commands — list, add, and remove saved quotes.

use anyhow::{bail, ensure, Result};
use std::collections::BTreeSet;

use daily_inspiration::config::InspireConfig;
use daily_inspiration::quotes::QuoteId;

pub fn list(config: &InspireConfig) -> Result<()> {
    let book = super::open_book(config)?;
    let ids = book.favorites().all();

    if ids.is_empty() {
        println!("No Favorites yet.");
        return Ok(());
    }

    println!("Favorites");
    println!("{}", "=".repeat(40));
    for (n, id) in ids.into_iter().enumerate() {
        super::print_entry(&(n + 1).to_string(), id, book.catalog());
    }

    Ok(())
}

pub fn add(config: &InspireConfig, id: QuoteId) -> Result<()> {
    let book = super::open_book(config)?;
    ensure!(book.catalog().contains(id), "no quote with id {id}");

    if book.favorites().add(id)? {
        println!("Saved quote {id} to favorites.");
    } else {
        println!("Quote {id} is already a favorite.");
    }
    Ok(())
}

/// Remove by the 1-based numbers shown in `favorites` output.
pub fn remove(config: &InspireConfig, numbers: &[usize]) -> Result<()> {
    let mut positions = BTreeSet::new();
    for &n in numbers {
        let Some(pos) = n.checked_sub(1) else {
            bail!("favorite numbers start at 1");
        };
        positions.insert(pos);
    }

    let book = super::open_book(config)?;
    let removed = book.favorites().remove_at(&positions)?;
    println!("Removed {removed} favorite(s).");
    if removed < positions.len() {
        println!("{} number(s) did not match a favorite.", positions.len() - removed);
    }
    Ok(())
}
