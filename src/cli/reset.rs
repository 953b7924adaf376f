//! CLI `reset` command — delete history and favorites after user confirmation.

use anyhow::{bail, Result};

use daily_inspiration::config::InspireConfig;

pub fn reset(config: &InspireConfig, yes: bool) -> Result<()> {
    let warning = format!(
        "WARNING: This will permanently delete your history and favorites.\nDatabase: {}",
        config.resolved_db_path().display()
    );
    if !yes && !super::confirm(&warning)? {
        bail!("reset cancelled");
    }

    let book = super::open_book(config)?;
    book.reset()?;

    println!("History and favorites deleted. Reset complete.");
    Ok(())
}
