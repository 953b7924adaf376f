//! CLI `show` command — draw a quote, record it, optionally save it.

use anyhow::Result;

use daily_inspiration::config::InspireConfig;
use daily_inspiration::quotes::SaveOutcome;

pub fn show(config: &InspireConfig, save: bool) -> Result<()> {
    let book = super::open_book(config)?;
    let mut session = book.session();
    session.appear()?;

    let Some((id, record)) = session.current() else {
        println!("No quotes available.");
        return Ok(());
    };

    println!();
    println!("{record}");
    println!();

    if save {
        match session.save_current()? {
            SaveOutcome::Saved(_) => println!("Saved to favorites (#{id})."),
            SaveOutcome::AlreadySaved(_) => println!("Already in favorites (#{id})."),
            SaveOutcome::NothingSelected => {}
        }
    }

    Ok(())
}
