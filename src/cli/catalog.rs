use anyhow::Result;

use daily_inspiration::quotes::Catalog;

/// List every catalog entry with its id.
pub fn catalog() -> Result<()> {
    let catalog = Catalog::builtin();

    println!("Catalog ({} quotes)", catalog.len());
    println!("{}", "=".repeat(40));
    for (id, _) in catalog.iter() {
        super::print_entry(&id.to_string(), id, &catalog);
    }

    Ok(())
}
