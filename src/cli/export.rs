use anyhow::Result;
use serde::Serialize;

use daily_inspiration::config::InspireConfig;
use daily_inspiration::quotes::{Catalog, QuoteId, QuoteRecord};

#[derive(Debug, Serialize)]
struct ExportEntry<'a> {
    id: QuoteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<&'a QuoteRecord>,
}

/// Export format — both lists with their quotes resolved.
#[derive(Debug, Serialize)]
struct ExportData<'a> {
    history: Vec<ExportEntry<'a>>,
    favorites: Vec<ExportEntry<'a>>,
}

fn entries<'a>(ids: &[QuoteId], catalog: &'a Catalog) -> Vec<ExportEntry<'a>> {
    ids.iter()
        .map(|&id| ExportEntry {
            id,
            quote: catalog.get(id),
        })
        .collect()
}

/// Export history and favorites as JSON to stdout.
pub fn export(config: &InspireConfig) -> Result<()> {
    let book = super::open_book(config)?;

    let data = ExportData {
        history: entries(&book.history().current(), book.catalog()),
        favorites: entries(&book.favorites().all(), book.catalog()),
    };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} history entries and {} favorites.",
        data.history.len(),
        data.favorites.len()
    );

    Ok(())
}
