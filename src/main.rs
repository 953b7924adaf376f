mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_inspiration::config::InspireConfig;
use daily_inspiration::quotes::QuoteId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inspire", version, about = "A daily inspirational quote, with history and favorites")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random quote and record it in the history
    Show {
        /// Also save the quote to favorites
        #[arg(long)]
        save: bool,
    },
    /// List every quote in the catalog
    Catalog,
    /// List previously shown quotes, most recent first
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// List saved quotes
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Print history and favorites as JSON
    Export,
    /// Check the database and the stored lists
    Doctor,
    /// Delete history and favorites
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Forget every previously shown quote
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Save a quote by catalog id
    Add { id: QuoteId },
    /// Remove favorites by their listed number (1-based)
    Remove {
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = InspireConfig::load()?;

    // Log to stderr so stdout only carries command output.
    let filter = EnvFilter::try_new(&config.log.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Show { save } => cli::show::show(&config, save)?,
        Command::Catalog => cli::catalog::catalog()?,
        Command::History { action } => match action {
            None => cli::history::list(&config)?,
            Some(HistoryAction::Clear { yes }) => cli::history::clear(&config, yes)?,
        },
        Command::Favorites { action } => match action {
            None => cli::favorites::list(&config)?,
            Some(FavoritesAction::Add { id }) => cli::favorites::add(&config, id)?,
            Some(FavoritesAction::Remove { positions }) => {
                cli::favorites::remove(&config, &positions)?
            }
        },
        Command::Export => cli::export::export(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
        Command::Reset { yes } => cli::reset::reset(&config, yes)?,
    }

    Ok(())
}
