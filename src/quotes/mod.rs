//! Quote engine: catalog, persisted lists, selection, and the screen session.

pub mod book;
pub mod catalog;
pub mod codec;
pub mod favorites;
pub mod history;
pub mod list;
pub mod selection;
pub mod session;
pub mod types;

pub use book::QuoteBook;
pub use catalog::Catalog;
pub use favorites::FavoritesSet;
pub use history::HistoryLog;
pub use list::PersistentList;
pub use selection::pick_random;
pub use session::{InspirationSession, SaveOutcome};
pub use types::{QuoteId, QuoteRecord};
