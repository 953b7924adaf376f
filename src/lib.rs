//! Daily inspirational quotes with a persistent history and favorites.
//!
//! A fixed catalog of quotes is shown one random pick at a time. Every displayed
//! quote is recorded in a most-recent-first, duplicate-free history; the user can
//! save quotes to an ordered favorites list and remove them again by position.
//!
//! Both lists are stored as JSON arrays of quote ids under two keys of a
//! key-value store:
//!
//! | Key | Content |
//! |-----|---------|
//! | `seenQuoteHistory` | History, most recent first, no duplicates |
//! | `favoriteQuoteIDs` | Favorites, in the order they were saved |
//!
//! A missing or malformed blob reads as the empty list. Such faults are never
//! surfaced to the caller; they go to an injected [`diagnostics::Diagnostics`]
//! sink instead.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite initialization, schema, migrations, and health checks
//! - [`diagnostics`] — Reporting of faults the list store recovers from
//! - [`error`] — Storage and codec error types
//! - [`quotes`] — Catalog, history log, favorites set, selection, and sessions
//! - [`storage`] — The key-value store trait with SQLite and in-memory backends

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod error;
pub mod quotes;
pub mod storage;
