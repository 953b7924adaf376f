//! One visit to the inspiration screen.
//!
//! The session owns the transient selection. It is never persisted: a new
//! session starts empty and draws on first display.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::StoreResult;

use super::book::QuoteBook;
use super::selection::pick_random_with;
use super::types::{QuoteId, QuoteRecord};

/// Outcome of [`InspirationSession::save_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(QuoteId),
    AlreadySaved(QuoteId),
    NothingSelected,
}

pub struct InspirationSession<'a, R: Rng = ThreadRng> {
    book: &'a QuoteBook,
    rng: R,
    selected: Option<QuoteId>,
}

impl<'a> InspirationSession<'a, ThreadRng> {
    pub fn new(book: &'a QuoteBook) -> Self {
        Self::with_rng(book, rand::thread_rng())
    }
}

impl<'a, R: Rng> InspirationSession<'a, R> {
    pub fn with_rng(book: &'a QuoteBook, rng: R) -> Self {
        Self {
            book,
            rng,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<QuoteId> {
        self.selected
    }

    /// The selected quote resolved against the catalog.
    pub fn current(&self) -> Option<(QuoteId, &'a QuoteRecord)> {
        let id = self.selected?;
        self.book.catalog().get(id).map(|record| (id, record))
    }

    /// First display: draw and record a quote unless one is already selected.
    pub fn appear(&mut self) -> StoreResult<Option<QuoteId>> {
        if self.selected.is_none() {
            self.draw()?;
        }
        Ok(self.selected)
    }

    /// "Show another": an independent draw, recorded as seen. With an empty
    /// catalog the previous selection (if any) is kept.
    pub fn next(&mut self) -> StoreResult<Option<QuoteId>> {
        self.draw()?;
        Ok(self.selected)
    }

    pub fn save_current(&self) -> StoreResult<SaveOutcome> {
        let Some(id) = self.selected else {
            return Ok(SaveOutcome::NothingSelected);
        };
        if self.book.favorites().add(id)? {
            Ok(SaveOutcome::Saved(id))
        } else {
            Ok(SaveOutcome::AlreadySaved(id))
        }
    }

    fn draw(&mut self) -> StoreResult<()> {
        if let Some(id) = pick_random_with(self.book.catalog(), &mut self.rng) {
            self.book.history().record_seen(id)?;
            self.selected = Some(id);
            tracing::info!(%id, "quote selected");
        }
        Ok(())
    }
}
