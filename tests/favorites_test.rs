mod helpers;

use std::collections::BTreeSet;

use helpers::{ids, memory_book, test_book, test_store};
use daily_inspiration::quotes::QuoteId;
use daily_inspiration::storage::{KeyValueStore, FAVORITES_KEY, HISTORY_KEY};

fn positions(raw: &[usize]) -> BTreeSet<usize> {
    raw.iter().copied().collect()
}

#[test]
fn add_and_remove_scenario_on_sqlite() {
    let (book, _) = test_book(test_store());
    let favorites = book.favorites();

    favorites.add(QuoteId(2)).unwrap();
    assert_eq!(favorites.all(), ids(&[2]));
    favorites.add(QuoteId(2)).unwrap();
    assert_eq!(favorites.all(), ids(&[2]));
    favorites.add(QuoteId(5)).unwrap();
    assert_eq!(favorites.all(), ids(&[2, 5]));
    favorites.remove_at(&positions(&[0])).unwrap();
    assert_eq!(favorites.all(), ids(&[5]));
}

#[test]
fn add_is_idempotent() {
    let (book, _, _) = memory_book();
    for id in [9, 1, 9, 9, 1, 4] {
        book.favorites().add(QuoteId(id)).unwrap();
    }
    assert_eq!(book.favorites().all(), ids(&[9, 1, 4]));
}

#[test]
fn batch_removal_uses_snapshot_positions() {
    let (book, _, _) = memory_book();
    for id in 1..=6 {
        book.favorites().add(QuoteId(id)).unwrap();
    }
    // Positions 1 and 2 refer to ids 2 and 3 before anything is removed.
    let removed = book.favorites().remove_at(&positions(&[1, 2, 5])).unwrap();
    assert_eq!(removed, 3);
    assert_eq!(book.favorites().all(), ids(&[1, 4, 5]));
}

#[test]
fn out_of_range_positions_are_ignored() {
    let (book, _, diagnostics) = memory_book();
    book.favorites().add(QuoteId(3)).unwrap();
    let removed = book.favorites().remove_at(&positions(&[1, 7])).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(book.favorites().all(), ids(&[3]));
    assert!(diagnostics.is_empty());
}

#[test]
fn empty_position_set_is_noop_and_all_positions_clear() {
    let (book, _, _) = memory_book();
    for id in [7, 2, 6] {
        book.favorites().add(QuoteId(id)).unwrap();
    }
    book.favorites().remove_at(&BTreeSet::new()).unwrap();
    assert_eq!(book.favorites().all(), ids(&[7, 2, 6]));

    book.favorites().remove_at(&positions(&[0, 1, 2])).unwrap();
    assert!(book.favorites().all().is_empty());
}

#[test]
fn favorites_and_history_use_separate_keys() {
    let store = test_store();
    let (book, _) = test_book(store.clone());
    book.favorites().add(QuoteId(4)).unwrap();
    book.history().record_seen(QuoteId(6)).unwrap();

    assert_eq!(store.get(FAVORITES_KEY).unwrap(), Some(b"[4]".to_vec()));
    assert_eq!(book.history().current(), ids(&[6]));
    assert_eq!(book.favorites().all(), ids(&[4]));
}

#[test]
fn reset_drops_both_stored_lists() {
    let store = test_store();
    let (book, diagnostics) = test_book(store.clone());
    book.favorites().add(QuoteId(4)).unwrap();
    book.history().record_seen(QuoteId(6)).unwrap();

    book.reset().unwrap();

    assert_eq!(store.get(FAVORITES_KEY).unwrap(), None);
    assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
    assert!(book.favorites().all().is_empty());
    assert!(book.history().current().is_empty());
    assert!(diagnostics.faults().is_empty());
}
