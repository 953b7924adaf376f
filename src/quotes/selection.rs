//! Random quote selection.
//!
//! Each draw is uniform over the catalog's ids and independent of the previous
//! one; showing the same quote twice in a row is allowed.

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::Catalog;
use super::types::QuoteId;

/// Draw with the thread-local RNG. `None` only if the catalog is empty.
pub fn pick_random(catalog: &Catalog) -> Option<QuoteId> {
    pick_random_with(catalog, &mut rand::thread_rng())
}

pub fn pick_random_with<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<QuoteId> {
    let picked = catalog.ids().choose(rng).copied();
    if picked.is_none() {
        tracing::warn!("no quotes available to select from");
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn empty_catalog_yields_none() {
        let catalog = Catalog::from_records(std::iter::empty());
        assert_eq!(pick_random(&catalog), None);
    }

    #[test]
    fn every_pick_is_in_catalog() {
        let catalog = Catalog::builtin();
        for _ in 0..1000 {
            let id = pick_random(&catalog).unwrap();
            assert!(catalog.contains(id));
        }
    }

    #[test]
    fn seeded_draws_cover_the_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<QuoteId, usize> = HashMap::new();
        for _ in 0..5000 {
            *counts
                .entry(pick_random_with(&catalog, &mut rng).unwrap())
                .or_default() += 1;
        }
        assert_eq!(counts.len(), catalog.len());
        // Roughly uniform: each of 10 ids expected ~500 times.
        for count in counts.values() {
            assert!((350..650).contains(count), "count {count} far from uniform");
        }
    }
}
