//! Shared fixtures for tests and benchmarks.
//!
//! Enabled in-crate for unit tests and for dependants via the
//! `test-support` feature.

use crate::{ItemId, RatingTable, UserId};

/// Build a [`RatingTable`] from raw (user, item, score) triples.
///
/// Later triples for the same (user, item) pair replace earlier ones,
/// matching [`RatingTable::insert`] semantics.
///
/// # Panics
/// Panics when a score is non-finite; fixtures are expected to be valid.
#[must_use]
pub fn table(ratings: &[(u64, u64, f64)]) -> RatingTable {
    let mut built = RatingTable::new();
    for &(user, item, score) in ratings {
        built
            .insert_score(UserId::new(user), ItemId::new(item), score)
            .expect("fixture scores must be finite");
    }
    built
}
