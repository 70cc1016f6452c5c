//! Pearson similarity between two users' rating vectors.
//!
//! Similarity is a pure function of the current rating set: pair up the
//! scores both users gave the items they share, then correlate the two
//! series. Two deliberate policy points, both inherited from the reference
//! system, keep the result total over arbitrary data:
//!
//! - no shared items means zero correlation, never NaN;
//! - a series with zero variance (a user who gave every co-rated item the
//!   same score) also yields zero, since the correlation is undefined and
//!   "no signal" is the safe reading for downstream ranking.

use std::collections::BTreeMap;

use taste_core::{RatingStore, Score, UserId};
use thiserror::Error;

/// Errors returned by [`similarity`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// The store does not know the given user.
    #[error("unknown user {user}")]
    UnknownUser {
        /// Identifier that failed to resolve.
        user: UserId,
    },
}

/// Pair up two score series by their shared keys.
///
/// Each key present in both series contributes exactly one `(a, b)` pair;
/// keys present in only one series are dropped. Generic over the key axis,
/// so the same pairing serves user-based filtering (keys are items) and
/// item-based filtering (keys are users).
#[must_use]
pub fn paired_scores<K, A, B>(a: A, b: B) -> Vec<(Score, Score)>
where
    K: Ord,
    A: IntoIterator<Item = (K, Score)>,
    B: IntoIterator<Item = (K, Score)>,
{
    let a_by_key: BTreeMap<K, Score> = a.into_iter().collect();
    b.into_iter()
        .filter_map(|(key, score_b)| a_by_key.get(&key).map(|&score_a| (score_a, score_b)))
        .collect()
}

/// Pearson product-moment correlation over paired scores.
///
/// Returns a value in `-1.0..=1.0`. An empty pairing and a zero-variance
/// series both yield `0.0` exactly; the quotient is clamped to absorb
/// floating-point overshoot at the boundaries.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "correlation is inherently floating-point; pair counts stay far below 2^52"
)]
pub fn pearson(pairs: &[(Score, Score)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut sum_xy = 0.0_f64;
    let mut sum_x2 = 0.0_f64;
    let mut sum_y2 = 0.0_f64;
    for &(x, y) in pairs {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    // One factor per series; either hitting zero means that series has no
    // variance and the correlation is undefined.
    let radicand = (n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y);
    if radicand <= 0.0 {
        return 0.0;
    }

    let correlation = numerator / radicand.sqrt();
    if !correlation.is_finite() {
        return 0.0;
    }
    correlation.clamp(-1.0, 1.0)
}

/// Pearson similarity between two users, from their co-rated items.
///
/// Symmetric: `similarity(s, a, b) == similarity(s, b, a)`. Users sharing
/// no rated items have similarity `0.0`.
///
/// # Errors
/// Returns [`SimilarityError::UnknownUser`] when either identifier is not
/// present in the store.
pub fn similarity<S>(store: &S, a: UserId, b: UserId) -> Result<f64, SimilarityError>
where
    S: RatingStore + ?Sized,
{
    let ratings_a = store
        .ratings_of(a)
        .ok_or(SimilarityError::UnknownUser { user: a })?;
    let ratings_b = store
        .ratings_of(b)
        .ok_or(SimilarityError::UnknownUser { user: b })?;
    Ok(pearson(&paired_scores(ratings_a, ratings_b)))
}
