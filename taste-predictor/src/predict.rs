//! Neighbour-weighted score prediction.
//!
//! To predict what a user would score an unrated item, gather every other
//! user who rated it, weight each of their scores by Pearson similarity to
//! the target, and aggregate. Aggregation is policy-driven because the
//! reference system combined the weighted sum with the total weight by
//! multiplication where the textbook formula divides; see
//! [`AggregationPolicy`].

use taste_core::{ItemId, RatingStore, Score, UserId};
use thiserror::Error;

use crate::similarity::{SimilarityError, similarity};

/// How neighbour scores and weights are combined into one estimate.
///
/// With `numerator = Σ wᵢ·scoreᵢ` and `denominator = Σ wᵢ` over all
/// neighbours (negative and zero weights included):
///
/// - [`WeightedAverage`](Self::WeightedAverage) computes
///   `numerator / denominator`, the standard collaborative-filtering
///   estimate, and reports [`Prediction::Unavailable`] when the weights sum
///   to zero. This is the default.
/// - [`SimilarityProduct`](Self::SimilarityProduct) computes
///   `numerator × denominator`, reproducing the reference system's literal
///   behaviour. The product has no standard statistical meaning and a
///   zero weight total collapses it to exactly `0.0`; it exists so callers
///   migrating from the original system can match its output bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationPolicy {
    /// Divide the weighted sum by the total weight.
    #[default]
    WeightedAverage,
    /// Multiply the weighted sum by the total weight (legacy behaviour).
    SimilarityProduct,
}

impl AggregationPolicy {
    /// Return the policy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightedAverage => "weighted-average",
            Self::SimilarityProduct => "similarity-product",
        }
    }
}

impl std::fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AggregationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted-average" => Ok(Self::WeightedAverage),
            "similarity-product" => Ok(Self::SimilarityProduct),
            _ => Err(format!("unknown aggregation policy '{s}'")),
        }
    }
}

/// Outcome of a prediction request.
///
/// `Unavailable` is a defined non-error result: the dataset holds no signal
/// for this (user, item) pair. It is distinct from an estimate of `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// A numeric estimate on the dataset's rating scale.
    Estimate(Score),
    /// Insufficient data: nobody else rated the item, or the weights
    /// cancelled under the division policy.
    Unavailable,
}

impl Prediction {
    /// Return the numeric estimate, if one was produced.
    #[must_use]
    pub const fn estimate(self) -> Option<Score> {
        match self {
            Self::Estimate(score) => Some(score),
            Self::Unavailable => None,
        }
    }

    /// Report whether no estimate was produced.
    #[must_use]
    pub const fn is_unavailable(self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Errors returned by [`NeighbourPredictor`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    /// The store does not know the given user.
    #[error("unknown user {user}")]
    UnknownUser {
        /// Identifier that failed to resolve.
        user: UserId,
    },
    /// The store does not know the given item.
    #[error("unknown item {item}")]
    UnknownItem {
        /// Identifier that failed to resolve.
        item: ItemId,
    },
}

impl From<SimilarityError> for PredictError {
    fn from(error: SimilarityError) -> Self {
        match error {
            SimilarityError::UnknownUser { user } => Self::UnknownUser { user },
        }
    }
}

/// Another rater of the target item, weighted by similarity to the target
/// user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// The other rater.
    pub user: UserId,
    /// Pearson similarity between the target user and this rater.
    pub weight: f64,
    /// Score this rater gave the target item.
    pub score: Score,
}

/// Prediction engine combining neighbour scores by similarity weight.
///
/// Pure and synchronous: the predictor never mutates its store, so a shared
/// reference can serve concurrent predictions over a consistent snapshot.
///
/// # Examples
///
/// ```
/// use taste_core::{ItemId, RatingTable, UserId};
/// use taste_predictor::{NeighbourPredictor, Prediction};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = RatingTable::new()
///     .with_score(UserId::new(1), ItemId::new(10), 5.0)?
///     .with_score(UserId::new(1), ItemId::new(20), 3.0)?
///     .with_score(UserId::new(2), ItemId::new(10), 4.0)?
///     .with_score(UserId::new(2), ItemId::new(20), 2.0)?
///     .with_score(UserId::new(2), ItemId::new(30), 4.0)?;
///
/// let predictor = NeighbourPredictor::new(table);
/// let prediction = predictor.predict(UserId::new(1), ItemId::new(30))?;
/// assert_eq!(prediction, Prediction::Estimate(4.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NeighbourPredictor<S> {
    store: S,
    policy: AggregationPolicy,
}

impl<S: RatingStore> NeighbourPredictor<S> {
    /// Construct a predictor using the default aggregation policy.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, AggregationPolicy::default())
    }

    /// Construct a predictor with an explicit aggregation policy.
    pub const fn with_policy(store: S, policy: AggregationPolicy) -> Self {
        Self { store, policy }
    }

    /// Return the configured aggregation policy.
    #[must_use]
    pub const fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Pearson similarity between two users in the underlying store.
    ///
    /// # Errors
    /// Returns [`SimilarityError::UnknownUser`] when either identifier is
    /// not present in the store.
    pub fn similarity(&self, a: UserId, b: UserId) -> Result<f64, SimilarityError> {
        similarity(&self.store, a, b)
    }

    /// Every other rater of `item`, weighted by similarity to `user` and
    /// ordered by descending weight.
    ///
    /// Ties on weight break by ascending user id, so repeated calls over an
    /// unchanged store return the same ordering.
    ///
    /// # Errors
    /// Returns [`PredictError::UnknownUser`] or
    /// [`PredictError::UnknownItem`] when an identifier is not present in
    /// the store.
    pub fn neighbours(&self, user: UserId, item: ItemId) -> Result<Vec<Neighbour>, PredictError> {
        if self.store.ratings_of(user).is_none() {
            return Err(PredictError::UnknownUser { user });
        }
        let raters = self
            .store
            .ratings_for(item)
            .ok_or(PredictError::UnknownItem { item })?;

        let mut neighbours = Vec::new();
        for (other, score) in raters {
            if other == user {
                continue;
            }
            let weight = similarity(&self.store, user, other)?;
            neighbours.push(Neighbour {
                user: other,
                weight,
                score,
            });
        }
        neighbours.sort_by(|lhs, rhs| {
            rhs.weight
                .total_cmp(&lhs.weight)
                .then_with(|| lhs.user.cmp(&rhs.user))
        });
        Ok(neighbours)
    }

    /// Predict the score `user` would give `item`.
    ///
    /// Returns [`Prediction::Unavailable`] when no other user rated the
    /// item, or when the similarity weights sum to zero under the
    /// [`AggregationPolicy::WeightedAverage`] policy.
    ///
    /// # Errors
    /// Returns [`PredictError::UnknownUser`] or
    /// [`PredictError::UnknownItem`] when an identifier is not present in
    /// the store.
    #[expect(
        clippy::float_arithmetic,
        reason = "weighted aggregation of neighbour scores"
    )]
    pub fn predict(&self, user: UserId, item: ItemId) -> Result<Prediction, PredictError> {
        let neighbours = self.neighbours(user, item)?;
        if neighbours.is_empty() {
            return Ok(Prediction::Unavailable);
        }

        let mut numerator = 0.0_f64;
        let mut denominator = 0.0_f64;
        for neighbour in &neighbours {
            numerator += neighbour.weight * neighbour.score;
            denominator += neighbour.weight;
        }

        Ok(match self.policy {
            AggregationPolicy::WeightedAverage => {
                if denominator == 0.0 {
                    log::debug!(
                        "prediction for user {user}, item {item}: weights sum to zero, no estimate"
                    );
                    Prediction::Unavailable
                } else {
                    Prediction::Estimate(numerator / denominator)
                }
            }
            AggregationPolicy::SimilarityProduct => {
                Prediction::Estimate(numerator * denominator)
            }
        })
    }
}
