//! A single rating observation.
//!
//! A rating is an immutable (user, item, score) triple. The engine is
//! scale-agnostic: any ordered numeric scale works, as long as the score is
//! finite. Non-finite scores would poison every downstream correlation, so
//! construction rejects them.

use thiserror::Error;

use crate::{ItemId, UserId};

/// Numeric score attached to a rating.
///
/// Integer scales such as 1–5 embed exactly.
pub type Score = f64;

/// An observed (user, item, score) fact.
///
/// # Examples
///
/// ```
/// use taste_core::{ItemId, Rating, UserId};
///
/// # fn main() -> Result<(), taste_core::RatingError> {
/// let rating = Rating::new(UserId::new(1), ItemId::new(10), 4.0)?;
/// assert_eq!(rating.score, 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// User who produced the observation.
    pub user: UserId,
    /// Item the observation refers to.
    pub item: ItemId,
    /// Observed score.
    pub score: Score,
}

/// Errors returned by [`Rating::new`].
#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
    /// The score was NaN or infinite.
    #[error("rating score must be finite, got {score}")]
    NonFiniteScore {
        /// The rejected value.
        score: Score,
    },
}

impl Rating {
    /// Validates and constructs a [`Rating`].
    ///
    /// # Errors
    /// Returns [`RatingError::NonFiniteScore`] when `score` is NaN or
    /// infinite.
    pub fn new(user: UserId, item: ItemId, score: Score) -> Result<Self, RatingError> {
        if !score.is_finite() {
            return Err(RatingError::NonFiniteScore { score });
        }
        Ok(Self { user, item, score })
    }
}
