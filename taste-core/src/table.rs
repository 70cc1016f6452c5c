//! In-memory rating matrix with deterministic iteration.
//!
//! `RatingTable` keeps two ordered indices over the same observations, one
//! per axis, so both `ratings_of` and `ratings_for` are cheap lookups. The
//! indices are kept in sync by [`RatingTable::insert`]; re-rating a
//! (user, item) pair replaces the previous score rather than duplicating
//! the observation.

use std::collections::BTreeMap;

use crate::{ItemId, Rating, RatingError, RatingStore, Score, UserId};

/// Sparse (user, item, score) matrix indexed by both axes.
///
/// Ordered maps make every traversal deterministic, which keeps similarity
/// and prediction referentially transparent: identical tables produce
/// identical outputs, call after call.
///
/// # Examples
///
/// ```
/// use taste_core::{ItemId, RatingTable, UserId};
///
/// # fn main() -> Result<(), taste_core::RatingError> {
/// let mut table = RatingTable::new();
/// table.insert_score(UserId::new(1), ItemId::new(10), 5.0)?;
/// let replaced = table.insert_score(UserId::new(1), ItemId::new(10), 3.0)?;
///
/// assert_eq!(replaced, Some(5.0));
/// assert_eq!(table.rating(UserId::new(1), ItemId::new(10)), Some(3.0));
/// assert_eq!(table.rating_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingTable {
    by_user: BTreeMap<UserId, BTreeMap<ItemId, Score>>,
    by_item: BTreeMap<ItemId, BTreeMap<UserId, Score>>,
}

impl RatingTable {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating, replacing any previous score for the same
    /// (user, item) pair.
    ///
    /// Returns the replaced score, if one existed.
    pub fn insert(&mut self, rating: Rating) -> Option<Score> {
        self.by_item
            .entry(rating.item)
            .or_default()
            .insert(rating.user, rating.score);
        self.by_user
            .entry(rating.user)
            .or_default()
            .insert(rating.item, rating.score)
    }

    /// Validate and record a rating from its parts.
    ///
    /// Convenience for callers that do not already hold a [`Rating`].
    ///
    /// # Errors
    /// Returns [`RatingError::NonFiniteScore`] when `score` is NaN or
    /// infinite.
    pub fn insert_score(
        &mut self,
        user: UserId,
        item: ItemId,
        score: Score,
    ) -> Result<Option<Score>, RatingError> {
        Ok(self.insert(Rating::new(user, item, score)?))
    }

    /// Record a rating while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`RatingError::NonFiniteScore`] when `score` is NaN or
    /// infinite.
    pub fn with_score(
        mut self,
        user: UserId,
        item: ItemId,
        score: Score,
    ) -> Result<Self, RatingError> {
        self.insert_score(user, item, score)?;
        Ok(self)
    }

    /// Return the score `user` gave `item`, if observed.
    #[must_use]
    pub fn rating(&self, user: UserId, item: ItemId) -> Option<Score> {
        self.by_user.get(&user)?.get(&item).copied()
    }

    /// Report whether `user` has produced any observation.
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.by_user.contains_key(&user)
    }

    /// Report whether `item` is referenced by any observation.
    #[must_use]
    pub fn contains_item(&self, item: ItemId) -> bool {
        self.by_item.contains_key(&item)
    }

    /// Iterate over all known users in ascending order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.by_user.keys().copied()
    }

    /// Iterate over all known items in ascending order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.by_item.keys().copied()
    }

    /// Total number of distinct (user, item) observations.
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.by_user.values().map(BTreeMap::len).sum()
    }

    /// Report whether the table holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

impl RatingStore for RatingTable {
    fn ratings_of(
        &self,
        user: UserId,
    ) -> Option<Box<dyn Iterator<Item = (ItemId, Score)> + Send + '_>> {
        let ratings = self.by_user.get(&user)?;
        Some(Box::new(ratings.iter().map(|(&item, &score)| (item, score))))
    }

    fn ratings_for(
        &self,
        item: ItemId,
    ) -> Option<Box<dyn Iterator<Item = (UserId, Score)> + Send + '_>> {
        let ratings = self.by_item.get(&item)?;
        Some(Box::new(ratings.iter().map(|(&user, &score)| (user, score))))
    }
}
