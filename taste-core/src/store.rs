//! Read-only data access for rating observations.
//!
//! The `RatingStore` trait is the seam between the rating dataset and the
//! similarity/prediction engines. Engines only ever read through it, so a
//! store shared behind `&` is safe to query from many threads at once;
//! callers are responsible for not mutating the dataset while a batch of
//! computations is in flight (snapshot-read semantics).

use crate::{ItemId, Score, UserId};

/// Read-only access to a rating dataset.
///
/// Both lookups distinguish *unknown* identifiers (`None`) from known
/// identifiers with observations (`Some`). Engines turn `None` into a hard
/// not-found error and degrade gracefully on empty or sparse overlap.
///
/// Implementations must yield observations in ascending identifier order so
/// repeated traversals are deterministic.
///
/// # Examples
///
/// ```rust
/// use taste_core::{ItemId, RatingStore, RatingTable, UserId};
///
/// # fn main() -> Result<(), taste_core::RatingError> {
/// let mut table = RatingTable::new();
/// table.insert_score(UserId::new(1), ItemId::new(10), 5.0)?;
///
/// let ratings: Vec<_> = table
///     .ratings_of(UserId::new(1))
///     .expect("user 1 is known")
///     .collect();
/// assert_eq!(ratings, vec![(ItemId::new(10), 5.0)]);
/// assert!(table.ratings_of(UserId::new(2)).is_none());
/// # Ok(())
/// # }
/// ```
pub trait RatingStore {
    /// Return all (item, score) observations produced by `user`, in
    /// ascending item order, or `None` when the user is unknown.
    fn ratings_of(
        &self,
        user: UserId,
    ) -> Option<Box<dyn Iterator<Item = (ItemId, Score)> + Send + '_>>;

    /// Return all (user, score) observations referencing `item`, in
    /// ascending user order, or `None` when the item is unknown.
    fn ratings_for(
        &self,
        item: ItemId,
    ) -> Option<Box<dyn Iterator<Item = (UserId, Score)> + Send + '_>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RatingTable;
    use rstest::rstest;

    struct SingleRating;

    impl RatingStore for SingleRating {
        fn ratings_of(
            &self,
            user: UserId,
        ) -> Option<Box<dyn Iterator<Item = (ItemId, Score)> + Send + '_>> {
            if user == UserId::new(1) {
                Some(Box::new(std::iter::once((ItemId::new(10), 3.0))))
            } else {
                None
            }
        }

        fn ratings_for(
            &self,
            item: ItemId,
        ) -> Option<Box<dyn Iterator<Item = (UserId, Score)> + Send + '_>> {
            if item == ItemId::new(10) {
                Some(Box::new(std::iter::once((UserId::new(1), 3.0))))
            } else {
                None
            }
        }
    }

    #[rstest]
    fn custom_stores_can_implement_the_trait() {
        let store = SingleRating;
        assert_eq!(store.ratings_of(UserId::new(1)).map(Iterator::count), Some(1));
        assert!(store.ratings_of(UserId::new(2)).is_none());
        assert_eq!(store.ratings_for(ItemId::new(10)).map(Iterator::count), Some(1));
    }

    #[rstest]
    fn trait_objects_are_usable() {
        let table = RatingTable::new();
        let store: &dyn RatingStore = &table;
        assert!(store.ratings_of(UserId::new(1)).is_none());
    }
}
