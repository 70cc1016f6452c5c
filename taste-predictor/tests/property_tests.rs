//! Property-based tests for the similarity and prediction engines.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid rating datasets, complementing the unit tests' hand-picked
//! scenarios and the BDD behavioural tests.
//!
//! # Invariants tested
//!
//! - **Bounds:** similarity always lands in `[-1.0, 1.0]`.
//! - **Symmetry:** `similarity(a, b) == similarity(b, a)`.
//! - **Totality:** known ids never error and never produce NaN estimates.
//! - **Determinism:** repeated predictions over an unchanged table agree.

use proptest::prelude::*;
use taste_core::test_support::table;
use taste_core::{ItemId, RatingTable, UserId};
use taste_predictor::{AggregationPolicy, NeighbourPredictor, similarity};

/// Arbitrary sparse rating datasets over a small id space.
///
/// Duplicate (user, item) pairs exercise the replace-on-re-rating path.
fn ratings_strategy() -> impl Strategy<Value = Vec<(u64, u64, f64)>> {
    prop::collection::vec(
        (0_u64..6, 0_u64..8, 1_u8..=5).prop_map(|(user, item, score)| {
            (user, item, f64::from(score))
        }),
        1..60,
    )
}

fn build_table(ratings: &[(u64, u64, f64)]) -> RatingTable {
    table(ratings)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: similarity is bounded and symmetric for every user pair.
    #[test]
    fn similarity_is_bounded_and_symmetric(ratings in ratings_strategy()) {
        let store = build_table(&ratings);
        let users: Vec<UserId> = store.users().collect();
        for &a in &users {
            for &b in &users {
                let ab = similarity(&store, a, b).expect("users come from the store");
                let ba = similarity(&store, b, a).expect("users come from the store");
                prop_assert!((-1.0..=1.0).contains(&ab), "similarity {ab} out of bounds");
                prop_assert!((ab - ba).abs() <= 1e-12, "asymmetry: {ab} vs {ba}");
            }
        }
    }

    /// Property: predictions never error for known ids, never produce NaN,
    /// and repeated calls agree.
    #[test]
    fn predictions_are_total_and_deterministic(ratings in ratings_strategy()) {
        let store = build_table(&ratings);
        let users: Vec<UserId> = store.users().collect();
        let items: Vec<ItemId> = store.items().collect();
        let predictor = NeighbourPredictor::new(store);
        for &user in &users {
            for &item in &items {
                let first = predictor.predict(user, item).expect("ids come from the store");
                let second = predictor.predict(user, item).expect("ids come from the store");
                prop_assert_eq!(first, second);
                if let Some(estimate) = first.estimate() {
                    prop_assert!(!estimate.is_nan(), "NaN estimate for {user}/{item}");
                }
            }
        }
    }

    /// Property: the legacy product policy always yields an estimate when
    /// the item has another rater, matching its collapse-to-zero contract.
    #[test]
    fn product_policy_estimates_whenever_neighbours_exist(ratings in ratings_strategy()) {
        let store = build_table(&ratings);
        let users: Vec<UserId> = store.users().collect();
        let items: Vec<ItemId> = store.items().collect();
        let predictor = NeighbourPredictor::with_policy(
            store,
            AggregationPolicy::SimilarityProduct,
        );
        for &user in &users {
            for &item in &items {
                let neighbours = predictor
                    .neighbours(user, item)
                    .expect("ids come from the store");
                let prediction = predictor.predict(user, item).expect("ids come from the store");
                if neighbours.is_empty() {
                    prop_assert!(prediction.is_unavailable());
                } else {
                    prop_assert!(prediction.estimate().is_some());
                }
            }
        }
    }
}
