//! Facade crate for the Taste recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the similarity
//! and prediction engines behind a feature flag.

#![forbid(unsafe_code)]

pub use taste_core::{ItemId, Rating, RatingError, RatingStore, RatingTable, Score, UserId};

#[cfg(feature = "predictor")]
pub use taste_predictor::{
    AggregationPolicy, Neighbour, NeighbourPredictor, PredictError, Prediction, SimilarityError,
    paired_scores, pearson, similarity,
};
