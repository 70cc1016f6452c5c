//! Similarity and prediction engines for the Taste recommendation engine.
//!
//! The crate provides two complementary capabilities over a read-only
//! [`RatingStore`](taste_core::RatingStore):
//!
//! - **Pearson similarity** between two users, computed from the items both
//!   have rated. Empty overlap and zero-variance series are defined as zero
//!   correlation rather than NaN, so downstream ranking never sees a
//!   poisoned value.
//! - **Neighbour-weighted prediction** of the score a user would give an
//!   unrated item, combining other raters' scores by their similarity to
//!   the target. Aggregation is selected by [`AggregationPolicy`]; the
//!   default is the standard weighted average.
//!
//! Both operations are pure functions of the store snapshot: no caching, no
//! interior mutability, identical output for identical input.
//!
//! # Examples
//!
//! ```
//! use taste_core::{ItemId, RatingTable, UserId};
//! use taste_predictor::{NeighbourPredictor, Prediction, similarity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RatingTable::new()
//!     .with_score(UserId::new(1), ItemId::new(10), 5.0)?
//!     .with_score(UserId::new(1), ItemId::new(20), 3.0)?
//!     .with_score(UserId::new(2), ItemId::new(10), 4.0)?
//!     .with_score(UserId::new(2), ItemId::new(20), 2.0)?
//!     .with_score(UserId::new(2), ItemId::new(30), 4.0)?;
//!
//! let sim = similarity(&table, UserId::new(1), UserId::new(2))?;
//! assert_eq!(sim, 1.0);
//!
//! let predictor = NeighbourPredictor::new(table);
//! let prediction = predictor.predict(UserId::new(1), ItemId::new(30))?;
//! assert_eq!(prediction, Prediction::Estimate(4.0));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod predict;
mod similarity;

pub use predict::{
    AggregationPolicy, Neighbour, NeighbourPredictor, PredictError, Prediction,
};
pub use similarity::{SimilarityError, paired_scores, pearson, similarity};
