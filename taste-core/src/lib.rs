//! Core domain types for the Taste recommendation engine.
//!
//! The crate models a sparse rating matrix: users score items, a
//! (user, item) pair carries at most one score, and re-rating replaces the
//! previous observation. Downstream engines consume the matrix through the
//! read-only [`RatingStore`] capability, so similarity and prediction stay
//! pure functions of an immutable snapshot.
//!
//! Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
mod rating;
mod store;
mod table;

pub use id::{ItemId, UserId};
pub use rating::{Rating, RatingError, Score};
pub use store::RatingStore;
pub use table::RatingTable;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
