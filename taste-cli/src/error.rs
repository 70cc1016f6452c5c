//! Error types emitted by the Taste CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use camino::Utf8PathBuf;
use taste_core::RatingError;
use taste_predictor::{PredictError, SimilarityError};
use thiserror::Error;

/// Errors emitted by the Taste CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Reading the ratings file failed.
    #[error("failed to read ratings file at {path}")]
    ReadRatings {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A line in the ratings file could not be parsed.
    #[error("invalid rating at {path}:{line}")]
    ParseRatings {
        /// File containing the offending line.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        #[source]
        source: ParseRatingError,
    },
    /// The requested aggregation policy is not recognised.
    #[error("{reason}")]
    InvalidPolicy {
        /// Message from the policy parser.
        reason: String,
    },
    /// The similarity engine rejected an identifier.
    #[error(transparent)]
    Similarity(#[from] SimilarityError),
    /// The prediction engine rejected an identifier.
    #[error(transparent)]
    Predict(#[from] PredictError),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// Ways a single `user,item,score` line can be malformed.
#[derive(Debug, Error)]
pub enum ParseRatingError {
    /// A required field was absent.
    #[error("missing {field} field")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// More than three fields were present.
    #[error("expected exactly user,item,score")]
    UnexpectedField,
    /// The user field was not an unsigned integer.
    #[error("invalid user id: {0}")]
    InvalidUser(#[source] std::num::ParseIntError),
    /// The item field was not an unsigned integer.
    #[error("invalid item id: {0}")]
    InvalidItem(#[source] std::num::ParseIntError),
    /// The score field was not numeric.
    #[error("invalid score: {0}")]
    InvalidScore(#[source] std::num::ParseFloatError),
    /// The score parsed but was rejected by the domain model.
    #[error(transparent)]
    InvalidRating(#[from] RatingError),
}
