//! Loading rating observations from delimited text.
//!
//! One `user,item,score` triple per line; blank lines and `#` comments are
//! skipped. Duplicate (user, item) lines follow the table's re-rating
//! semantics: the later line wins, and the replacement is logged.

use camino::Utf8Path;

use taste_core::{ItemId, Rating, RatingTable, UserId};

use crate::error::{CliError, ParseRatingError};

/// Read a ratings file into a [`RatingTable`].
pub(crate) fn load_ratings(path: &Utf8Path) -> Result<RatingTable, CliError> {
    let contents =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| CliError::ReadRatings {
            path: path.to_path_buf(),
            source,
        })?;
    parse_ratings(&contents).map_err(|(line, source)| CliError::ParseRatings {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse ratings text, reporting the one-based line number on failure.
pub(crate) fn parse_ratings(contents: &str) -> Result<RatingTable, (usize, ParseRatingError)> {
    let mut table = RatingTable::new();
    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let rating = parse_line(line).map_err(|source| (index + 1, source))?;
        if let Some(previous) = table.insert(rating) {
            log::warn!(
                "line {}: re-rating replaces score {previous} for user {}, item {}",
                index + 1,
                rating.user,
                rating.item,
            );
        }
    }
    Ok(table)
}

fn parse_line(line: &str) -> Result<Rating, ParseRatingError> {
    let mut fields = line.split(',');
    let user_field = fields
        .next()
        .ok_or(ParseRatingError::MissingField { field: "user" })?;
    let item_field = fields
        .next()
        .ok_or(ParseRatingError::MissingField { field: "item" })?;
    let score_field = fields
        .next()
        .ok_or(ParseRatingError::MissingField { field: "score" })?;
    if fields.next().is_some() {
        return Err(ParseRatingError::UnexpectedField);
    }

    let user: u64 = user_field
        .trim()
        .parse()
        .map_err(ParseRatingError::InvalidUser)?;
    let item: u64 = item_field
        .trim()
        .parse()
        .map_err(ParseRatingError::InvalidItem)?;
    let score: f64 = score_field
        .trim()
        .parse()
        .map_err(ParseRatingError::InvalidScore)?;

    Ok(Rating::new(UserId::new(user), ItemId::new(item), score)?)
}
