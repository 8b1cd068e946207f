//! The one-review-per-line text format.
//!
//! A line is `<subject> <rating> <reviewer>`, fields joined by a single space.
//! Nothing is escaped. Decoding splits from the right: the reviewer is the text
//! after the last space, the rating sits between the last two spaces, and the
//! subject is everything before that. Subjects may therefore contain spaces,
//! reviewers may not. A newline inside any field corrupts the file.

use crate::model::Review;
use thiserror::Error;

/// Why a line did not decode into a review.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("empty line")]
    Empty,

    #[error("fewer than three space-separated fields")]
    MissingField,

    #[error("rating is not an integer: {0:?}")]
    InvalidRating(String),
}

/// Encodes a review as one line, terminator included.
pub fn encode(review: &Review) -> String {
    format!(
        "{} {} {}\n",
        review.subject, review.rating, review.reviewer
    )
}

/// Decodes one line (without its terminator).
pub fn decode(line: &str) -> Result<Review, LineError> {
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let (rest, reviewer) = line.rsplit_once(' ').ok_or(LineError::MissingField)?;
    let (subject, rating_field) = rest.rsplit_once(' ').ok_or(LineError::MissingField)?;
    let rating = parse_leading_int(rating_field)
        .ok_or_else(|| LineError::InvalidRating(rating_field.to_string()))?;

    Ok(Review {
        subject: subject.to_string(),
        rating,
        reviewer: reviewer.to_string(),
    })
}

/// Reads an integer the way files written by earlier versions expect:
/// leading whitespace and a sign are allowed, at least one digit is required,
/// anything after the digits is ignored, and the value must fit an `i32`.
pub fn parse_leading_int(field: &str) -> Option<i32> {
    let trimmed = field.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}
