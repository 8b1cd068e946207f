use crate::error::{ReviewError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of reviews held in memory at once.
pub const MAX_REVIEWS: usize = 200;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;

/// One review of a trend or influencer.
///
/// Reviews are never mutated after creation. `subject` may contain spaces,
/// `reviewer` should be a single word so the line format can be read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub subject: String,
    pub rating: i32,
    pub reviewer: String,
}

impl Review {
    pub fn new(subject: impl Into<String>, rating: i32, reviewer: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            rating,
            reviewer: reviewer.into(),
        }
    }

    /// Case-insensitive exact comparison against the subject (ASCII folding).
    pub fn subject_matches(&self, name: &str) -> bool {
        self.subject.eq_ignore_ascii_case(name)
    }
}

/// Checks a rating against the 1..=10 scale used for interactive input.
///
/// Loaded reviews are not held to this; hand-edited files may carry any value.
pub fn validate_rating(rating: i32) -> Result<i32> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(rating)
    } else {
        Err(ReviewError::InvalidRating(rating))
    }
}

/// A reviewer name survives the line format only if it is a single non-empty word.
pub fn is_single_word(reviewer: &str) -> bool {
    !reviewer.is_empty() && !reviewer.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_match_ignores_ascii_case() {
        let review = Review::new("Dance Challenge", 8, "bob");
        assert!(review.subject_matches("dance challenge"));
        assert!(review.subject_matches("DANCE CHALLENGE"));
        assert!(!review.subject_matches("Dance"));
        assert!(!review.subject_matches("Dance Challenge "));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(validate_rating(1).unwrap(), 1);
        assert_eq!(validate_rating(10).unwrap(), 10);
        assert!(matches!(
            validate_rating(0),
            Err(ReviewError::InvalidRating(0))
        ));
        assert!(validate_rating(11).is_err());
    }

    #[test]
    fn reviewer_must_be_one_word() {
        assert!(is_single_word("alice"));
        assert!(!is_single_word(""));
        assert!(!is_single_word("alice smith"));
        assert!(!is_single_word("alice\tsmith"));
    }
}
