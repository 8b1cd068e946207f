use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Review;
use crate::records::RecordStore;
use crate::store::DataStore;

/// Adds a review to the session and the backing store.
///
/// The line is appended before memory is touched, so a failed write leaves
/// both sides as they were. A full store rejects the add before any I/O.
/// Inputs are not validated here; the front end owns rating and emptiness checks.
pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut RecordStore,
    subject: String,
    rating: i32,
    reviewer: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if records.is_full() {
        result.add_message(CmdMessage::warning(
            "Cannot add more reviews. Maximum reached.",
        ));
        return Ok(result);
    }

    let review = Review::new(subject, rating, reviewer);
    store.append(&review)?;
    records.add(review.clone())?;

    result.add_message(CmdMessage::success("New review added and saved."));
    Ok(result.with_affected_reviews(vec![review]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ReviewError;
    use crate::model::MAX_REVIEWS;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_to_store_and_memory() {
        let mut store = InMemoryStore::new();
        let mut records = RecordStore::new();

        let result = run(
            &mut store,
            &mut records,
            "Ice Bucket Challenge".into(),
            9,
            "alice".into(),
        )
        .unwrap();

        assert_eq!(result.affected_reviews.len(), 1);
        assert!(result.has_level(MessageLevel::Success));
        assert_eq!(records.len(), 1);
        assert_eq!(store.lines(), ["Ice Bucket Challenge 9 alice"]);
    }

    #[test]
    fn full_store_rejects_without_writing() {
        let mut store = InMemoryStore::new();
        let mut records = RecordStore::new();
        for i in 0..MAX_REVIEWS {
            run(&mut store, &mut records, format!("T{}", i), 5, "r".into()).unwrap();
        }

        let result = run(&mut store, &mut records, "Extra".into(), 5, "r".into()).unwrap();

        assert!(result.affected_reviews.is_empty());
        assert_eq!(
            result.messages[0].content,
            "Cannot add more reviews. Maximum reached."
        );
        assert_eq!(records.len(), MAX_REVIEWS);
        assert_eq!(store.lines().len(), MAX_REVIEWS);
    }

    #[test]
    fn failed_append_leaves_memory_untouched() {
        let mut store = InMemoryStore::new().failing_appends();
        let mut records = RecordStore::new();

        let result = run(&mut store, &mut records, "Trend".into(), 4, "bob".into());

        assert!(matches!(result, Err(ReviewError::Io(_))));
        assert!(records.is_empty());
    }

    #[test]
    fn does_not_validate_rating() {
        let mut store = InMemoryStore::new();
        let mut records = RecordStore::new();
        run(&mut store, &mut records, "Trend".into(), 42, "bob".into()).unwrap();
        assert_eq!(records.all()[0].rating, 42);
    }
}
