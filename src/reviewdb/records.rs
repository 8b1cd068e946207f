//! The in-memory record store.
//!
//! Reviews are held in insertion order, which is also display order. The
//! store is bounded: once it holds `capacity` reviews every further add is
//! rejected without touching what is already there. It never reads or writes
//! the backing file itself; see [`crate::commands::add`] for persisting adds.

use crate::error::{ReviewError, Result};
use crate::model::{Review, MAX_REVIEWS};

#[derive(Debug, Clone)]
pub struct RecordStore {
    reviews: Vec<Review>,
    capacity: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_REVIEWS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reviews: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.reviews.len() >= self.capacity
    }

    /// Appends a review. Inputs are trusted; range checks belong to the caller.
    pub fn add(&mut self, review: Review) -> Result<()> {
        if self.is_full() {
            return Err(ReviewError::CapacityReached(self.capacity));
        }
        self.reviews.push(review);
        Ok(())
    }

    /// Adds loaded reviews in order until the store is full.
    /// Returns how many were taken.
    pub fn extend_from_load(&mut self, reviews: impl IntoIterator<Item = Review>) -> usize {
        let room = self.capacity.saturating_sub(self.reviews.len());
        let before = self.reviews.len();
        self.reviews.extend(reviews.into_iter().take(room));
        self.reviews.len() - before
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    /// Every review whose subject equals `name`, ignoring ASCII case.
    pub fn find_by_subject(&self, name: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.subject_matches(name))
            .collect()
    }
}
