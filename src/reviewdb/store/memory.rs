use super::{collect_lines, line, DataStore, LoadReport};
use crate::error::{ReviewError, Result};
use crate::model::Review;

/// In-memory line buffer for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Option<Vec<String>>,
    fail_appends: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing content, as if a file with these lines were present.
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
            fail_appends: false,
        }
    }

    /// Makes every subsequent append fail, like an unwritable file.
    pub fn failing_appends(mut self) -> Self {
        self.fail_appends = true;
        self
    }

    /// The raw lines held so far, without terminators.
    pub fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or_default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, limit: usize) -> Result<LoadReport> {
        match &self.lines {
            None => Ok(LoadReport {
                file_missing: true,
                ..LoadReport::default()
            }),
            Some(lines) => Ok(collect_lines(lines.iter().cloned().map(Ok), limit)),
        }
    }

    fn append(&mut self, review: &Review) -> Result<()> {
        if self.fail_appends {
            return Err(ReviewError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        let encoded = line::encode(review);
        self.lines
            .get_or_insert_with(Vec::new)
            .push(encoded.trim_end_matches('\n').to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_reviews(mut self, count: usize) -> Self {
            for i in 0..count {
                let review = Review::new(format!("Trend {}", i + 1), (i % 10) as i32 + 1, "tester");
                self.store.append(&review).unwrap();
            }
            self
        }

        pub fn with_review(mut self, subject: &str, rating: i32, reviewer: &str) -> Self {
            self.store
                .append(&Review::new(subject, rating, reviewer))
                .unwrap();
            self
        }

        pub fn with_raw_line(mut self, raw: &str) -> Self {
            self.store
                .lines
                .get_or_insert_with(Vec::new)
                .push(raw.to_string());
            self
        }
    }
}
