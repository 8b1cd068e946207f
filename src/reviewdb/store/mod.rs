//! # Storage Layer
//!
//! This module binds reviews to their backing text. The [`DataStore`] trait
//! keeps the command layer ignorant of where lines actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single flat text file
//!   - One review per line, see [`line`] for the format
//!   - Opened per operation: once for the bulk load, once per append
//!   - Append-only; existing content is never rewritten or reordered
//!
//! - [`memory::InMemoryStore`]: Line buffer for testing
//!   - No persistence
//!   - Can be told to refuse appends, to exercise failure paths
//!
//! ## Load Semantics
//!
//! Loading reads lines in file order and stops once `limit` reviews have been
//! decoded; later lines are never read. Empty lines are skipped silently,
//! malformed lines are dropped and only counted. A missing file is not an
//! error. Lines that fail to decode stay in the file untouched.

use crate::error::Result;
use crate::model::Review;
use std::io::{self, BufRead};

pub mod fs;
pub mod line;
pub mod memory;

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Decoded reviews in file order, at most `limit` of them.
    pub reviews: Vec<Review>,
    /// The backing file did not exist yet.
    pub file_missing: bool,
    /// Non-empty lines that could not be decoded.
    pub malformed: usize,
    /// Set when reading stopped early on an I/O error; `reviews` holds what
    /// was decoded before it.
    pub interrupted: Option<std::io::Error>,
}

/// Abstract interface for review persistence.
pub trait DataStore {
    /// Read up to `limit` reviews from the backing storage.
    fn load(&self, limit: usize) -> Result<LoadReport>;

    /// Append one review's encoded line.
    fn append(&mut self, review: &Review) -> Result<()>;
}

/// Reads one line, replacing bytes that are not UTF-8 instead of failing.
///
/// The `\n` terminator and a `\r` right before it are stripped. Returns
/// `None` at end of input.
pub fn read_lossy_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Every line of `reader` via [`read_lossy_line`].
pub(crate) fn lossy_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(move || read_lossy_line(&mut reader).transpose())
}

/// Decodes lines into a report, stopping once `limit` reviews are held.
///
/// Shared by the stores so the skipping and counting rules live in one place.
pub(crate) fn collect_lines<I>(lines: I, limit: usize) -> LoadReport
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut report = LoadReport::default();
    if limit == 0 {
        return report;
    }
    for (number, line) in lines.into_iter().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Reading stopped at line {}: {}", number + 1, e);
                report.interrupted = Some(e);
                break;
            }
        };
        match line::decode(&line) {
            Ok(review) => {
                report.reviews.push(review);
                if report.reviews.len() >= limit {
                    break;
                }
            }
            Err(line::LineError::Empty) => {}
            Err(e) => {
                log::debug!("Skipping line {}: {}", number + 1, e);
                report.malformed += 1;
            }
        }
    }
    report
}
