use super::{collect_lines, line, lossy_lines, DataStore, LoadReport};
use crate::error::{ReviewError, Result};
use crate::model::Review;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "tiktok_reviews.txt";

/// Reviews kept in one flat text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ReviewError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, limit: usize) -> Result<LoadReport> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No review file at {}", self.path.display());
                return Ok(LoadReport {
                    file_missing: true,
                    ..LoadReport::default()
                });
            }
            Err(e) => return Err(ReviewError::Io(e)),
        };

        let report = collect_lines(lossy_lines(BufReader::new(file)), limit);
        log::info!(
            "Loaded {} review(s) from {} ({} malformed line(s) skipped)",
            report.reviews.len(),
            self.path.display(),
            report.malformed
        );
        Ok(report)
    }

    fn append(&mut self, review: &Review) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ReviewError::Io)?;
        file.write_all(line::encode(review).as_bytes())
            .map_err(ReviewError::Io)?;
        file.flush().map_err(ReviewError::Io)?;
        log::debug!("Appended review of {:?} to {}", review.subject, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_REVIEWS;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_DATA_FILE));
        (dir, store)
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let (_dir, store) = setup();
        let report = store.load(MAX_REVIEWS).unwrap();
        assert!(report.file_missing);
        assert!(report.reviews.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn append_then_load() {
        let (_dir, mut store) = setup();
        store
            .append(&Review::new("Ice Bucket Challenge", 9, "alice"))
            .unwrap();
        store.append(&Review::new("Renegade", 6, "bob")).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "Ice Bucket Challenge 9 alice\nRenegade 6 bob\n");

        let report = store.load(MAX_REVIEWS).unwrap();
        assert!(!report.file_missing);
        assert_eq!(
            report.reviews,
            vec![
                Review::new("Ice Bucket Challenge", 9, "alice"),
                Review::new("Renegade", 6, "bob"),
            ]
        );
    }

    #[test]
    fn append_keeps_existing_lines_including_malformed() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), "garbage\nTrend 3 carl\n").unwrap();

        store.append(&Review::new("New", 4, "dana")).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "garbage\nTrend 3 carl\nNew 4 dana\n");
    }

    #[test]
    fn load_skips_malformed_and_empty_lines() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            "Dance Challenge 8 bob\n\nonlyoneword\nTrend abc alice\nRenegade 6 eve\n",
        )
        .unwrap();

        let report = store.load(MAX_REVIEWS).unwrap();
        assert_eq!(report.reviews.len(), 2);
        assert_eq!(report.malformed, 2);
        assert_eq!(report.reviews[1].subject, "Renegade");
    }

    #[test]
    fn load_truncates_at_limit_in_file_order() {
        let (_dir, store) = setup();
        let content: String = (0..MAX_REVIEWS + 50)
            .map(|i| format!("Trend {} {} user{}\n", i, i % 10 + 1, i))
            .collect();
        fs::write(store.path(), content).unwrap();

        let report = store.load(MAX_REVIEWS).unwrap();
        assert_eq!(report.reviews.len(), MAX_REVIEWS);
        assert_eq!(report.reviews[0].subject, "Trend 0");
        assert_eq!(
            report.reviews[MAX_REVIEWS - 1].subject,
            format!("Trend {}", MAX_REVIEWS - 1)
        );
    }

    #[test]
    fn non_utf8_line_does_not_stop_the_load() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            b"First 5 ann\nCaf\xe9 7 bob\nRenegade 6 eve\nDance 8 zed\n",
        )
        .unwrap();

        let report = store.load(MAX_REVIEWS).unwrap();
        assert!(report.interrupted.is_none());
        assert_eq!(report.reviews.len(), 4);
        assert_eq!(report.reviews[1].rating, 7);
        assert_eq!(report.reviews[1].reviewer, "bob");
        assert_eq!(report.reviews[3].subject, "Dance");
    }

    #[test]
    fn append_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("reviews.txt"));
        store.append(&Review::new("Trend", 2, "fay")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a review file.
        let store = FileStore::new(dir.path());
        let result = store.load(MAX_REVIEWS);
        assert!(
            matches!(result, Err(ReviewError::Io(_))) || result.unwrap().interrupted.is_some()
        );
    }
}
