use crate::error::{ReviewError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "reviewdb.json";

/// Configuration for reviewdb, stored in reviewdb.json next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Path of the review file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl ReviewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ReviewError::Io)?;
        let config: ReviewConfig =
            serde_json::from_str(&content).map_err(ReviewError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ReviewError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ReviewError::Serialization)?;
        fs::write(config_path, content).map_err(ReviewError::Io)?;
        Ok(())
    }

    pub fn set_data_file(&mut self, path: &str) {
        self.data_file = PathBuf::from(path);
    }

    /// The data file as seen from `base`, leaving absolute paths alone.
    pub fn data_file_in(&self, base: &Path) -> PathBuf {
        base.join(&self.data_file)
    }
}
