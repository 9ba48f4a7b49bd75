use crate::error::{GatorError, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = ".gatorconfig.json";

/// Configuration for gator, stored in ~/.gatorconfig.json
///
/// Both keys are optional on disk; a missing key reads as an empty string.
/// Keys this version does not know about are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigRecord {
    /// Database connection string, passed through untouched
    pub db_url: String,

    /// Name of the logged-in user, empty when nobody has logged in
    pub current_user_name: String,
}

/// Reads and writes a [`ConfigRecord`] at a fixed path.
///
/// A missing or empty file is not an error: it reads as the zero-value
/// record, which is what a fresh install looks like. There is no locking;
/// one process owns the file at a time.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store rooted at the current user's home directory
    pub fn locate() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or(GatorError::PathResolution)?;
        Ok(Self::at(dirs.home_dir().join(CONFIG_FILENAME)))
    }

    /// Store over an explicit file path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, or the zero value if there is nothing to load
    pub fn read(&self) -> Result<ConfigRecord> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file missing, using defaults");
                return Ok(ConfigRecord::default());
            }
            Err(source) => {
                return Err(GatorError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // Nothing to parse is the same as no file. Anything else must be valid JSON.
        if content.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "config file empty, using defaults");
            return Ok(ConfigRecord::default());
        }

        let record = serde_json::from_slice(&content).map_err(|source| GatorError::Decode {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "loaded config");
        Ok(record)
    }

    /// Replace the file contents with `record`, pretty-printed.
    ///
    /// The file is truncated first, so a failure part way through can leave
    /// it short. Callers report the error and the user retries.
    pub(crate) fn write(&self, record: &ConfigRecord) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(record).map_err(|source| GatorError::Encode {
                path: self.path.clone(),
                source,
            })?;
        content.push('\n');

        fs::write(&self.path, content).map_err(|source| GatorError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Set the active user and persist the whole record
    pub fn set_current_user(&self, record: &mut ConfigRecord, name: &str) -> Result<()> {
        record.current_user_name = name.to_string();
        self.write(record)
    }
}
