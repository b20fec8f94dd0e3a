//! JSON file-backed config store.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use super::{ConfigStore, FeedState, StoreError};

/// Stores the feed state as pretty-printed JSON in a single file.
///
/// Saves go through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous state intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<FeedState, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // First run: no state file yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file, starting empty");
                return Ok(FeedState::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.display_path(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.display_path(),
            source,
        })
    }

    fn save(&self, state: &FeedState) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(state)?;

        let tmp = self.path.with_extension("tmp");
        let write_err = |source| StoreError::Write {
            path: self.display_path(),
            source,
        };

        fs::write(&tmp, raw).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!(path = %self.path.display(), "state persisted");
        Ok(())
    }
}
