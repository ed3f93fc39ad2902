// SPDX-License-Identifier: MPL-2.0
//! Application state persisted across sessions in CBOR format.
//!
//! Unlike `settings.toml`, this file is not meant to be edited by users. It
//! currently carries the failed-action slot, so a "Retry" offered before a
//! restart still knows what to retry afterwards.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Identifier of the most recent operation that registered for retry.
    #[serde(default)]
    pub last_failed_action: Option<String>,
}

impl AppState {
    /// Loads state from the default data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir` (or the resolved data directory).
    ///
    /// A missing file yields default state silently. An unreadable or
    /// corrupted file yields default state plus a warning for the user.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                return (
                    Self::default(),
                    Some("Could not read saved state; starting fresh.".to_string()),
                )
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (
                Self::default(),
                Some("Saved state was corrupted and has been reset.".to_string()),
            ),
        }
    }

    /// Saves state to the default data directory.
    ///
    /// # Errors
    ///
    /// See [`save_to`](Self::save_to).
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Saves state to `base_dir` (or the resolved data directory), creating
    /// the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be resolved, or if the
    /// directory or file cannot be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::state_file_path_with_override(base_dir)
            .ok_or_else(|| Error::State("no data directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        ciborium::into_writer(self, BufWriter::new(file))?;
        Ok(())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_failed_action() {
        assert!(AppState::default().last_failed_action.is_none());
    }

    #[test]
    fn missing_file_loads_default_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let state = AppState {
            last_failed_action: Some("search:acme".to_string()),
        };

        state.save_to(base.clone()).expect("save state");
        assert!(temp_dir.path().join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(base);
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("a").join("b");

        AppState::default()
            .save_to(Some(nested.clone()))
            .expect("save into nested dir");
        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn corrupted_file_loads_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xff not cbor")
            .expect("write garbage");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_into_file_path_fails() {
        let temp_dir = tempdir().expect("create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"x").expect("write blocker");

        let err = AppState::default()
            .save_to(Some(blocker))
            .expect_err("cannot create dir over a file");
        assert!(matches!(err, Error::Io(_)));
    }
}
