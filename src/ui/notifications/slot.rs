// SPDX-License-Identifier: MPL-2.0
//! Storage for the failed-action slot.
//!
//! The slot holds one identifier: the most recent operation that asked for
//! retry support. It is a single value, not a queue. Two unrelated failures
//! overwrite each other.

use crate::app::persisted_state::AppState;
use crate::error::Result;
use std::path::PathBuf;

/// Backing store for the failed-action slot.
pub trait ActionSlot: std::fmt::Debug {
    /// Returns the stored identifier, if any.
    fn get(&self) -> Option<String>;

    /// Replaces (or clears, with `None`) the stored identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted. The in-memory
    /// value is updated regardless.
    fn set(&mut self, value: Option<&str>) -> Result<()>;
}

/// Slot that lives only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl ActionSlot for MemorySlot {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: Option<&str>) -> Result<()> {
        self.value = value.map(str::to_string);
        Ok(())
    }
}

/// Slot persisted in the application state file, so it survives restarts.
#[derive(Debug, Clone)]
pub struct PersistedSlot {
    state: AppState,
    base_dir: Option<PathBuf>,
}

impl PersistedSlot {
    /// Wraps already-loaded state; writes go to `base_dir` (or the default
    /// data directory when `None`).
    #[must_use]
    pub fn new(state: AppState, base_dir: Option<PathBuf>) -> Self {
        Self { state, base_dir }
    }

    /// Loads state from `base_dir`. Returns a warning key if loading failed.
    #[must_use]
    pub fn load(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(base_dir.clone());
        (Self::new(state, base_dir), warning)
    }
}

impl ActionSlot for PersistedSlot {
    fn get(&self) -> Option<String> {
        self.state.last_failed_action.clone()
    }

    fn set(&mut self, value: Option<&str>) -> Result<()> {
        self.state.last_failed_action = value.map(str::to_string);
        self.state.save_to(self.base_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_slot_overwrites_and_clears() {
        let mut slot = MemorySlot::default();
        assert_eq!(slot.get(), None);

        slot.set(Some("login")).unwrap();
        slot.set(Some("search")).unwrap();
        assert_eq!(slot.get().as_deref(), Some("search"));

        slot.set(None).unwrap();
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn persisted_slot_survives_reload() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let (mut slot, warning) = PersistedSlot::load(base.clone());
        assert!(warning.is_none());
        slot.set(Some("fetch-dashboard")).expect("persist slot");

        let (reloaded, _) = PersistedSlot::load(base.clone());
        assert_eq!(reloaded.get().as_deref(), Some("fetch-dashboard"));

        let (mut reloaded, _) = PersistedSlot::load(base.clone());
        reloaded.set(None).expect("clear slot");
        let (cleared, _) = PersistedSlot::load(base);
        assert_eq!(cleared.get(), None);
    }

    #[test]
    fn persisted_slot_keeps_value_in_memory_when_write_fails() {
        let temp_dir = tempdir().expect("create temp dir");
        // A regular file where the data directory should be.
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").expect("write blocker");

        let mut slot = PersistedSlot::new(AppState::default(), Some(blocker));
        assert!(slot.set(Some("upload")).is_err());
        assert_eq!(slot.get().as_deref(), Some("upload"));
    }
}
