// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Notification timers and the log buffer capacity
//!
//! Missing keys take their defaults; out-of-range timer values are clamped
//! when converted to [`Timings`].
//!
//! # Examples
//!
//! ```no_run
//! use scanora::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.toast_duration_ms = 6000;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use crate::ui::notifications::Timings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Notification timers, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    #[serde(default = "default_inline_timeout_ms")]
    pub inline_timeout_ms: u64,

    #[serde(default = "default_modal_auto_dismiss_ms")]
    pub modal_auto_dismiss_ms: u64,

    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    #[serde(default = "default_toast_exit_ms")]
    pub toast_exit_ms: u64,

    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,

    /// Records kept by the in-memory log buffer.
    #[serde(default = "default_log_buffer_capacity")]
    pub log_buffer_capacity: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            inline_timeout_ms: DEFAULT_INLINE_TIMEOUT_MS,
            modal_auto_dismiss_ms: DEFAULT_MODAL_AUTO_DISMISS_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            log_buffer_capacity: DEFAULT_LOG_BUFFER_CAPACITY,
        }
    }
}

impl NotificationsConfig {
    /// Returns dispatcher timings with every value clamped to its bounds.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let display = |ms: u64| Duration::from_millis(ms.clamp(MIN_DISPLAY_MS, MAX_DISPLAY_MS));
        let transition = |ms: u64| Duration::from_millis(ms.min(MAX_TRANSITION_MS));

        Timings {
            inline_timeout: display(self.inline_timeout_ms),
            modal_auto_dismiss: display(self.modal_auto_dismiss_ms),
            toast_duration: display(self.toast_duration_ms),
            toast_exit: transition(self.toast_exit_ms),
            focus_delay: transition(self.focus_delay_ms),
        }
    }

    /// Returns the log buffer capacity, clamped to its bounds.
    #[must_use]
    pub fn log_buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.log_buffer_capacity)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Serde Helpers
// =============================================================================

fn default_inline_timeout_ms() -> u64 {
    DEFAULT_INLINE_TIMEOUT_MS
}

fn default_modal_auto_dismiss_ms() -> u64 {
    DEFAULT_MODAL_AUTO_DISMISS_MS
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_toast_exit_ms() -> u64 {
    DEFAULT_TOAST_EXIT_MS
}

fn default_focus_delay_ms() -> u64 {
    DEFAULT_FOCUS_DELAY_MS
}

fn default_log_buffer_capacity() -> usize {
    DEFAULT_LOG_BUFFER_CAPACITY
}

/// Accepts the theme mode in any letter case.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be loaded, returns the default config and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Settings could not be loaded; using defaults. ({err})")),
        ),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_timers() {
        let timings = Config::default().notifications.timings();
        assert_eq!(timings, Timings::default());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        config.notifications.toast_duration_ms = 6000;
        config.notifications.log_buffer_capacity = 64;

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is = = not toml").expect("write");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\ntheme_mode=").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[notifications]\nfocus_delay_ms = 250\n").expect("write");

        let config = load_from_path(&path).expect("load");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.focus_delay_ms, 250);
        assert_eq!(
            config.notifications.toast_duration_ms,
            DEFAULT_TOAST_DURATION_MS
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"neon\"\n").is_err());
    }

    #[test]
    fn out_of_range_timers_are_clamped() {
        let config = NotificationsConfig {
            inline_timeout_ms: 1,
            modal_auto_dismiss_ms: u64::MAX,
            toast_exit_ms: 99_999,
            ..NotificationsConfig::default()
        };
        let timings = config.timings();
        assert_eq!(timings.inline_timeout, Duration::from_millis(MIN_DISPLAY_MS));
        assert_eq!(timings.modal_auto_dismiss, Duration::from_millis(MAX_DISPLAY_MS));
        assert_eq!(timings.toast_exit, Duration::from_millis(MAX_TRANSITION_MS));
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("config");

        save_with_override(&Config::default(), Some(nested.clone())).expect("save");
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(text.contains("[general]"));
        assert!(text.contains("[notifications]"));
        assert!(text.contains("toast_duration_ms = 4000"));
    }
}
