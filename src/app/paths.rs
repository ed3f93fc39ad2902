// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Data (`state.cbor`) and config (`settings.toml`) directories resolve in
//! this order:
//! 1. an explicit override passed to the `*_with_override` functions
//! 2. the `--data-dir` / `--config-dir` CLI flags, see [`init_cli_overrides`]
//! 3. the `SCANORA_DATA_DIR` / `SCANORA_CONFIG_DIR` environment variables
//! 4. the platform directory from `dirs`, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform data/config roots.
pub const APP_NAME: &str = "Scanora";

pub const ENV_DATA_DIR: &str = "SCANORA_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "SCANORA_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the CLI directory flags. Only the first call takes effect.
///
/// Returns `false` if overrides were already recorded.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data && config
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if override_path.is_some() {
        return override_path;
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory, holding `state.cbor`.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the config directory, holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/scanora-test-data");
        assert_eq!(
            get_app_data_dir_with_override(Some(path.clone())),
            Some(path)
        );

        let path = PathBuf::from("/tmp/scanora-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn platform_fallback_appends_app_name() {
        let dir = resolve(None, &OnceLock::new(), "SCANORA_TEST_UNSET_VAR", || {
            Some(PathBuf::from("/platform"))
        });
        assert_eq!(dir, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn cli_override_beats_environment() {
        let cli = OnceLock::new();
        let _ = cli.set(Some(PathBuf::from("/from-cli")));
        let dir = resolve(None, &cli, "PATH", || None);
        assert_eq!(dir, Some(PathBuf::from("/from-cli")));
    }

    #[test]
    fn unset_cli_falls_through() {
        let cli = OnceLock::new();
        let _ = cli.set(None);
        let dir = resolve(None, &cli, "SCANORA_TEST_UNSET_VAR", || None);
        assert_eq!(dir, None);
    }
}
