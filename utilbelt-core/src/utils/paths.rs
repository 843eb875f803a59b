//! Application Directory Resolution.
//!
//! Resolves the per-user directories utilbelt reads its configuration from
//! and writes its log files to, using `directories-next`.
//!
//! On Linux these are `~/.config/utilbelt` and `~/.local/state/utilbelt`
//! (honoring `XDG_CONFIG_HOME` / `XDG_STATE_HOME`).
//!
//! Both functions fail with [`ConfigError::DirectoryUnavailable`] when no home
//! directory can be determined.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "utilbelt";
const APPLICATION: &str = "utilbelt";

/// Name of the configuration file inside [`get_app_config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn unavailable(dir_type: &str) -> CoreError {
    CoreError::Config(ConfigError::DirectoryUnavailable {
        dir_type: dir_type.to_string(),
    })
}

/// Returns the application-specific configuration directory.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] if it cannot be determined.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| unavailable("App Config"))
}

/// Returns the default path of the configuration file.
pub fn get_default_config_path() -> Result<PathBuf, CoreError> {
    get_app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Returns the application-specific state directory, used for log files.
///
/// `directories-next` has no state directory, so on Linux this is built from
/// `XDG_STATE_HOME` (falling back to `~/.local/state`); elsewhere the local
/// data directory is used.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] if it cannot be determined.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            let base = match std::env::var("XDG_STATE_HOME") {
                Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                _ => dirs.home_dir().join(".local/state"),
            };
            #[cfg(not(target_os = "linux"))]
            let base = dirs.data_local_dir().to_path_buf();
            base.join(APPLICATION)
        })
        .ok_or_else(|| unavailable("App State"))
}
