//! Configuration Loading.
//!
//! [`ConfigLoader`] locates `config.toml`, parses it into a [`CoreConfig`] and
//! validates the result. Validation:
//! - normalizes the log level and format to lowercase and rejects unknown ones,
//! - resolves a relative log file path against the application state
//!   directory and creates the log file's parent directory,
//! - checks that the default password length is within bounds.
//!
//! The file location can be overridden with the `UTILBELT_CONFIG_PATH`
//! environment variable.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs as util_fs;
use crate::utils::password::MIN_PASSWORD_LENGTH;
use crate::utils::paths::{get_app_state_dir, get_default_config_path};

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "UTILBELT_CONFIG_PATH";

const MAX_PASSWORD_LENGTH: usize = 1024;

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from its default location.
    ///
    /// The path is taken from `UTILBELT_CONFIG_PATH` when set and non-empty,
    /// otherwise `config.toml` in the application config directory.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load_from_path`]. Additionally fails with
    /// [`ConfigError::DirectoryUnavailable`] if no config directory can be
    /// determined.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => get_default_config_path()?,
        };
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// A file that does not exist, or contains only whitespace, yields the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if the file exists but cannot be read.
    /// - [`ConfigError::ParseError`] if it is not valid TOML for [`CoreConfig`].
    /// - [`ConfigError::ValidationError`] if a value is out of range.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                String::new()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };

        let config = Self::load_from_str(&content)?;
        debug!(path = %path.display(), level = %config.logging.level, "Configuration loaded");
        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let needs_state_dir = config
            .logging
            .file_path
            .as_deref()
            .is_some_and(|path| !path.is_absolute());
        let state_dir = if needs_state_dir {
            Some(get_app_state_dir()?)
        } else {
            None
        };
        Self::validate_config_in(config, state_dir.as_deref())
    }

    /// Validation with the state directory supplied by the caller.
    /// `state_dir` is only consulted for a relative log file path.
    fn validate_config_in(config: &mut CoreConfig, state_dir: Option<&Path>) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format = config.logging.format.to_lowercase();
        match format.as_str() {
            "text" | "json" => config.logging.format = format,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(path) = config.logging.file_path.take() {
            let absolute = if path.is_absolute() {
                path
            } else {
                let state_dir = state_dir.ok_or_else(|| ConfigError::DirectoryUnavailable {
                    dir_type: "App State".to_string(),
                })?;
                state_dir.join(path)
            };
            if let Some(parent) = absolute.parent() {
                util_fs::ensure_dir_exists(parent)?;
            }
            config.logging.file_path = Some(absolute);
        }

        let length = config.password.default_length;
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid password length: {}. Must be between {} and {}.",
                length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ))
            .into());
        }

        Ok(())
    }
}
