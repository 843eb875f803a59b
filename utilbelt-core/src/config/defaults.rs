//! Default configuration values.
//!
//! Referenced from `#[serde(default = "...")]` attributes in [`super::types`].

use super::types::{LoggingConfig, PasswordConfig};
use crate::utils::password::DEFAULT_PASSWORD_LENGTH;
use std::path::PathBuf;

pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file unless one is configured.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(super) fn default_log_format() -> String {
    "text".to_string()
}

pub(super) fn default_password_config() -> PasswordConfig {
    PasswordConfig {
        default_length: default_password_length(),
    }
}

pub(super) fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
