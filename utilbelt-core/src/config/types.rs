//! Configuration Data Structures.
//!
//! Deserialized from TOML. Every field has a default (see [`super::defaults`]),
//! so an empty file is a valid configuration. Unknown keys are rejected.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use utilbelt_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/utilbelt.log"
/// "#).unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.file_path, Some(PathBuf::from("/var/log/utilbelt.log")));
/// assert_eq!(config.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (any case).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the
    /// application state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json" (any case).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Settings for [`crate::utils::password::PasswordGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordConfig {
    /// Length of generated passwords when the caller does not pass one.
    #[serde(default = "defaults::default_password_length")]
    pub default_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        defaults::default_password_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use utilbelt_core::config::CoreConfig;
///
/// let config: CoreConfig = toml::from_str(r#"
/// [password]
/// default_length = 16
/// "#).unwrap();
/// assert_eq!(config.password.default_length, 16);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_password_config")]
    pub password: PasswordConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.file_path, None);
        assert_eq!(config.password.default_length, 8);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: CoreConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.password, PasswordConfig::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<CoreConfig>("[metrics]\nenabled = true\n").is_err());
        assert!(toml::from_str::<CoreConfig>("[logging]\ncolour = \"red\"\n").is_err());
        assert!(toml::from_str::<CoreConfig>("[password]\nsymbols = false\n").is_err());
    }
}
