//! Error handling for the utilbelt core crate.
//!
//! Most helpers in this crate are infallible: they coerce bad input instead of
//! rejecting it. The operations that do touch the outside world (configuration
//! files, log files, date parsing) report failures through the types defined
//! here, all built with `thiserror`.
//!
//! The main error type is [`CoreError`], which wraps the more specific
//! [`ConfigError`] and [`LoggingError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use utilbelt_core::error::CoreError;
//! use utilbelt_core::utils::time::parse_gmt;
//!
//! fn release_year(date: &str) -> Result<i32, CoreError> {
//!     use chrono::Datelike;
//!     Ok(parse_gmt(date)?.year())
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the utilbelt crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operations that failed on a known path.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A date string that none of the accepted formats could parse.
    #[error("Invalid date: '{input}'")]
    InvalidDate { input: String },

    /// Catch-all for unexpected internal errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a configuration file failed.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsed values are out of range or unknown.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The global subscriber could not be installed, or the config was unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),
}
