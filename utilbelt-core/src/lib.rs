//! # Utilbelt Core Library (`utilbelt-core`)
//!
//! A collection of small, independent helper functions for application code:
//! rounding that preserves totals, string casing, loose truthiness checks,
//! date formatting, list manipulation, URL parameter parsing, password
//! generation, viewport math and async pagination.
//!
//! The centerpiece is [`apportion`](mod@utils::apportion), a largest-remainder rounding
//! routine: it turns a list of fractional values into integers whose sum hits
//! a requested total, e.g. percentages that must add up to exactly 100.
//!
//! Around the helpers sit the usual application plumbing:
//!
//! - **Error Handling**: [`CoreError`] with the more specific [`ConfigError`]
//!   and [`LoggingError`].
//! - **Configuration**: TOML loading and validation through [`ConfigLoader`].
//! - **Logging**: `tracing` subscribers for console and file output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use utilbelt_core::config::ConfigLoader;
//! use utilbelt_core::logging::init_logging;
//! use utilbelt_core::utils::apportion;
//! use utilbelt_core::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!
//!     let shares = apportion(&[33.3, 33.3, 33.4], 100);
//!     tracing::info!(?shares, "Rounded shares");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, PasswordConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging, trace_when_debug};
pub use utils::{apportion, apportion_optional};
