//! Configuration Management.
//!
//! The configuration lives in a single TOML file, `config.toml` in the
//! application config directory (see [`crate::utils::paths`]). It has two
//! sections, both optional:
//!
//! ```toml
//! [logging]
//! level = "debug"        # trace | debug | info | warn | error
//! format = "json"        # text | json
//! file_path = "utilbelt.log"
//!
//! [password]
//! default_length = 12
//! ```
//!
//! [`ConfigLoader::load`] reads, parses and validates it; a missing or blank
//! file yields the defaults.

mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_PATH_ENV};
pub use types::{CoreConfig, LoggingConfig, PasswordConfig};
