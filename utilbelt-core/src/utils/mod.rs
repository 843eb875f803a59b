//! General Utilities.
//!
//! Standalone helper functions, grouped by concern. None of them share state;
//! each can be used on its own.
//!
//! # Submodules
//!
//! - [`apportion`]: largest-remainder rounding that preserves a total.
//! - [`string_utils`]: kebab/snake casing, trimming, search normalization.
//! - [`truthiness`]: falsy/truthy coercion over loosely-typed values.
//! - [`time`]: date parts, timestamps, GMT to US Eastern conversion.
//! - [`collections`]: sorting and keyed replacement in lists of JSON records.
//! - [`query`]: URL parameter extraction with scalar coercion.
//! - [`password`]: random passwords with character-class guarantees.
//! - [`validation`]: e-mail validation.
//! - [`viewport`]: element visibility percentage check.
//! - [`pagination`]: async accumulation of paged results.
//! - [`async_utils`]: sleep, tick, delay and timeout on tokio.
//! - [`fs`] and [`paths`]: directories used by configuration and logging.
//!
//! The most commonly used functions are re-exported here; everything else is
//! reachable through its submodule, e.g. `utilbelt_core::utils::time::parse_gmt`.

pub mod apportion;
pub mod async_utils;
pub mod collections;
pub mod fs;
pub mod pagination;
pub mod password;
pub mod paths;
pub mod query;
pub mod string_utils;
pub mod time;
pub mod truthiness;
pub mod validation;
pub mod viewport;

pub use apportion::{apportion, apportion_optional};
pub use async_utils::{delay, sleep, spawn_task, tick, timeout};
pub use collections::{alphabetize_by, compare_strings, replace_item, Position};
pub use pagination::{collect_pages, paginate, Page};
pub use password::generate_password;
pub use query::{get_param, parse_params};
pub use string_utils::{kebab_case, prepare_search_string, snake_case, trim};
pub use time::{convert_to_eastern, timestamp};
pub use truthiness::{falsy, isset, truthy, Truthy};
pub use validation::validate_email;
pub use viewport::{is_in_viewport, ElementRect};
