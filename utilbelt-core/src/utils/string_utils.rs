//! String Manipulation Utilities.
//!
//! Helpers for normalizing free-form text into identifiers and search keys.
//!
//! # Key Functions
//!
//! - [`kebab_case()`]: lowercases and joins words with `-`.
//! - [`snake_case()`]: lowercases and joins words with `_`.
//! - [`trim()`]: strips leading and trailing whitespace.
//! - [`prepare_search_string()`]: lowercases and drops all whitespace, for
//!   case- and space-insensitive matching.
//!
//! Word boundaries are runs of whitespace, `-` and `_`. Unlike a full
//! camelCase-aware converter, uppercase letters do not start a new word:
//! `"HelloWorld"` becomes `"helloworld"`. Leading and trailing separators are
//! kept (collapsed to a single separator), so `" a b "` becomes `"-a-b-"`.

/// Lowercases `s` and collapses every run of separators into `separator`.
fn join_words(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_separator_run = false;

    for c in s.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !in_separator_run {
                result.push(separator);
                in_separator_run = true;
            }
        } else {
            result.extend(c.to_lowercase());
            in_separator_run = false;
        }
    }
    result
}

/// Converts a string to `kebab-case`.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::string_utils::kebab_case;
/// assert_eq!(kebab_case("Quarterly Report"), "quarterly-report");
/// assert_eq!(kebab_case("user_account--id"), "user-account-id");
/// assert_eq!(kebab_case(""), "");
/// ```
pub fn kebab_case(s: &str) -> String {
    join_words(s, '-')
}

/// Converts a string to `snake_case`.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::string_utils::snake_case;
/// assert_eq!(snake_case("Quarterly Report"), "quarterly_report");
/// assert_eq!(snake_case("user-account__id"), "user_account_id");
/// ```
pub fn snake_case(s: &str) -> String {
    join_words(s, '_')
}

/// Strips leading and trailing whitespace.
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Normalizes a string for loose matching: lowercase, no whitespace at all.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::string_utils::prepare_search_string;
/// assert_eq!(prepare_search_string("  New York City "), "newyorkcity");
/// assert_eq!(prepare_search_string(""), "");
/// ```
pub fn prepare_search_string(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
