//! Input validation helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// Local part: dot-separated atoms of non-special characters, or a quoted string.
// Domain: a bracketed IPv4 literal, or dotted labels ending in a 2+ letter TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid regex pattern")
});

/// Validates an e-mail address.
///
/// The address is lowercased before matching; on success the lowercased form
/// is returned. Missing or empty input yields `None`.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::validation::validate_email;
///
/// assert_eq!(validate_email(Some("Jane.Doe@Example.COM")), Some("jane.doe@example.com".to_string()));
/// assert_eq!(validate_email(Some("not-an-address")), None);
/// assert_eq!(validate_email(None), None);
/// ```
pub fn validate_email(email: Option<&str>) -> Option<String> {
    let email = email.filter(|e| !e.is_empty())?.to_lowercase();
    EMAIL_PATTERN.is_match(&email).then_some(email)
}
