//! URL Query Parameter Extraction.
//!
//! Pulls `key=value` pairs out of a URL and coerces the obvious scalar values:
//!
//! - `true` / `false` in any case become booleans,
//! - values made only of ASCII digits become numbers,
//! - everything else is kept verbatim as a string (no percent-decoding).
//!
//! A pair is any `key=value` preceded by one or more of `?`, `&` or `#`. When a
//! key repeats, the last occurrence wins.
//!
//! A value runs up to the next `&` or the end of the input. A `#fragment`
//! that follows a value is therefore part of that value: `?a=1#b=2` yields
//! `a = "1#b=2"` and no `b`. Fragment pairs are only read when the fragment
//! comes first, as in `/page#view=grid&size=10`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};

static PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&#]+([^=&]+)=([^&]*)").expect("Invalid regex pattern"));

/// Parsed parameters, keyed by name.
pub type QueryParams = Map<String, Value>;

fn coerce(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<u64>() {
            return Value::Number(n.into());
        }
        // Too long for u64; fall back to the nearest float.
        if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(raw.to_string())
}

/// Extracts every parameter from `href`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilbelt_core::utils::query::parse_params;
///
/// let params = parse_params("https://example.com/list?page=2&debug=TRUE&tab=open");
/// assert_eq!(params["page"], json!(2));
/// assert_eq!(params["debug"], json!(true));
/// assert_eq!(params["tab"], json!("open"));
///
/// let params = parse_params("https://example.com/list?page=2#top");
/// assert_eq!(params["page"], json!("2#top"));
/// ```
pub fn parse_params(href: &str) -> QueryParams {
    PARAM_PATTERN
        .captures_iter(href)
        .map(|caps| (caps[1].to_string(), coerce(&caps[2])))
        .collect()
}

/// Returns the coerced value of a single parameter, if present.
pub fn get_param(href: &str, key: &str) -> Option<Value> {
    parse_params(href).remove(key)
}
