//! List Helpers for JSON Records.
//!
//! Operations on lists of loosely-typed records (`serde_json::Value` objects),
//! as they arrive from API responses before being mapped to concrete types.

use serde_json::Value;
use std::cmp::Ordering;

/// Where [`replace_item`] puts an item whose key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Replace the existing record in place.
    #[default]
    Current,
    /// Remove the existing record and insert the new one at the front.
    First,
}

/// Key used by [`replace_item`] callers that have no better identifier.
pub const DEFAULT_KEY: &str = "id";

/// Compares two strings for an ascending alphabetical sort.
///
/// Usable directly as a `sort_by` callback.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::collections::compare_strings;
///
/// let mut names = vec!["pear", "apple", "fig"];
/// names.sort_by(|a, b| compare_strings(a, b));
/// assert_eq!(names, ["apple", "fig", "pear"]);
/// ```
pub fn compare_strings(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Orders two property values: strings lexicographically, numbers
/// numerically, every other combination (including missing) as equal.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => compare_strings(a, b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

/// Sorts `list` in place by the value of `property` on each record.
///
/// The sort is stable, so records whose values compare equal (or are not
/// comparable) keep their relative order.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilbelt_core::utils::collections::alphabetize_by;
///
/// let mut people = vec![json!({"name": "Zoe"}), json!({"name": "Adam"})];
/// alphabetize_by(&mut people, "name");
/// assert_eq!(people[0]["name"], "Adam");
/// ```
pub fn alphabetize_by(list: &mut [Value], property: &str) {
    list.sort_by(|a, b| compare_values(a.get(property), b.get(property)));
}

/// Replaces the record sharing `item`'s `key`, or inserts `item` at the front.
///
/// The first record whose `key` value equals `item`'s is the one replaced.
/// Records lacking `key` match an `item` that lacks it too.
///
/// Returns a reference to `item` in its new position.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilbelt_core::utils::collections::{replace_item, Position, DEFAULT_KEY};
///
/// let mut rows = vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "b"})];
/// replace_item(&mut rows, json!({"id": 2, "v": "B"}), DEFAULT_KEY, Position::First);
/// assert_eq!(rows, vec![json!({"id": 2, "v": "B"}), json!({"id": 1, "v": "a"})]);
/// ```
pub fn replace_item<'a>(
    list: &'a mut Vec<Value>,
    item: Value,
    key: &str,
    position: Position,
) -> &'a Value {
    let existing = list
        .iter()
        .position(|candidate| candidate.get(key) == item.get(key));

    let index = match (existing, position) {
        (None, _) => {
            list.insert(0, item);
            0
        }
        (Some(index), Position::Current) => {
            list[index] = item;
            index
        }
        (Some(index), Position::First) => {
            list.remove(index);
            list.insert(0, item);
            0
        }
    };
    &list[index]
}
