//! Loose Truthiness Coercion.
//!
//! Decides whether a loosely-typed value counts as "set". The rules are more
//! forgiving than a plain emptiness check, so that values coming from forms,
//! query strings or JSON payloads can be tested without first normalizing
//! them:
//!
//! | value                         | falsy when                                   |
//! |-------------------------------|----------------------------------------------|
//! | string                        | blank, or `"false"` in any case after trimming |
//! | bool                          | `false`                                      |
//! | number                        | zero, NaN or infinite                        |
//! | null / `None`                 | always                                       |
//! | array / object / slice        | empty                                        |
//!
//! [`falsy`] and [`truthy`] operate on [`serde_json::Value`]; the [`Truthy`]
//! trait applies the same table to plain Rust types.

use serde_json::Value;

/// Types that can be tested with the loose truthiness rules.
pub trait Truthy {
    /// Returns `true` if the value counts as unset.
    fn is_falsy(&self) -> bool;

    /// Returns `true` if the value counts as set.
    fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }
}

impl Truthy for str {
    fn is_falsy(&self) -> bool {
        self.trim().eq_ignore_ascii_case("false") || self.chars().all(char::is_whitespace)
    }
}

impl Truthy for String {
    fn is_falsy(&self) -> bool {
        self.as_str().is_falsy()
    }
}

impl Truthy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Truthy for f64 {
    fn is_falsy(&self) -> bool {
        !self.is_finite() || *self == 0.0
    }
}

impl Truthy for f32 {
    fn is_falsy(&self) -> bool {
        f64::from(*self).is_falsy()
    }
}

macro_rules! impl_truthy_for_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Truthy> Truthy for Option<T> {
    fn is_falsy(&self) -> bool {
        self.as_ref().map_or(true, |value| value.is_falsy())
    }
}

impl<T> Truthy for [T] {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl Truthy for Value {
    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => b.is_falsy(),
            Value::Number(n) => n.as_f64().map_or(true, |f| f.is_falsy()),
            Value::String(s) => s.is_falsy(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

/// Returns `true` if `value` counts as unset.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use utilbelt_core::utils::truthiness::falsy;
///
/// assert!(falsy(&json!(" FALSE ")));
/// assert!(falsy(&json!("   ")));
/// assert!(falsy(&json!(0)));
/// assert!(falsy(&json!({})));
/// assert!(!falsy(&json!("no")));
/// assert!(!falsy(&json!([0])));
/// ```
pub fn falsy(value: &Value) -> bool {
    value.is_falsy()
}

/// Returns `true` if `value` counts as set. The negation of [`falsy`].
pub fn truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Alias of [`falsy`].
pub fn is_empty(value: &Value) -> bool {
    falsy(value)
}

/// Alias of [`truthy`].
pub fn isset(value: &Value) -> bool {
    truthy(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(true), false)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(-3), false)]
    #[case(json!(0.5), false)]
    #[case(json!(""), true)]
    #[case(json!(" \t\n"), true)]
    #[case(json!("false"), true)]
    #[case(json!("  False  "), true)]
    #[case(json!("falsey"), false)]
    #[case(json!("0"), false)]
    #[case(json!("true"), false)]
    #[case(json!([]), true)]
    #[case(json!([null]), false)]
    #[case(json!({}), true)]
    #[case(json!({"a": 1}), false)]
    fn test_falsy_json(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(falsy(&value), expected, "falsy({})", value);
        assert_eq!(truthy(&value), !expected, "truthy({})", value);
    }

    #[test]
    fn test_aliases_match() {
        let set = json!("value");
        let unset = json!("");
        assert!(isset(&set));
        assert!(!is_empty(&set));
        assert!(!isset(&unset));
        assert!(is_empty(&unset));
    }

    #[test]
    fn test_truthy_trait_primitives() {
        assert!("FALSE".is_falsy());
        assert!(String::from("  ").is_falsy());
        assert!("yes".is_truthy());
        assert!(0_u32.is_falsy());
        assert!(7_i64.is_truthy());
        assert!(f64::NAN.is_falsy());
        assert!(f64::INFINITY.is_falsy());
        assert!(0.25_f64.is_truthy());
        assert!(false.is_falsy());
    }

    #[test]
    fn test_truthy_trait_containers() {
        assert!(None::<i32>.is_falsy());
        assert!(Some(0).is_falsy());
        assert!(Some(3).is_truthy());
        assert!(Vec::<u8>::new().is_falsy());
        assert!(vec![0_u8].is_truthy());
        let slice: &[i32] = &[];
        assert!(slice.is_falsy());
    }
}
