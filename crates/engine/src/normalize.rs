//! Unboxing of scalar wrappers before comparison.

use std::borrow::Cow;

use crate::value::Value;

/// Project a value to its comparison-ready form.
///
/// Unwraps exactly one level: a boxed scalar yields its primitive and a
/// self-describing value with an `unwrap` capability yields what it unwraps
/// to. Everything else passes through untouched.
pub fn normalize(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::Boxed(inner) => Cow::Borrowed(&**inner),
        Value::Custom(custom) => match custom.unwrap() {
            Some(primitive) => Cow::Owned(primitive),
            None => Cow::Borrowed(value),
        },
        _ => Cow::Borrowed(value),
    }
}
