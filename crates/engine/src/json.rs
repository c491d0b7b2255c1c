//! Building [`Value`] graphs from `serde_json::Value`.

use crate::value::Value;

impl Value {
    /// Build a value graph from JSON. Arrays become dense sequences, objects
    /// become keyed collections and every number becomes an `f64`.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::array_of(items.iter().map(Value::from_json)),
            serde_json::Value::Object(fields) => Value::object(
                fields
                    .iter()
                    .map(|(key, field)| (key.clone(), Value::from_json(field))),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equals::equals;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let value = Value::from_json(&json!({"a": [1, 2, {"b": null}], "c": "x"}));
        let expected = Value::object([
            (
                "a",
                Value::array_of([
                    Value::from(1),
                    Value::from(2),
                    Value::object([("b", Value::Null)]),
                ]),
            ),
            ("c", Value::from("x")),
        ]);
        assert!(equals(&value, &expected));
    }

    #[test]
    fn test_from_json_builds_fresh_nodes() {
        let document = json!([[1], [1]]);
        let value = Value::from_json(&document);
        let (Some(first), Some(second)) = (value.get_index(0), value.get_index(1)) else {
            panic!("expected two rows in {value:?}");
        };
        assert!(!Value::same(&first, &second));
        assert!(equals(&first, &second));
        assert_eq!(value.array_len(), Some(2));
    }
}
