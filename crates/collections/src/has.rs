use log::trace;
use polycmp_engine::{equals_in, CyclePolicy, EqualsFn, EqualsScope, Value};

/// Whether any present element of a sequence, or any value of a keyed
/// collection, is equivalent to `sought`.
///
/// Other values contain nothing.
pub fn has(collection: &Value, sought: &Value) -> bool {
    has_with(collection, sought, &equals_in)
}

/// [`has`] with `equals` deciding each candidate.
pub fn has_with(collection: &Value, sought: &Value, equals: &EqualsFn) -> bool {
    let mut scope = EqualsScope::new(equals, CyclePolicy::AssumeEqual);
    let found = match collection {
        Value::Array(seq) => seq
            .read_recursive()
            .iter()
            .flatten()
            .any(|element| scope.equals(sought, element)),
        Value::Object(record) => record
            .read_recursive()
            .values()
            .any(|field| scope.equals(sought, field)),
        _ => false,
    };
    trace!("has: {} in {} -> {found}", sought.category(), collection.category());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_equivalent_elements() {
        let haystack = Value::array_of([Value::array_of([1, 2]), Value::from("x")]);
        assert!(has(&haystack, &Value::array_of([1, 2])));
        assert!(has(&haystack, &Value::boxed(Value::from("x"))));
        assert!(!has(&haystack, &Value::array_of([2, 1])));
    }

    #[test]
    fn test_skips_holes() {
        let sparse = Value::array([None, Some(Value::from(1))]);
        assert!(!has(&sparse, &Value::Undefined));
        assert!(has(&sparse, &Value::from(1)));
    }

    #[test]
    fn test_searches_object_values() {
        let record = Value::object([("a", Value::from(1)), ("b", Value::Null)]);
        assert!(has(&record, &Value::Null));
        assert!(!has(&record, &Value::from("a")));
    }

    #[test]
    fn test_scalars_contain_nothing() {
        assert!(!has(&Value::from("abc"), &Value::from("a")));
        assert!(!has(&Value::Undefined, &Value::Undefined));
    }

    #[test]
    fn test_custom_equality() {
        fn same_category(a: &Value, b: &Value, _: &mut EqualsScope<'_>) -> bool {
            a.category() == b.category()
        }
        let haystack = Value::array_of([1, 2]);
        assert!(!has(&haystack, &Value::from(3)));
        assert!(has_with(&haystack, &Value::from(3), &same_category));
    }
}
