use chrono::{Duration, Utc};
use polycmp_engine::{
    compare, compare_with, CompareError, CompareResult, CompareScope, SelfDescribing, Value,
};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

fn cmp(a: &Value, b: &Value) -> f64 {
    compare(a, b).expect("comparison should succeed")
}

fn nested(values: &[&[i32]]) -> Value {
    Value::array_of(values.iter().map(|inner| Value::array_of(inner.iter().copied())))
}

// Orders itself by a numeric key, recursing through the scope.
#[derive(Debug)]
struct Keyed {
    key: f64,
}

impl SelfDescribing for Keyed {
    fn compare(&self, other: &Value, scope: &mut CompareScope<'_>) -> Option<CompareResult<f64>> {
        Some(scope.compare(&Value::from(self.key), other))
    }
}

// Always claims to sort first and insists on seeing an absent peer.
#[derive(Debug)]
struct SortsFirst {
    expected_peer: Value,
}

impl SelfDescribing for SortsFirst {
    fn compare(&self, other: &Value, _scope: &mut CompareScope<'_>) -> Option<CompareResult<f64>> {
        assert!(Value::same(other, &self.expected_peer));
        Some(Ok(-1.0))
    }
}

#[test]
fn test_compares_numbers() {
    assert_eq!(cmp(&Value::from(0), &Value::from(10)), -10.0);
    assert_eq!(cmp(&Value::from(5), &Value::from(-5)), 10.0);
    assert_eq!(cmp(&Value::from(f64::NAN), &Value::from(f64::NAN)), 0.0);
    assert_eq!(cmp(&Value::from(NEG_INF), &Value::from(INF)), NEG_INF);
    assert_eq!(cmp(&Value::from(INF), &Value::from(NEG_INF)), INF);
}

#[test]
fn test_compares_boxed_numbers() {
    let zero = Value::boxed(Value::from(0));
    let ten = Value::boxed(Value::from(10));
    assert_eq!(cmp(&zero, &Value::from(10)), -10.0);
    assert_eq!(cmp(&zero, &ten), -10.0);
    assert_eq!(cmp(&Value::from(0), &ten), -10.0);
}

#[test]
fn test_compares_strings() {
    assert_eq!(cmp(&Value::from("abc"), &Value::from("abc")), 0.0);
    assert_eq!(cmp(&Value::from("a"), &Value::from("b")), NEG_INF);
    assert_eq!(cmp(&Value::from("b"), &Value::from("a")), INF);
}

#[test]
fn test_string_is_less_than_prefixed_string() {
    assert_eq!(cmp(&Value::from("ab"), &Value::from("abc")), NEG_INF);
    assert_eq!(cmp(&Value::from("abc"), &Value::from("ab")), INF);
}

#[test]
fn test_compares_dates() {
    let start = Utc::now();
    let later = start + Duration::seconds(1);
    assert_eq!(cmp(&Value::date(start), &Value::date(start)), 0.0);
    assert_eq!(cmp(&Value::date(start), &Value::date(later)), NEG_INF);
    assert_eq!(cmp(&Value::date(later), &Value::date(start)), INF);
}

#[test]
fn test_compares_equivalent_arrays() {
    assert_eq!(cmp(&Value::new_array(), &Value::new_array()), 0.0);
    assert_eq!(cmp(&Value::array_of([1]), &Value::new_array()), INF);
    assert_eq!(cmp(&Value::new_array(), &Value::array_of([1])), NEG_INF);
}

#[test]
fn test_compares_arrays_with_holes() {
    assert_eq!(cmp(&Value::holes(1), &Value::holes(1)), 0.0);
    assert_eq!(cmp(&Value::holes(1), &Value::holes(2)), -1.0);
    assert_eq!(cmp(&Value::holes(3), &Value::holes(2)), 1.0);
    assert_eq!(cmp(&Value::array_of([0]), &Value::holes(1)), INF);
    assert_eq!(cmp(&Value::holes(1), &Value::array_of([0])), NEG_INF);
}

#[test]
fn test_first_differing_index_decides() {
    let a = Value::array([None, Some(Value::from(5))]);
    let b = Value::array_of([1, 0]);
    assert_eq!(cmp(&a, &b), NEG_INF);
    assert_eq!(cmp(&Value::array_of([1, 9]), &Value::array_of([2, 0])), -1.0);
}

#[test]
fn test_compares_nested_respective_values() {
    assert_eq!(cmp(&nested(&[&[]]), &nested(&[&[]])), 0.0);
    assert_eq!(cmp(&nested(&[&[1]]), &nested(&[&[0]])), 1.0);
    assert_eq!(cmp(&nested(&[&[1]]), &nested(&[&[1]])), 0.0);
    assert_eq!(cmp(&nested(&[&[0]]), &nested(&[&[1]])), -1.0);
}

#[test]
fn test_compares_nested_values_to_holes() {
    assert_eq!(cmp(&nested(&[&[1]]), &nested(&[&[]])), INF);
    assert_eq!(cmp(&nested(&[&[]]), &nested(&[&[1]])), NEG_INF);
}

#[test]
fn test_compares_arrays_with_reference_cycles() {
    let array = Value::new_array();
    array.push(array.clone());
    assert_eq!(cmp(&array, &array), 0.0);
}

#[test]
fn test_cannot_compare_equivalent_arrays_with_reference_cycles() {
    let a = Value::new_array();
    a.push(a.clone());
    let b = Value::new_array();
    b.push(b.clone());
    let err = compare(&a, &b).unwrap_err();
    assert_eq!(
        err,
        CompareError::CyclicOrdering {
            id: a.identity().unwrap()
        }
    );
}

#[test]
fn test_shared_acyclic_node_is_not_a_cycle() {
    let shared = Value::array_of([1]);
    let a = Value::array_of([shared.clone(), shared.clone()]);
    let b = Value::array_of([shared, Value::array_of([2])]);
    assert_eq!(cmp(&a, &b), -1.0);
}

#[test]
fn test_incompatible_types_are_incomparable() {
    assert_eq!(cmp(&Value::new_array(), &Value::new_object()), 0.0);
    assert_eq!(cmp(&Value::from(""), &Value::new_object()), 0.0);
    assert_eq!(cmp(&Value::from(1), &Value::from("1")), 0.0);
    assert_eq!(cmp(&Value::opaque(1u8), &Value::opaque(2u8)), 0.0);
    assert_eq!(
        cmp(
            &Value::object([("a", Value::from(1))]),
            &Value::object([("a", Value::from(2))])
        ),
        0.0
    );
}

#[test]
fn test_polymorphism_uses_left_hand_side() {
    let fake = Value::custom(SortsFirst {
        expected_peer: Value::Undefined,
    });
    assert_eq!(cmp(&fake, &Value::default()), -1.0);
}

#[test]
fn test_polymorphism_uses_right_hand_side_negated() {
    let fake = Value::custom(SortsFirst {
        expected_peer: Value::Null,
    });
    assert_eq!(cmp(&Value::Null, &fake), 1.0);
}

#[test]
fn test_antisymmetric_under_custom_dispatch() {
    let samples = [
        Value::from(5),
        Value::from(-2.5),
        Value::custom(Keyed { key: 2.0 }),
        Value::custom(Keyed { key: 7.0 }),
        Value::boxed(Value::from(3)),
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(cmp(a, b), -cmp(b, a), "{a:?} vs {b:?}");
        }
    }
    assert_eq!(cmp(&Value::from(5), &samples[2]), 3.0);
    assert_eq!(cmp(&samples[2], &Value::from(5)), -3.0);
}

#[test]
fn test_custom_values_nest_inside_sequences() {
    let a = Value::array_of([Value::custom(Keyed { key: 1.0 })]);
    let b = Value::array_of([Value::from(4)]);
    assert_eq!(cmp(&a, &b), -3.0);
}

#[test]
fn test_allows_the_nested_comparison_to_be_overridden() {
    fn dont_care(_: &Value, _: &Value, _: &mut CompareScope<'_>) -> CompareResult<f64> {
        Ok(0.0)
    }
    let a = Value::array_of([10]);
    let b = Value::array_of([20]);
    assert_eq!(cmp(&a, &b), -10.0);
    assert_eq!(compare_with(&a, &b, &dont_care).unwrap(), 0.0);
}
