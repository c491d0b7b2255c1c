//! Polymorphic, type-sensitive deep equivalence.
//!
//! Any value is equivalent to itself, to a boxed version of itself and to
//! any deep clone of itself. Sequences are order-sensitive (indices are
//! keys); keyed collections are not. A sequence is never equivalent to a
//! non-sequence and a string is never equivalent to a number.

use std::collections::BTreeMap;

use crate::config::{CyclePolicy, EngineConfig};
use crate::dispatch::{dispatch_equals, EqualsFn, EqualsScope};
use crate::error::{EqualsError, EqualsResult};
use crate::normalize::normalize;
use crate::value::{Record, Sequence, Slot, Value};

/// Deep equivalence of `a` and `b`.
///
/// Never fails: cycles are treated as equal to themselves.
pub fn equals(a: &Value, b: &Value) -> bool {
    equals_with(a, b, &equals_in)
}

/// Deep equivalence with `nested` deciding every nested pair.
pub fn equals_with(a: &Value, b: &Value, nested: &EqualsFn) -> bool {
    let mut scope = EqualsScope::new(nested, CyclePolicy::AssumeEqual);
    equals_in(a, b, &mut scope)
}

/// Deep equivalence under an explicit configuration.
///
/// With [`CyclePolicy::Reject`] a revisited cycle anywhere in the traversal
/// surfaces as [`EqualsError::CyclicEquivalence`] instead of a verdict.
pub fn try_equals(a: &Value, b: &Value, config: &EngineConfig) -> EqualsResult<bool> {
    let mut scope = EqualsScope::new(&equals_in, config.cycle_policy);
    let verdict = equals_in(a, b, &mut scope);
    match scope.flagged_cycle() {
        Some(id) => Err(EqualsError::CyclicEquivalence { id }),
        None => Ok(verdict),
    }
}

/// One recursion step of Equals. This is the default nested operation.
pub fn equals_in(a: &Value, b: &Value, scope: &mut EqualsScope<'_>) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    let (a, b) = (a.as_ref(), b.as_ref());

    if Value::same(a, b) {
        return true;
    }
    // NaN is the only value that is not the same as itself.
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nullish() || b.is_nullish() {
        return false;
    }

    let Some(id) = a.identity() else {
        return dispatch_equals(a, b, scope).unwrap_or(false);
    };
    let peer = b.identity();
    if scope.in_progress(id, peer) {
        return scope.revisit(id);
    }
    scope.enter(id, peer);
    let verdict = equals_heap(a, b, scope);
    scope.leave(id);
    verdict
}

fn equals_heap(a: &Value, b: &Value, scope: &mut EqualsScope<'_>) -> bool {
    if let Some(verdict) = dispatch_equals(a, b, scope) {
        return verdict;
    }
    match (a, b) {
        (Value::Array(left), Value::Array(right)) => sequences_equal(left, right, scope),
        (Value::Object(left), Value::Object(right)) => records_equal(left, right, scope),
        _ => false,
    }
}

fn sequences_equal(left: &Sequence, right: &Sequence, scope: &mut EqualsScope<'_>) -> bool {
    let left = left.read_recursive();
    let right = right.read_recursive();
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|pair| slots_equal(pair, scope))
}

fn slots_equal((left, right): (&Slot, &Slot), scope: &mut EqualsScope<'_>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => scope.equals(left, right),
        (None, None) => true,
        _ => false,
    }
}

fn records_equal(left: &Record, right: &Record, scope: &mut EqualsScope<'_>) -> bool {
    let left = left.read_recursive();
    let right = right.read_recursive();
    left.len() == right.len() && entries_equal(&left, &right, scope)
}

fn entries_equal(
    left: &BTreeMap<String, Value>,
    right: &BTreeMap<String, Value>,
    scope: &mut EqualsScope<'_>,
) -> bool {
    left.iter().all(|(key, value)| match right.get(key) {
        Some(other) => scope.equals(value, other),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert!(equals(&Value::from(10), &Value::from(10)));
        assert!(!equals(&Value::from(10), &Value::from(11)));
        assert!(equals(&Value::from("a"), &Value::from("a")));
        assert!(!equals(&Value::from(true), &Value::from(1)));
        assert!(equals(&Value::from(0.0), &Value::from(-0.0)));
    }

    #[test]
    fn test_nullish() {
        assert!(equals(&Value::Null, &Value::Null));
        assert!(equals(&Value::Undefined, &Value::Undefined));
        assert!(!equals(&Value::Null, &Value::Undefined));
        assert!(!equals(&Value::Null, &Value::from(0)));
        assert!(!equals(&Value::from(""), &Value::Undefined));
    }

    #[test]
    fn test_shared_node_in_sibling_positions_is_not_a_cycle() {
        let x = Value::array_of([1]);
        let y = Value::array_of([1]);
        let z = Value::array_of([2]);
        let a = Value::array_of([x.clone(), x]);
        let b = Value::array_of([y, z]);
        assert!(!equals(&a, &b));
    }

    #[test]
    fn test_only_a_revisited_pair_short_circuits() {
        let cyclic = Value::new_array();
        cyclic.push(cyclic.clone());
        let finite = Value::array_of([Value::array_of([1])]);
        let mut scope = EqualsScope::new(&equals_in, CyclePolicy::Reject);
        assert!(!equals_in(&cyclic, &finite, &mut scope));
        assert!(!equals_in(&finite, &cyclic, &mut scope));
        assert_eq!(scope.flagged_cycle(), None);
        assert!(scope.memo().is_empty());
    }

    #[test]
    fn test_memo_is_empty_after_call() {
        let a = Value::array_of([Value::array_of([1])]);
        let b = Value::array_of([Value::array_of([1])]);
        let mut scope = EqualsScope::new(&equals_in, CyclePolicy::AssumeEqual);
        assert!(equals_in(&a, &b, &mut scope));
        assert!(scope.memo().is_empty());
    }
}
