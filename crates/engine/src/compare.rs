//! Polymorphic total-order comparison.
//!
//! The result is an extended real number. Zero means the operands are
//! order-equivalent *or* incomparable, which is why Equals cannot be defined
//! in terms of Compare. A finite non-zero result is a magnitude and only
//! arises from numbers; infinities carry direction alone and are used for
//! strings, dates, booleans and value/hole mismatches.

use std::cmp::Ordering;

use log::debug;

use crate::dispatch::{dispatch_compare, CompareFn, CompareScope};
use crate::error::{CompareError, CompareResult};
use crate::normalize::normalize;
use crate::value::{Sequence, Value};

/// Order `a` relative to `b`: negative when `a` sorts first.
///
/// Fails only when a structure has to be ordered against something it
/// contains through a cycle. Comparing a cyclic structure with itself is 0.
pub fn compare(a: &Value, b: &Value) -> CompareResult<f64> {
    compare_with(a, b, &compare_in)
}

/// Order `a` relative to `b` with `nested` ordering every nested pair.
pub fn compare_with(a: &Value, b: &Value, nested: &CompareFn) -> CompareResult<f64> {
    let mut scope = CompareScope::new(nested);
    compare_in(a, b, &mut scope)
}

/// One recursion step of Compare. This is the default nested operation.
pub fn compare_in(a: &Value, b: &Value, scope: &mut CompareScope<'_>) -> CompareResult<f64> {
    let a = normalize(a);
    let b = normalize(b);
    let (a, b) = (a.as_ref(), b.as_ref());

    // Identity comes before the memo so a cycle compared with itself is 0.
    if Value::same(a, b) {
        return Ok(0.0);
    }

    let Some(id) = a.identity() else {
        return match dispatch_compare(a, b, scope) {
            Some(result) => result,
            None => Ok(compare_scalars(a, b)),
        };
    };
    if scope.memo().has(id) {
        debug!("compare: {id} reached again while still being ordered");
        return Err(CompareError::CyclicOrdering { id });
    }
    scope.memo().set(id, ());
    let result = compare_heap(a, b, scope);
    scope.memo().delete(id);
    result
}

fn compare_heap(a: &Value, b: &Value, scope: &mut CompareScope<'_>) -> CompareResult<f64> {
    if let Some(result) = dispatch_compare(a, b, scope) {
        return result;
    }
    match (a, b) {
        (Value::Array(left), Value::Array(right)) => compare_sequences(left, right, scope),
        _ => Ok(0.0),
    }
}

fn compare_scalars(a: &Value, b: &Value) -> f64 {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let difference = x - y;
            if difference.is_nan() {
                0.0
            } else {
                difference
            }
        }
        (Value::String(x), Value::String(y)) => direction(x.encode_utf16().cmp(y.encode_utf16())),
        (Value::Date(x), Value::Date(y)) => direction(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => direction(x.cmp(y)),
        _ => 0.0,
    }
}

fn direction(ordering: Ordering) -> f64 {
    match ordering {
        Ordering::Less => f64::NEG_INFINITY,
        Ordering::Equal => 0.0,
        Ordering::Greater => f64::INFINITY,
    }
}

/// Walk both sequences index by index. The first pair that differs decides;
/// a present element outranks a hole or the end of the shorter sequence.
/// Otherwise only the lengths (holes included) are left to compare.
fn compare_sequences(
    left: &Sequence,
    right: &Sequence,
    scope: &mut CompareScope<'_>,
) -> CompareResult<f64> {
    let left = left.read_recursive();
    let right = right.read_recursive();

    for index in 0..left.len().max(right.len()) {
        let l = left.get(index).and_then(Option::as_ref);
        let r = right.get(index).and_then(Option::as_ref);
        match (l, r) {
            (Some(l), Some(r)) => {
                let order = scope.compare(l, r)?;
                if order != 0.0 {
                    return Ok(order);
                }
            }
            (Some(_), None) => return Ok(f64::INFINITY),
            (None, Some(_)) => return Ok(f64::NEG_INFINITY),
            (None, None) => {}
        }
    }

    Ok(match left.len().cmp(&right.len()) {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    })
}
