use polycmp_engine::{normalize, Category, Record, Slot, Value};

use crate::error::{CollectionError, CollectionResult};

/// Copy the elements of an array-like value into a fresh list of slots.
///
/// Nullish values have no elements, strings yield one element per `char`
/// and keyed collections count as array-like when they carry a numeric
/// `length` field no larger than their key count. Holes survive the copy.
pub fn arrayify(value: &Value) -> CollectionResult<Vec<Slot>> {
    let value = normalize(value);
    match value.as_ref() {
        Value::Undefined | Value::Null => Ok(Vec::new()),
        Value::Array(seq) => Ok(seq.read().clone()),
        Value::String(s) => Ok(s
            .chars()
            .map(|c| Some(Value::String(c.to_string())))
            .collect()),
        Value::Object(record) => array_like(record),
        other => Err(CollectionError::NotArrayLike {
            category: other.category(),
        }),
    }
}

fn array_like(record: &Record) -> CollectionResult<Vec<Slot>> {
    let fields = record.read();
    let length = match fields.get("length") {
        Some(Value::Number(n)) if n.is_finite() && *n >= 0.0 => n.trunc(),
        _ => {
            return Err(CollectionError::NotArrayLike {
                category: Category::KeyedCollection,
            })
        }
    };
    if length > fields.len() as f64 {
        return Err(CollectionError::LengthOutOfRange {
            length,
            keys: fields.len(),
        });
    }
    let length = length as usize;
    Ok((0..length)
        .map(|index| fields.get(&index.to_string()).cloned())
        .collect())
}
