//! Row/column transposition, truncated to the shortest row.

use polycmp_engine::{Slot, Value};

use crate::error::{CollectionError, CollectionResult};

/// Transpose a table of rows. The result has one row per column of the
/// shortest input row, so an empty table or an empty row yields nothing.
pub fn transpose(table: &[Vec<Slot>]) -> Vec<Vec<Slot>> {
    let width = table.iter().map(Vec::len).min().unwrap_or(0);
    (0..width)
        .map(|column| table.iter().map(|row| row[column].clone()).collect())
        .collect()
}

/// Transpose a sequence of sequences.
pub fn unzip(table: &Value) -> CollectionResult<Value> {
    let seq = table.as_array().ok_or(CollectionError::NotASequence {
        category: table.category(),
    })?;
    let rows = seq.read().clone();
    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, slot)| row_slots(slot.as_ref(), index))
        .collect::<CollectionResult<Vec<_>>>()?;
    Ok(into_table(transpose(&rows)))
}

/// Transpose the given rows: the first result row holds the first element
/// of every input row, and so on.
pub fn zip(rows: &[Value]) -> CollectionResult<Value> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_slots(Some(row), index))
        .collect::<CollectionResult<Vec<_>>>()?;
    Ok(into_table(transpose(&rows)))
}

fn row_slots(row: Option<&Value>, index: usize) -> CollectionResult<Vec<Slot>> {
    match row {
        Some(Value::Array(seq)) => Ok(seq.read().clone()),
        _ => Err(CollectionError::NotARow { index }),
    }
}

fn into_table(rows: Vec<Vec<Slot>>) -> Value {
    Value::array_of(rows.into_iter().map(Value::array))
}
