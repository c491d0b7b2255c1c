use polycmp_engine::{Slot, Value};

use crate::error::{CollectionError, CollectionResult};

/// Replace `delete_count` slots of `array` starting at `start` with `insert`,
/// returning the removed slots.
///
/// A `start` beyond the end pads the sequence with holes first and the
/// deletion stops at the end of the sequence. Holes in `insert` are copied
/// as holes.
pub fn swap(
    array: &Value,
    start: usize,
    delete_count: usize,
    insert: &[Slot],
) -> CollectionResult<Vec<Slot>> {
    let seq = array.as_array().ok_or(CollectionError::NotASequence {
        category: array.category(),
    })?;
    let mut slots = seq.write();
    if start > slots.len() {
        slots.resize_with(start, || None);
    }
    let end = start.saturating_add(delete_count).min(slots.len());
    Ok(slots.splice(start..end, insert.iter().cloned()).collect())
}
