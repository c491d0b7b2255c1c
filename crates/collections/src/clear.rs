use log::debug;
use polycmp_engine::Value;

use crate::error::{CollectionError, CollectionResult};

/// Empty a sequence or keyed collection in place.
pub fn clear(value: &Value) -> CollectionResult<()> {
    match value {
        Value::Array(seq) => seq.write().clear(),
        Value::Object(record) => record.write().clear(),
        other => {
            return Err(CollectionError::NotClearable {
                category: other.category(),
            })
        }
    }
    debug!("cleared {}", value.category());
    Ok(())
}
