//! Error types for the collection helpers.

use polycmp_engine::Category;
use thiserror::Error;

/// Errors raised when a helper receives a value it cannot work on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    /// Only sequences and keyed collections can be emptied.
    #[error("Can't clear a {category}")]
    NotClearable { category: Category },

    /// The value has no element view.
    #[error("Can't convert a {category} to an array")]
    NotArrayLike { category: Category },

    /// An array-like record claims more indices than it has keys.
    #[error("Array-like length {length} exceeds the {keys} keys of the record")]
    LengthOutOfRange { length: f64, keys: usize },

    /// A sequence was required.
    #[error("Expected a sequence, found a {category}")]
    NotASequence { category: Category },

    /// A table row is a hole or not a sequence.
    #[error("Row {index} of the table is not a sequence")]
    NotARow { index: usize },
}

/// Result type for the collection helpers.
pub type CollectionResult<T> = Result<T, CollectionError>;
