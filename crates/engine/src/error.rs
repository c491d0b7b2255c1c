//! Error types for the comparison engines.

use thiserror::Error;

use crate::identity::ObjectId;

/// Errors raised by Compare.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    /// A structure was reached again while it was still being ordered.
    #[error("Cannot order cyclic structure {id} against a structure it contains")]
    CyclicOrdering { id: ObjectId },
}

/// Errors raised by Equals under [`CyclePolicy::Reject`](crate::CyclePolicy::Reject).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EqualsError {
    /// A structure was reached again while it was still being compared.
    #[error("Cannot decide equivalence of cyclic structure {id}")]
    CyclicEquivalence { id: ObjectId },
}

/// Result type for Compare.
pub type CompareResult<T> = Result<T, CompareError>;

/// Result type for fallible Equals.
pub type EqualsResult<T> = Result<T, EqualsError>;
