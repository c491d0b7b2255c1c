//! Deep equivalence and total-order comparison over dynamic value graphs.
//!
//! This crate provides two operations that work uniformly across scalars,
//! boxed scalars, sparse sequences, keyed collections and values that
//! describe their own comparison logic:
//!
//! - **Equals**: polymorphic, type-sensitive deep equivalence.
//! - **Compare**: an ordering whose result is an extended real number, where
//!   numbers yield a magnitude and everything else a direction only.
//!
//! Both operations normalize boxed scalars, let self-describing operands
//! decide for themselves, otherwise recurse structurally, and use a per-call
//! identity memo so cyclic graphs always terminate.
//!
//! # Example
//!
//! ```
//! use polycmp_engine::{compare, equals, Value};
//!
//! let a = Value::array_of([1, 2, 3]);
//! let b = Value::array_of([1, 2, 3]);
//! assert!(equals(&a, &b));
//!
//! let c = Value::array_of([1, 5]);
//! assert_eq!(compare(&a, &c).unwrap(), -3.0);
//!
//! // A sequence that contains itself is equal to itself.
//! let cyclic = Value::new_array();
//! cyclic.push(cyclic.clone());
//! assert!(equals(&cyclic, &cyclic));
//! ```

mod compare;
mod config;
mod dispatch;
mod equals;
mod error;
mod identity;
mod json;
mod memo;
mod normalize;
mod value;

pub use compare::{compare, compare_in, compare_with};
pub use config::{CyclePolicy, EngineConfig};
pub use dispatch::{CompareFn, CompareScope, EqualsFn, EqualsScope, PairMemo, SelfDescribing};
pub use equals::{equals, equals_in, equals_with, try_equals};
pub use error::{CompareError, CompareResult, EqualsError, EqualsResult};
pub use identity::{ObjectId, Shared};
pub use memo::IdentityMemo;
pub use normalize::normalize;
pub use value::{Category, Record, Sequence, Slot, Value};
