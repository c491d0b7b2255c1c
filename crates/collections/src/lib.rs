//! Small collection helpers built on the `polycmp-engine` value model.
//!
//! - [`has`] finds a value by deep equivalence.
//! - [`clear`] empties sequences and keyed collections in place.
//! - [`arrayify`] takes an element view of anything array-like.
//! - [`swap`] splices a sequence, holes included.
//! - [`unzip`] and [`zip`] transpose tables of rows.

mod arrayify;
mod clear;
mod error;
mod has;
mod swap;
mod zip;

pub use arrayify::arrayify;
pub use clear::clear;
pub use error::{CollectionError, CollectionResult};
pub use has::{has, has_with};
pub use swap::swap;
pub use zip::{transpose, unzip, zip};
