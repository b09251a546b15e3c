//! Columnar polygon storage for bulk area computation.
//!
//! A [`GeometryColumn`] stores many multipolygons in one flat point array plus three offset
//! arrays (multipolygon → polygon → ring → point). This crate defines that layout, fills it
//! ([`ColumnBuilder`], interleaved xy buffers, `geo` types) and validates it before any
//! computation reads it.

mod column;
mod error;
mod types;
pub mod validate;

pub use column::*;
pub use error::*;
pub use types::*;
pub use validate::{ValidationOptions, check_ring};
