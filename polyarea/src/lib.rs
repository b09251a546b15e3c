//! Planar area of polygon and multipolygon columns.
//!
//! ```
//! use polyarea::{ColumnBuilder, Granularity, compute_areas};
//!
//! let mut builder = ColumnBuilder::<f64>::new();
//! // a 4x4 square with a 2x2 hole
//! builder.push_multipolygon([[
//! 	vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
//! 	vec![[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]],
//! ]]);
//! let column = builder.finish();
//!
//! assert_eq!(compute_areas(&column, Granularity::MultiPolygon).unwrap(), vec![12.0]);
//! ```

mod concurrency;
mod engine;
mod options;
mod polygon;
mod reduce;
mod ring;

pub use concurrency::*;
pub use engine::*;
pub use options::*;
pub use polygon::*;
pub use reduce::*;
pub use ring::*;

pub use polyarea_geometry::{
	ColumnBuilder, CoordValue, GeometryColumn, GeometryError, OffsetLevel, Point, StructureReason, ValidationOptions,
};
