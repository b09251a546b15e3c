// The ragged geometry column and the ways to fill it: the incremental builder, interleaved
// xy buffers and `geo` types.

mod builder;
mod geo_interop;
mod geometry_column;

pub use builder::*;
pub use geometry_column::*;
