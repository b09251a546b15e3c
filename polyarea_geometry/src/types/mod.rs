// Leaf types of the ragged model: coordinate storage and the offset levels that tie
// points into rings, rings into polygons and polygons into multipolygons.

mod coordinates;
mod offsets;

pub use coordinates::*;
pub use offsets::OffsetLevel;
pub(crate) use offsets::{check_offsets, offsets_from_i32, unit_count, unit_range};
