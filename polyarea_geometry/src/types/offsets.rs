use crate::{GeometryError, StructureReason};
use std::{fmt, ops::Range};

/// The three offset levels of a column, named after the unit whose children they delimit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetLevel {
	/// `ring_offsets`: ring → points
	Ring,
	/// `polygon_offsets`: polygon → rings
	Polygon,
	/// `multipolygon_offsets`: multipolygon → polygons
	MultiPolygon,
}

impl OffsetLevel {
	/// Name of the child unit the offsets point into.
	pub fn child_name(&self) -> &'static str {
		match self {
			OffsetLevel::Ring => "point",
			OffsetLevel::Polygon => "ring",
			OffsetLevel::MultiPolygon => "polygon",
		}
	}
}

impl fmt::Display for OffsetLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			OffsetLevel::Ring => "ring",
			OffsetLevel::Polygon => "polygon",
			OffsetLevel::MultiPolygon => "multipolygon",
		})
	}
}

/// Number of units described by an offset array (one less than its length).
pub(crate) fn unit_count(offsets: &[usize]) -> usize {
	offsets.len().saturating_sub(1)
}

/// Half-open child range of unit `index`.
///
/// Never clamps: a reversed range, a range past `child_len` or an unknown unit is an error.
pub(crate) fn unit_range(
	offsets: &[usize],
	level: OffsetLevel,
	index: usize,
	child_len: usize,
) -> Result<Range<usize>, GeometryError> {
	let count = unit_count(offsets);
	if index >= count {
		return Err(GeometryError::structure(
			level,
			index,
			StructureReason::NoSuchUnit { count },
		));
	}
	let (start, end) = (offsets[index], offsets[index + 1]);
	if end < start {
		return Err(GeometryError::structure(
			level,
			index,
			StructureReason::Decreasing { start, end },
		));
	}
	if end > child_len {
		return Err(GeometryError::structure(
			level,
			index,
			StructureReason::OutOfBounds { end, len: child_len },
		));
	}
	Ok(start..end)
}

/// Checks that an offset array starts at 0, never decreases and ends at `child_len`.
///
/// Errors name the unit whose range is broken; `EndMismatch` names the last unit.
pub(crate) fn check_offsets(offsets: &[usize], level: OffsetLevel, child_len: usize) -> Result<(), GeometryError> {
	let Some(&first) = offsets.first() else {
		return Err(GeometryError::structure(level, 0, StructureReason::EmptyOffsets));
	};
	if first != 0 {
		return Err(GeometryError::structure(
			level,
			0,
			StructureReason::StartNotZero { value: first },
		));
	}
	for (index, pair) in offsets.windows(2).enumerate() {
		if pair[1] < pair[0] {
			return Err(GeometryError::structure(
				level,
				index,
				StructureReason::Decreasing {
					start: pair[0],
					end: pair[1],
				},
			));
		}
		if pair[1] > child_len {
			return Err(GeometryError::structure(
				level,
				index,
				StructureReason::OutOfBounds {
					end: pair[1],
					len: child_len,
				},
			));
		}
	}
	let last = offsets[offsets.len() - 1];
	if last != child_len {
		return Err(GeometryError::structure(
			level,
			unit_count(offsets).saturating_sub(1),
			StructureReason::EndMismatch {
				value: last,
				expected: child_len,
			},
		));
	}
	Ok(())
}

/// Converts offsets from a signed foreign representation, rejecting negative values.
pub(crate) fn offsets_from_i32(offsets: &[i32], level: OffsetLevel) -> Result<Vec<usize>, GeometryError> {
	offsets
		.iter()
		.enumerate()
		.map(|(index, &value)| {
			usize::try_from(value).map_err(|_| {
				GeometryError::structure(
					level,
					index,
					StructureReason::NegativeOffset {
						value: i64::from(value),
					},
				)
			})
		})
		.collect()
}
