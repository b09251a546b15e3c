use crate::OffsetLevel;
use std::fmt;
use thiserror::Error;

/// Why an offset array or one of the units it describes was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructureReason {
	/// The offset array has no entries at all; even an empty level needs the leading `0`.
	EmptyOffsets,
	/// The first offset is not zero.
	StartNotZero { value: usize },
	/// `offsets[index + 1] < offsets[index]`.
	Decreasing { start: usize, end: usize },
	/// The last offset does not match the number of children it indexes into.
	EndMismatch { value: usize, expected: usize },
	/// A requested range reaches past the end of the child array.
	OutOfBounds { end: usize, len: usize },
	/// A unit index beyond the number of units of that level.
	NoSuchUnit { count: usize },
	/// Offsets supplied by a foreign producer contained a negative value.
	NegativeOffset { value: i64 },
	/// An interleaved coordinate buffer had an odd number of values.
	OddCoordinateCount { len: usize },
	/// A polygon without any ring, so it has no outer boundary.
	EmptyPolygon,
	/// A closed ring with fewer than 4 points.
	TooFewPoints { len: usize },
}

impl fmt::Display for StructureReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StructureReason::EmptyOffsets => write!(f, "offset array is empty"),
			StructureReason::StartNotZero { value } => write!(f, "first offset is {value}, expected 0"),
			StructureReason::Decreasing { start, end } => write!(f, "offsets decrease from {start} to {end}"),
			StructureReason::EndMismatch { value, expected } => {
				write!(f, "last offset is {value}, expected {expected}")
			}
			StructureReason::OutOfBounds { end, len } => write!(f, "range end {end} exceeds length {len}"),
			StructureReason::NoSuchUnit { count } => write!(f, "index out of range, only {count} units"),
			StructureReason::NegativeOffset { value } => write!(f, "negative offset {value}"),
			StructureReason::OddCoordinateCount { len } => {
				write!(f, "interleaved xy buffer has odd length {len}")
			}
			StructureReason::EmptyPolygon => write!(f, "polygon has no rings"),
			StructureReason::TooFewPoints { len } => write!(f, "ring has {len} points, at least 4 required"),
		}
	}
}

/// Errors reported by the structural validator and the range accessors.
///
/// Every variant names the unit that failed, so a caller can point at the offending geometry.
/// Validation stops at the first failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
	#[error("invalid structure at {level} {index}: {reason}")]
	Structure {
		level: OffsetLevel,
		index: usize,
		reason: StructureReason,
	},

	#[error("ring {ring} is not closed: first and last point differ")]
	UnclosedRing { ring: usize },
}

impl GeometryError {
	pub fn structure(level: OffsetLevel, index: usize, reason: StructureReason) -> Self {
		GeometryError::Structure { level, index, reason }
	}

	/// The index of the unit the error refers to.
	pub fn index(&self) -> usize {
		match self {
			GeometryError::Structure { index, .. } => *index,
			GeometryError::UnclosedRing { ring } => *ring,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_structure() {
		let err = GeometryError::structure(OffsetLevel::Polygon, 3, StructureReason::EmptyPolygon);
		assert_eq!(err.to_string(), "invalid structure at polygon 3: polygon has no rings");
		assert_eq!(err.index(), 3);
	}

	#[test]
	fn display_unclosed_ring() {
		let err = GeometryError::UnclosedRing { ring: 7 };
		assert_eq!(err.to_string(), "ring 7 is not closed: first and last point differ");
		assert_eq!(err.index(), 7);
	}

	#[test]
	fn display_reasons() {
		assert_eq!(
			StructureReason::Decreasing { start: 5, end: 2 }.to_string(),
			"offsets decrease from 5 to 2"
		);
		assert_eq!(
			StructureReason::TooFewPoints { len: 3 }.to_string(),
			"ring has 3 points, at least 4 required"
		);
		assert_eq!(
			StructureReason::OutOfBounds { end: 9, len: 4 }.to_string(),
			"range end 9 exceeds length 4"
		);
	}
}
