//! Structural validation of a [`GeometryColumn`].
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. the three offset arrays (start at 0, never decrease, end at the child count)
//! 2. every polygon has at least one ring
//! 3. every ring, in index order, is closed and has at least 4 points
//!
//! A ring whose first and last points differ is reported as unclosed even when it is also too
//! short; only a closed ring with fewer than 4 points is reported as too short.

use crate::{CoordValue, GeometryColumn, GeometryError, OffsetLevel, Point, StructureReason, check_offsets};

/// Minimum number of points of a ring: three distinct vertices plus the closing repeat.
pub const MIN_RING_POINTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValidationOptions {
	/// Largest per-axis distance between first and last point that still counts as closed.
	/// `None` requires bit-identical coordinates. A negative or NaN tolerance accepts no ring.
	pub closure_tolerance: Option<f64>,
}

impl ValidationOptions {
	pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
		self.closure_tolerance = Some(tolerance);
		self
	}
}

/// Checks one ring's closure and length. `ring` is only used to label the error.
pub fn check_ring<T: CoordValue>(
	points: &[Point<T>],
	ring: usize,
	options: &ValidationOptions,
) -> Result<(), GeometryError> {
	if let (Some(first), Some(last)) = (points.first(), points.last()) {
		let closed = match options.closure_tolerance {
			None => first.bits_eq(last),
			Some(tolerance) => first.within(last, tolerance),
		};
		if !closed {
			return Err(GeometryError::UnclosedRing { ring });
		}
	}
	if points.len() < MIN_RING_POINTS {
		return Err(GeometryError::structure(
			OffsetLevel::Ring,
			ring,
			StructureReason::TooFewPoints { len: points.len() },
		));
	}
	Ok(())
}

impl<T: CoordValue> GeometryColumn<T> {
	/// Runs all structural checks. Nothing is computed from a column that fails here.
	pub fn verify(&self, options: &ValidationOptions) -> Result<(), GeometryError> {
		for level in [OffsetLevel::MultiPolygon, OffsetLevel::Polygon, OffsetLevel::Ring] {
			check_offsets(self.offsets(level), level, self.child_len(level))?;
		}

		if let Some(polygon) = self.polygon_offsets().windows(2).position(|w| w[0] == w[1]) {
			return Err(GeometryError::structure(
				OffsetLevel::Polygon,
				polygon,
				StructureReason::EmptyPolygon,
			));
		}

		for (ring, w) in self.ring_offsets().windows(2).enumerate() {
			check_ring(&self.points()[w[0]..w[1]], ring, options)?;
		}

		log::trace!("verified {self:?}");
		Ok(())
	}
}
