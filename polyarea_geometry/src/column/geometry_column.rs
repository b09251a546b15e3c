use crate::{CoordValue, GeometryError, OffsetLevel, Point, StructureReason, offsets_from_i32, unit_count, unit_range};
use std::{fmt::Debug, ops::Range};

/// A column of multipolygons packed into one flat point array and three offset arrays.
///
/// - `ring_offsets[i]..ring_offsets[i + 1]` are the points of ring `i`
/// - `polygon_offsets[j]..polygon_offsets[j + 1]` are the rings of polygon `j`, the first is the outer ring
/// - `multipolygon_offsets[k]..multipolygon_offsets[k + 1]` are the polygons of multipolygon `k`
///
/// The column is not validated on construction. Call [`GeometryColumn::verify`] (or let the
/// area engine do it) before relying on the offsets.
#[derive(Clone, PartialEq)]
pub struct GeometryColumn<T: CoordValue = f64> {
	points: Vec<Point<T>>,
	ring_offsets: Vec<usize>,
	polygon_offsets: Vec<usize>,
	multipolygon_offsets: Vec<usize>,
}

impl<T: CoordValue> GeometryColumn<T> {
	/// Wraps already packed arrays without checking them.
	pub fn new(
		points: Vec<Point<T>>,
		ring_offsets: Vec<usize>,
		polygon_offsets: Vec<usize>,
		multipolygon_offsets: Vec<usize>,
	) -> Self {
		Self {
			points,
			ring_offsets,
			polygon_offsets,
			multipolygon_offsets,
		}
	}

	/// A column without any multipolygon.
	pub fn empty() -> Self {
		Self::new(Vec::new(), vec![0], vec![0], vec![0])
	}

	/// Builds a column from interleaved `[x0, y0, x1, y1, ...]` coordinates and signed offsets,
	/// the layout GeoArrow-style producers hand out.
	///
	/// `ring_offsets` index points (coordinate pairs), `part_offsets` index rings and
	/// `geometry_offsets` index polygons.
	pub fn from_interleaved_xy(
		xy: &[T],
		ring_offsets: &[i32],
		part_offsets: &[i32],
		geometry_offsets: &[i32],
	) -> Result<Self, GeometryError> {
		if xy.len() % 2 != 0 {
			return Err(GeometryError::structure(
				OffsetLevel::Ring,
				0,
				StructureReason::OddCoordinateCount { len: xy.len() },
			));
		}
		let points = xy.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
		Ok(Self::new(
			points,
			offsets_from_i32(ring_offsets, OffsetLevel::Ring)?,
			offsets_from_i32(part_offsets, OffsetLevel::Polygon)?,
			offsets_from_i32(geometry_offsets, OffsetLevel::MultiPolygon)?,
		))
	}

	pub fn points(&self) -> &[Point<T>] {
		&self.points
	}

	pub fn ring_offsets(&self) -> &[usize] {
		&self.ring_offsets
	}

	pub fn polygon_offsets(&self) -> &[usize] {
		&self.polygon_offsets
	}

	pub fn multipolygon_offsets(&self) -> &[usize] {
		&self.multipolygon_offsets
	}

	/// Offsets of the given level.
	pub fn offsets(&self, level: OffsetLevel) -> &[usize] {
		match level {
			OffsetLevel::Ring => &self.ring_offsets,
			OffsetLevel::Polygon => &self.polygon_offsets,
			OffsetLevel::MultiPolygon => &self.multipolygon_offsets,
		}
	}

	pub fn num_points(&self) -> usize {
		self.points.len()
	}

	pub fn num_rings(&self) -> usize {
		unit_count(&self.ring_offsets)
	}

	pub fn num_polygons(&self) -> usize {
		unit_count(&self.polygon_offsets)
	}

	pub fn num_multipolygons(&self) -> usize {
		unit_count(&self.multipolygon_offsets)
	}

	/// Number of children the offsets of `level` point into.
	pub fn child_len(&self, level: OffsetLevel) -> usize {
		match level {
			OffsetLevel::Ring => self.num_points(),
			OffsetLevel::Polygon => self.num_rings(),
			OffsetLevel::MultiPolygon => self.num_polygons(),
		}
	}

	/// Point index range of ring `ring`.
	pub fn ring_range(&self, ring: usize) -> Result<Range<usize>, GeometryError> {
		unit_range(&self.ring_offsets, OffsetLevel::Ring, ring, self.num_points())
	}

	/// Ring index range of polygon `polygon`; the first ring of the range is the outer ring.
	pub fn polygon_range(&self, polygon: usize) -> Result<Range<usize>, GeometryError> {
		unit_range(&self.polygon_offsets, OffsetLevel::Polygon, polygon, self.num_rings())
	}

	/// Polygon index range of multipolygon `multipolygon`.
	pub fn multipolygon_range(&self, multipolygon: usize) -> Result<Range<usize>, GeometryError> {
		unit_range(
			&self.multipolygon_offsets,
			OffsetLevel::MultiPolygon,
			multipolygon,
			self.num_polygons(),
		)
	}

	/// The points of ring `ring`.
	pub fn ring_points(&self, ring: usize) -> Result<&[Point<T>], GeometryError> {
		Ok(&self.points[self.ring_range(ring)?])
	}

	/// All x coordinates, in point order.
	pub fn x(&self) -> Vec<f64> {
		self.points.iter().map(|p| p.x().to_f64()).collect()
	}

	/// All y coordinates, in point order.
	pub fn y(&self) -> Vec<f64> {
		self.points.iter().map(|p| p.y().to_f64()).collect()
	}

	/// For every point, the index of the multipolygon it belongs to.
	///
	/// Requires valid offsets; the first failing range is reported.
	pub fn point_indices(&self) -> Result<Vec<usize>, GeometryError> {
		let mut indices = Vec::with_capacity(self.points.len());
		for multipolygon in 0..self.num_multipolygons() {
			for polygon in self.multipolygon_range(multipolygon)? {
				for ring in self.polygon_range(polygon)? {
					let len = self.ring_range(ring)?.len();
					indices.extend(std::iter::repeat_n(multipolygon, len));
				}
			}
		}
		Ok(indices)
	}

	/// Consumes the column and returns its arrays.
	pub fn into_parts(self) -> (Vec<Point<T>>, Vec<usize>, Vec<usize>, Vec<usize>) {
		(
			self.points,
			self.ring_offsets,
			self.polygon_offsets,
			self.multipolygon_offsets,
		)
	}
}

impl<T: CoordValue> Default for GeometryColumn<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: CoordValue> Debug for GeometryColumn<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeometryColumn")
			.field("multipolygons", &self.num_multipolygons())
			.field("polygons", &self.num_polygons())
			.field("rings", &self.num_rings())
			.field("points", &self.num_points())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Three multipolygons: a square with a hole, an empty one, a triangle.
	fn column() -> GeometryColumn {
		let xy = [
			0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0, // outer
			1.0, 1.0, 3.0, 1.0, 3.0, 3.0, 1.0, 3.0, 1.0, 1.0, // hole
			0.0, 0.0, 4.0, 0.0, 0.0, 3.0, 0.0, 0.0, // triangle
		];
		GeometryColumn::from_interleaved_xy(&xy, &[0, 5, 10, 14], &[0, 2, 3], &[0, 1, 1, 2]).unwrap()
	}

	#[test]
	fn counts() {
		let c = column();
		assert_eq!(c.num_points(), 14);
		assert_eq!(c.num_rings(), 3);
		assert_eq!(c.num_polygons(), 2);
		assert_eq!(c.num_multipolygons(), 3);
		assert_eq!(c.child_len(OffsetLevel::MultiPolygon), 2);
	}

	#[test]
	fn ranges() {
		let c = column();
		assert_eq!(c.ring_range(1).unwrap(), 5..10);
		assert_eq!(c.polygon_range(0).unwrap(), 0..2);
		assert_eq!(c.multipolygon_range(1).unwrap(), 1..1);
		assert_eq!(c.ring_points(2).unwrap().len(), 4);
		assert_eq!(c.ring_points(2).unwrap()[2], Point::new(0.0, 3.0));
	}

	#[test]
	fn ranges_reject_unknown_units() {
		let c = column();
		assert!(c.ring_range(3).is_err());
		assert!(c.polygon_range(2).is_err());
		assert!(c.multipolygon_range(3).is_err());
	}

	#[test]
	fn range_past_points_is_rejected() {
		let c = GeometryColumn::new(vec![Point::new(0.0, 0.0); 3], vec![0, 5], vec![0, 1], vec![0, 1]);
		let err = c.ring_points(0).unwrap_err();
		assert_eq!(
			err,
			GeometryError::structure(OffsetLevel::Ring, 0, StructureReason::OutOfBounds { end: 5, len: 3 })
		);
	}

	#[test]
	fn x_and_y() {
		let c = column();
		assert_eq!(&c.x()[..3], &[0.0, 4.0, 4.0]);
		assert_eq!(&c.y()[..3], &[0.0, 0.0, 4.0]);
	}

	#[test]
	fn point_indices() {
		let indices = column().point_indices().unwrap();
		assert_eq!(indices.len(), 14);
		assert!(indices[..10].iter().all(|&i| i == 0));
		assert!(indices[10..].iter().all(|&i| i == 2));
	}

	#[test]
	fn interleaved_rejects_odd_length() {
		let err = GeometryColumn::<f64>::from_interleaved_xy(&[0.0, 1.0, 2.0], &[0, 1], &[0, 1], &[0, 1]).unwrap_err();
		assert_eq!(
			err,
			GeometryError::structure(OffsetLevel::Ring, 0, StructureReason::OddCoordinateCount { len: 3 })
		);
	}

	#[test]
	fn interleaved_rejects_negative_offsets() {
		let err = GeometryColumn::<f64>::from_interleaved_xy(&[], &[0], &[0, -1], &[0]).unwrap_err();
		assert_eq!(
			err,
			GeometryError::structure(OffsetLevel::Polygon, 1, StructureReason::NegativeOffset { value: -1 })
		);
	}

	#[test]
	fn empty_column() {
		let c = GeometryColumn::<f32>::empty();
		assert_eq!(c.num_multipolygons(), 0);
		assert_eq!(c.point_indices().unwrap(), Vec::<usize>::new());
		assert_eq!(format!("{c:?}"), "GeometryColumn { multipolygons: 0, polygons: 0, rings: 0, points: 0 }");
	}
}
