use crate::{CoordValue, GeometryColumn, Point};

/// Packs nested geometries into a [`GeometryColumn`].
///
/// The high-level `push_*` methods append one complete unit. The low-level methods
/// (`push_point`, `close_ring`, `close_polygon`, `close_multipolygon`) let a streaming
/// reader close units as it goes. Every `close_*` call records the current child count as the
/// end offset of a new unit, so closing a unit that received no children yields an empty unit.
#[derive(Clone, Debug)]
pub struct ColumnBuilder<T: CoordValue = f64> {
	points: Vec<Point<T>>,
	ring_offsets: Vec<usize>,
	polygon_offsets: Vec<usize>,
	multipolygon_offsets: Vec<usize>,
}

impl<T: CoordValue> ColumnBuilder<T> {
	pub fn new() -> Self {
		Self::with_capacity(0, 0, 0, 0)
	}

	pub fn with_capacity(points: usize, rings: usize, polygons: usize, multipolygons: usize) -> Self {
		let mut builder = Self {
			points: Vec::with_capacity(points),
			ring_offsets: Vec::with_capacity(rings + 1),
			polygon_offsets: Vec::with_capacity(polygons + 1),
			multipolygon_offsets: Vec::with_capacity(multipolygons + 1),
		};
		builder.ring_offsets.push(0);
		builder.polygon_offsets.push(0);
		builder.multipolygon_offsets.push(0);
		builder
	}

	pub fn push_point(&mut self, point: impl Into<Point<T>>) {
		self.points.push(point.into());
	}

	/// Ends the current ring at the last pushed point.
	pub fn close_ring(&mut self) {
		self.ring_offsets.push(self.points.len());
	}

	/// Ends the current polygon at the last closed ring.
	pub fn close_polygon(&mut self) {
		self.polygon_offsets.push(self.ring_offsets.len() - 1);
	}

	/// Ends the current multipolygon at the last closed polygon.
	pub fn close_multipolygon(&mut self) {
		self.multipolygon_offsets.push(self.polygon_offsets.len() - 1);
	}

	/// Appends one ring. The points are stored as given; an open ring stays open.
	pub fn push_ring<P: Into<Point<T>>>(&mut self, ring: impl IntoIterator<Item = P>) {
		self.points.extend(ring.into_iter().map(Into::into));
		self.close_ring();
	}

	/// Appends one polygon, outer ring first.
	pub fn push_polygon<R, P>(&mut self, rings: impl IntoIterator<Item = R>)
	where
		R: IntoIterator<Item = P>,
		P: Into<Point<T>>,
	{
		for ring in rings {
			self.push_ring(ring);
		}
		self.close_polygon();
	}

	/// Appends one multipolygon.
	pub fn push_multipolygon<Q, R, P>(&mut self, polygons: impl IntoIterator<Item = Q>)
	where
		Q: IntoIterator<Item = R>,
		R: IntoIterator<Item = P>,
		P: Into<Point<T>>,
	{
		for polygon in polygons {
			self.push_polygon(polygon);
		}
		self.close_multipolygon();
	}

	pub fn num_multipolygons(&self) -> usize {
		self.multipolygon_offsets.len() - 1
	}

	/// Hands the packed arrays over to a column.
	///
	/// Points, rings or polygons that were pushed after the last `close_*` call of the enclosing
	/// level are dropped; they belong to no unit.
	pub fn finish(mut self) -> GeometryColumn<T> {
		let polygons = self.multipolygon_offsets.last().copied().unwrap_or(0);
		self.polygon_offsets.truncate(polygons + 1);
		let rings = self.polygon_offsets.last().copied().unwrap_or(0);
		self.ring_offsets.truncate(rings + 1);
		let points = self.ring_offsets.last().copied().unwrap_or(0);
		self.points.truncate(points);
		GeometryColumn::new(
			self.points,
			self.ring_offsets,
			self.polygon_offsets,
			self.multipolygon_offsets,
		)
	}
}

impl<T: CoordValue> Default for ColumnBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> Vec<[f64; 2]> {
		vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]
	}

	#[test]
	fn push_nested() {
		let mut builder = ColumnBuilder::<f64>::new();
		builder.push_multipolygon(vec![vec![square()]]);
		builder.push_multipolygon(Vec::<Vec<Vec<[f64; 2]>>>::new());
		assert_eq!(builder.num_multipolygons(), 2);
		let column = builder.finish();
		assert_eq!(column.ring_offsets(), &[0, 5]);
		assert_eq!(column.polygon_offsets(), &[0, 1]);
		assert_eq!(column.multipolygon_offsets(), &[0, 1, 1]);
	}

	#[test]
	fn low_level_calls() {
		let mut builder = ColumnBuilder::<f32>::new();
		for p in [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]] {
			builder.push_point(p);
		}
		builder.close_ring();
		builder.close_polygon();
		builder.close_polygon();
		builder.close_multipolygon();
		let column = builder.finish();
		assert_eq!(column.num_points(), 4);
		assert_eq!(column.polygon_offsets(), &[0, 1, 1]);
		assert_eq!(column.multipolygon_offsets(), &[0, 2]);
	}

	#[test]
	fn finish_drops_unclosed_tail() {
		let mut builder = ColumnBuilder::<f64>::new();
		builder.push_multipolygon(vec![vec![square()]]);
		builder.push_ring(square());
		builder.close_polygon();
		builder.push_point([9.0, 9.0]);
		let column = builder.finish();
		assert_eq!(column.num_points(), 5);
		assert_eq!(column.num_rings(), 1);
		assert_eq!(column.num_polygons(), 1);
		assert_eq!(column.num_multipolygons(), 1);
	}
}
