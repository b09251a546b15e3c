use crate::{ColumnBuilder, CoordValue, GeometryColumn, GeometryError, Point, ValidationOptions};

impl<T> ColumnBuilder<T>
where
	T: CoordValue + geo::CoordNum,
	Point<T>: From<geo::Coord<T>>,
{
	/// Appends a `geo::Polygon`: exterior first, then the interiors in their stored order.
	pub fn push_geo_polygon(&mut self, polygon: &geo::Polygon<T>) {
		self.push_ring(polygon.exterior().coords().copied());
		for interior in polygon.interiors() {
			self.push_ring(interior.coords().copied());
		}
		self.close_polygon();
	}

	pub fn push_geo_multipolygon(&mut self, multipolygon: &geo::MultiPolygon<T>) {
		for polygon in multipolygon {
			self.push_geo_polygon(polygon);
		}
		self.close_multipolygon();
	}
}

impl<T> GeometryColumn<T>
where
	T: CoordValue + geo::CoordNum,
	Point<T>: From<geo::Coord<T>>,
{
	pub fn from_geo_multipolygons<'a>(multipolygons: impl IntoIterator<Item = &'a geo::MultiPolygon<T>>) -> Self {
		let mut builder = ColumnBuilder::new();
		for multipolygon in multipolygons {
			builder.push_geo_multipolygon(multipolygon);
		}
		builder.finish()
	}
}

impl<T: CoordValue> GeometryColumn<T> {
	/// Unpacks the column into `geo` multipolygons, one per column entry.
	///
	/// The column is verified first, so every ring handed to `geo` is closed.
	pub fn to_geo_multipolygons(&self) -> Result<Vec<geo::MultiPolygon<f64>>, GeometryError> {
		self.verify(&ValidationOptions::default())?;
		let ring = |index: usize| -> Result<geo::LineString<f64>, GeometryError> {
			Ok(geo::LineString::new(
				self.ring_points(index)?.iter().map(|p| geo::Coord::from(*p)).collect(),
			))
		};
		(0..self.num_multipolygons())
			.map(|multipolygon| {
				let polygons = self
					.multipolygon_range(multipolygon)?
					.map(|polygon| {
						let mut rings = self.polygon_range(polygon)?.map(&ring).collect::<Result<Vec<_>, _>>()?;
						let exterior = rings.remove(0);
						Ok(geo::Polygon::new(exterior, rings))
					})
					.collect::<Result<Vec<_>, GeometryError>>()?;
				Ok(geo::MultiPolygon::new(polygons))
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo::{MultiPolygon, polygon};

	fn square_with_hole() -> geo::Polygon<f64> {
		polygon!(
			exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
			interiors: [[(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)]],
		)
	}

	#[test]
	fn pack_geo_multipolygons() {
		let input = vec![MultiPolygon::new(vec![square_with_hole()]), MultiPolygon::new(vec![])];
		let column = GeometryColumn::from_geo_multipolygons(&input);
		assert_eq!(column.num_multipolygons(), 2);
		assert_eq!(column.num_polygons(), 1);
		assert_eq!(column.num_rings(), 2);
		// geo closes rings, so each ring carries the repeated first point.
		assert_eq!(column.num_points(), 10);
		assert!(column.verify(&ValidationOptions::default()).is_ok());
	}

	#[test]
	fn unpack_round_trip() {
		let input = vec![MultiPolygon::new(vec![square_with_hole()]), MultiPolygon::new(vec![])];
		let column = GeometryColumn::from_geo_multipolygons(&input);
		assert_eq!(column.to_geo_multipolygons().unwrap(), input);
	}

	#[test]
	fn unpack_requires_valid_column() {
		let mut builder = ColumnBuilder::<f64>::new();
		builder.push_multipolygon(vec![vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]]);
		let column = builder.finish();
		assert_eq!(
			column.to_geo_multipolygons().unwrap_err(),
			GeometryError::UnclosedRing { ring: 0 }
		);
	}
}
