use anyhow::{Context, Result, ensure};
use geojson::{GeoJson, PolygonType, Value};
use polyarea::{ColumnBuilder, GeometryColumn};
use std::path::Path;

/// Packs the Polygon and MultiPolygon geometries of a GeoJSON file into a column.
///
/// Positions are stored exactly as written: an open ring stays open and is rejected later by
/// the validator. A Polygon becomes a multipolygon with one part. Other geometry types have no
/// area and are skipped with a warning, so the output lines up with the polygonal geometries only.
pub fn read_column(path: &Path) -> Result<GeometryColumn> {
	let text = std::fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
	let geojson: GeoJson = text.parse().with_context(|| format!("parsing GeoJSON {path:?}"))?;

	let geometries: Vec<Option<geojson::Geometry>> = match geojson {
		GeoJson::Geometry(geometry) => vec![Some(geometry)],
		GeoJson::Feature(feature) => vec![feature.geometry],
		GeoJson::FeatureCollection(collection) => collection.features.into_iter().map(|f| f.geometry).collect(),
	};

	let mut builder = ColumnBuilder::<f64>::new();
	for (index, geometry) in geometries.iter().enumerate() {
		match geometry.as_ref().map(|g| &g.value) {
			Some(Value::Polygon(rings)) => {
				push_polygon(&mut builder, rings).with_context(|| format!("reading geometry {index} of {path:?}"))?;
				builder.close_multipolygon();
			}
			Some(Value::MultiPolygon(polygons)) => {
				for rings in polygons {
					push_polygon(&mut builder, rings)
						.with_context(|| format!("reading geometry {index} of {path:?}"))?;
				}
				builder.close_multipolygon();
			}
			_ => log::warn!("skipping geometry {index}: not a Polygon or MultiPolygon"),
		}
	}
	log::debug!("read {} multipolygons from {path:?}", builder.num_multipolygons());
	Ok(builder.finish())
}

fn push_polygon(builder: &mut ColumnBuilder, rings: &PolygonType) -> Result<()> {
	for ring in rings {
		for position in ring {
			ensure!(position.len() >= 2, "position {position:?} has fewer than 2 coordinates");
			builder.push_point([position[0], position[1]]);
		}
		builder.close_ring();
	}
	builder.close_polygon();
	Ok(())
}
