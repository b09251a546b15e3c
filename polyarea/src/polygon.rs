/// Combines one polygon's signed ring areas, outer ring first, into the polygon area:
///
/// `|outer| − Σ |hole|`
///
/// The role of a ring comes from its position only. Stored winding is ignored, so either
/// orientation convention gives the same result.
///
/// When the holes add up to more than the outer ring, the result is negative. The driver decides
/// what to do with it (see [`crate::HoleExcess`]). An empty slice has no outer ring and yields
/// `0.0`; the structural validator rejects such polygons before this is reached.
pub fn polygon_area(ring_areas: &[f64]) -> f64 {
	let Some((outer, holes)) = ring_areas.split_first() else {
		return 0.0;
	};
	holes.iter().fold(outer.abs(), |sum, hole| sum - hole.abs())
}
