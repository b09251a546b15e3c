//! Signed area of a single ring (shoelace formula).
//!
//! For a closed ring P₀…Pₙ₋₁ with Pₙ₋₁ = P₀:
//!
//! ```text
//! A = ½ · Σᵢ₌₀ⁿ⁻² (xᵢ·yᵢ₊₁ − xᵢ₊₁·yᵢ)
//! ```
//!
//! Coordinates are widened to `f64` and taken relative to P₀ before the cross products are
//! formed. For a closed ring this does not change the result, but it keeps the products small
//! when the ring sits far from the origin. Positive area means counter-clockwise.

use polyarea_geometry::{CoordValue, Point};
use rayon::prelude::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

#[inline]
fn cross<T: CoordValue>(origin: [f64; 2], a: &Point<T>, b: &Point<T>) -> f64 {
	let [ax, ay] = a.to_f64();
	let [bx, by] = b.to_f64();
	let (ax, ay) = (ax - origin[0], ay - origin[1]);
	let (bx, by) = (bx - origin[0], by - origin[1]);
	ax * by - bx * ay
}

/// Signed ring area, summed strictly left to right. Bit-reproducible.
pub fn signed_ring_area<T: CoordValue>(points: &[Point<T>]) -> f64 {
	let Some(first) = points.first() else {
		return 0.0;
	};
	let origin = first.to_f64();
	let mut sum = 0f64;
	for pair in points.windows(2) {
		sum += cross(origin, &pair[0], &pair[1]);
	}
	sum / 2.0
}

/// Signed ring area, with the edges split into chunks of at least `min_edges` that are summed
/// in parallel and combined pairwise.
///
/// The result equals [`signed_ring_area`] up to summation-order rounding.
pub fn signed_ring_area_parallel<T: CoordValue>(points: &[Point<T>], min_edges: usize) -> f64 {
	let Some(first) = points.first() else {
		return 0.0;
	};
	let origin = first.to_f64();
	let edges = points.len() - 1;
	let sum: f64 = (0..edges)
		.into_par_iter()
		.with_min_len(min_edges.max(1))
		.map(|i| cross(origin, &points[i], &points[i + 1]))
		.sum();
	sum / 2.0
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	fn ring(coords: &[[f64; 2]]) -> Vec<Point> {
		coords.iter().map(Point::from).collect()
	}

	fn square() -> Vec<Point> {
		ring(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]])
	}

	#[test]
	fn area_ccw_positive() {
		assert_eq!(signed_ring_area(&square()), 16.0);
	}

	#[test]
	fn area_cw_negative() {
		let ring = ring(&[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]]);
		assert_eq!(signed_ring_area(&ring), -16.0);
	}

	#[test]
	fn area_triangle() {
		let ring = ring(&[[0.0, 0.0], [4.0, 0.0], [0.0, 3.0], [0.0, 0.0]]);
		assert_eq!(signed_ring_area(&ring), 6.0);
	}

	#[rstest]
	#[case(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 0.0]])]
	#[case(&[[3.0, 3.0], [3.0, 3.0], [3.0, 3.0], [3.0, 3.0]])]
	#[case(&[[0.0, 5.0], [2.0, 5.0], [7.0, 5.0], [0.0, 5.0]])]
	fn degenerate_rings_are_exactly_zero(#[case] coords: &[[f64; 2]]) {
		assert_eq!(signed_ring_area(&ring(coords)), 0.0);
	}

	#[test]
	fn area_empty() {
		assert_eq!(signed_ring_area::<f64>(&[]), 0.0);
		assert_eq!(signed_ring_area_parallel::<f64>(&[], 16), 0.0);
	}

	#[test]
	fn reversal_negates() {
		let mut reversed = square();
		reversed.reverse();
		assert_eq!(signed_ring_area(&reversed), -signed_ring_area(&square()));
	}

	#[rstest]
	#[case(1.0, -2.0)]
	#[case(1e6, 1e6)]
	#[case(-123_456.0, 987_654.0)]
	fn translation_invariant(#[case] dx: f64, #[case] dy: f64) {
		let shifted: Vec<Point> = square().iter().map(|p| Point::new(p.x() + dx, p.y() + dy)).collect();
		assert_eq!(signed_ring_area(&shifted), 16.0);
	}

	#[test]
	fn f32_storage_accumulates_in_f64() {
		let ring: Vec<Point<f32>> = [[0.0f32, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]
			.iter()
			.map(Point::from)
			.collect();
		assert_eq!(signed_ring_area(&ring), 16.0);
	}

	fn circle(n: usize, radius: f64) -> Vec<Point> {
		let mut points: Vec<Point> = (0..n)
			.map(|i| {
				let a = std::f64::consts::TAU * i as f64 / n as f64;
				Point::new(radius * a.cos() + 500.0, radius * a.sin() - 200.0)
			})
			.collect();
		points.push(points[0]);
		points
	}

	#[test]
	fn parallel_matches_sequential_on_small_ring() {
		assert_eq!(signed_ring_area_parallel(&square(), 1), 16.0);
	}

	#[rstest]
	#[case(1)]
	#[case(64)]
	#[case(100_000)]
	fn parallel_matches_sequential_on_long_ring(#[case] min_edges: usize) {
		let ring = circle(50_000, 10.0);
		let sequential = signed_ring_area(&ring);
		let parallel = signed_ring_area_parallel(&ring, min_edges);
		assert_relative_eq!(parallel, sequential, max_relative = 1e-12);
		assert_relative_eq!(sequential, std::f64::consts::PI * 100.0, max_relative = 1e-6);
	}
}
