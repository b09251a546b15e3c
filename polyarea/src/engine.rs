//! The area driver: validation, the ring map phase and the two segmented reductions.
//!
//! ```text
//! points ──ring_offsets──▶ ring areas ──polygon_offsets──▶ polygon areas ──multipolygon_offsets──▶ multipolygon areas
//!         (map, per ring)            (|outer| − Σ|holes|)                  (plain sum)
//! ```
//!
//! Each phase finishes before the next one starts. Within a phase nothing is shared but the
//! read-only column, and every output slot is written by exactly one task.

use crate::{
	AreaOptions, ExecutionMode, Granularity, HoleExcess, polygon_area, segmented_reduce, signed_ring_area,
	signed_ring_area_parallel, sum_segment,
};
use polyarea_geometry::{CoordValue, GeometryColumn, GeometryError};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice};
use std::time::Instant;

/// Edges below this count are never split further inside one ring.
const MIN_EDGES_PER_TASK: usize = 4096;

/// Counters collected during one computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaDiagnostics {
	/// Ring evaluator invocations; always equal to the number of rings.
	pub rings_evaluated: usize,
	/// Rings whose absolute area is at most `AreaOptions::degenerate_epsilon`.
	pub degenerate_rings: usize,
	/// Polygons whose holes add up to more than their outer ring.
	pub negative_polygons: usize,
	/// Rings evaluated with the parallel tree reduction.
	pub split_rings: usize,
}

/// Areas in input order, one per requested unit, plus diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaOutput {
	pub areas: Vec<f64>,
	pub diagnostics: AreaDiagnostics,
}

#[derive(Clone, Debug, Default)]
pub struct AreaEngine {
	options: AreaOptions,
}

impl AreaEngine {
	pub fn new(options: AreaOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &AreaOptions {
		&self.options
	}

	/// Validates `column` and computes one area per requested unit.
	///
	/// A structural error aborts the whole batch; no partial output is produced.
	pub fn compute<T: CoordValue>(&self, column: &GeometryColumn<T>) -> Result<AreaOutput, GeometryError> {
		column.verify(&self.options.validation)?;
		log::debug!(
			"computing {:?} areas of {column:?} in {:?} mode",
			self.options.granularity,
			self.options.mode
		);

		if let (ExecutionMode::Parallel, Some(lanes)) = (self.options.mode, self.options.lanes) {
			match rayon::ThreadPoolBuilder::new().num_threads(lanes).build() {
				Ok(pool) => return Ok(pool.install(|| self.run(column))),
				Err(e) => log::warn!("could not build a pool of {lanes} lanes, using the global pool: {e}"),
			}
		}
		Ok(self.run(column))
	}

	fn run<T: CoordValue>(&self, column: &GeometryColumn<T>) -> AreaOutput {
		let mut diagnostics = AreaDiagnostics::default();

		let start = Instant::now();
		let ring_areas = self.ring_areas(column, &mut diagnostics);
		log::trace!("ring phase: {} rings in {:?}", ring_areas.len(), start.elapsed());

		let start = Instant::now();
		let mut polygon_areas = segmented_reduce(
			&ring_areas,
			column.polygon_offsets(),
			self.options.mode,
			self.options.min_batch(column.num_polygons()),
			polygon_area,
		);
		self.check_polygons(&mut polygon_areas, &mut diagnostics);
		log::trace!(
			"polygon phase: {} polygons in {:?}",
			polygon_areas.len(),
			start.elapsed()
		);

		let areas = match self.options.granularity {
			Granularity::Polygon => polygon_areas,
			Granularity::MultiPolygon => {
				let start = Instant::now();
				let areas = segmented_reduce(
					&polygon_areas,
					column.multipolygon_offsets(),
					self.options.mode,
					self.options.min_batch(column.num_multipolygons()),
					sum_segment,
				);
				log::trace!(
					"multipolygon phase: {} multipolygons in {:?}",
					areas.len(),
					start.elapsed()
				);
				areas
			}
		};

		AreaOutput { areas, diagnostics }
	}

	/// Map phase: one signed area per ring, in ring order.
	fn ring_areas<T: CoordValue>(&self, column: &GeometryColumn<T>, diagnostics: &mut AreaDiagnostics) -> Vec<f64> {
		let points = column.points();
		let offsets = column.ring_offsets();
		let split_threshold = self.options.split_threshold;

		let areas: Vec<f64> = match self.options.mode {
			ExecutionMode::Deterministic => offsets
				.windows(2)
				.map(|w| signed_ring_area(&points[w[0]..w[1]]))
				.collect(),
			ExecutionMode::Parallel => {
				let limits = self.options.lane_limits();
				diagnostics.split_rings = offsets.windows(2).filter(|w| w[1] - w[0] >= split_threshold).count();
				offsets
					.par_windows(2)
					.with_min_len(self.options.min_batch(column.num_rings()))
					.map(|w| {
						let ring = &points[w[0]..w[1]];
						if ring.len() >= split_threshold {
							signed_ring_area_parallel(ring, limits.min_batch(ring.len()).max(MIN_EDGES_PER_TASK))
						} else {
							signed_ring_area(ring)
						}
					})
					.collect()
			}
		};

		diagnostics.rings_evaluated = areas.len();
		let epsilon = self.options.degenerate_epsilon;
		for (ring, area) in areas.iter().enumerate() {
			if area.abs() <= epsilon {
				diagnostics.degenerate_rings += 1;
				log::trace!("ring {ring} is degenerate (area {area})");
			}
		}
		if diagnostics.degenerate_rings > 0 {
			log::debug!("{} degenerate rings", diagnostics.degenerate_rings);
		}
		areas
	}

	/// Counts polygons whose holes exceed the outer ring and clamps them if configured.
	fn check_polygons(&self, polygon_areas: &mut [f64], diagnostics: &mut AreaDiagnostics) {
		let mut first_negative = None;
		for (polygon, area) in polygon_areas.iter_mut().enumerate() {
			if *area < 0.0 {
				diagnostics.negative_polygons += 1;
				first_negative.get_or_insert(polygon);
				if self.options.hole_excess == HoleExcess::Clamp {
					*area = 0.0;
				}
			}
		}
		if let Some(polygon) = first_negative {
			log::warn!(
				"{} polygons have holes larger than their outer ring (first: polygon {polygon}), {}",
				diagnostics.negative_polygons,
				match self.options.hole_excess {
					HoleExcess::Surface => "returning negative areas",
					HoleExcess::Clamp => "clamped to 0",
				}
			);
		}
	}
}

/// One area per unit of `granularity`, with default options.
pub fn compute_areas<T: CoordValue>(
	column: &GeometryColumn<T>,
	granularity: Granularity,
) -> Result<Vec<f64>, GeometryError> {
	let engine = AreaEngine::new(AreaOptions::default().with_granularity(granularity));
	Ok(engine.compute(column)?.areas)
}
