use crate::LaneLimits;
use polyarea_geometry::ValidationOptions;

/// Which units the output has one value for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Granularity {
	/// One area per polygon, across all multipolygons.
	Polygon,
	/// One area per multipolygon, the sum of its polygons.
	#[default]
	#[cfg_attr(feature = "cli", value(name = "multipolygon"))]
	MultiPolygon,
}

/// How rings and segments are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
	/// Rings and segments are spread over the lanes. Results match [`ExecutionMode::Deterministic`]
	/// only up to floating-point summation-order error.
	#[default]
	Parallel,
	/// Everything runs left to right on the calling thread. Bit-reproducible.
	Deterministic,
}

/// What to do when the holes of a polygon add up to more than its outer ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoleExcess {
	/// Return the negative area; the caller decides whether the geometry is corrupt.
	#[default]
	Surface,
	/// Replace the negative area with `0.0`.
	Clamp,
}

/// Rings with at least this many points are split across lanes by default.
pub const DEFAULT_SPLIT_THRESHOLD: usize = 1 << 16;

/// Settings of one area computation.
///
/// The defaults follow the conservative choices: multipolygon output, parallel execution,
/// negative areas surfaced, exact ring closure, only exactly-zero rings counted as degenerate.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaOptions {
	pub granularity: Granularity,
	pub mode: ExecutionMode,
	pub hole_excess: HoleExcess,
	pub validation: ValidationOptions,
	/// Rings with `|area| <= degenerate_epsilon` are counted as degenerate.
	pub degenerate_epsilon: f64,
	/// Rings with at least this many points are evaluated with a parallel tree reduction.
	pub split_threshold: usize,
	/// Size of a dedicated thread pool. `None` uses rayon's global pool.
	pub lanes: Option<usize>,
	/// Smallest number of rings or segments one task takes. `None` derives it from [`LaneLimits`].
	pub min_rings_per_task: Option<usize>,
}

impl AreaOptions {
	pub fn with_granularity(mut self, granularity: Granularity) -> Self {
		self.granularity = granularity;
		self
	}

	pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn deterministic(self) -> Self {
		self.with_mode(ExecutionMode::Deterministic)
	}

	pub fn with_hole_excess(mut self, hole_excess: HoleExcess) -> Self {
		self.hole_excess = hole_excess;
		self
	}

	pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
		self.validation = self.validation.with_closure_tolerance(tolerance);
		self
	}

	pub fn with_degenerate_epsilon(mut self, epsilon: f64) -> Self {
		self.degenerate_epsilon = epsilon.abs();
		self
	}

	pub fn with_split_threshold(mut self, points: usize) -> Self {
		self.split_threshold = points.max(2);
		self
	}

	pub fn with_lanes(mut self, lanes: usize) -> Self {
		self.lanes = Some(lanes.max(1));
		self
	}

	pub fn with_min_rings_per_task(mut self, rings: usize) -> Self {
		self.min_rings_per_task = Some(rings.max(1));
		self
	}

	/// Lane limits for this run: the configured lane count, or one per logical CPU.
	pub fn lane_limits(&self) -> LaneLimits {
		match self.lanes {
			Some(lanes) => LaneLimits::new(lanes, LaneLimits::default().tasks_per_lane),
			None => LaneLimits::default(),
		}
	}

	/// Batch size for `units` parallel items.
	pub fn min_batch(&self, units: usize) -> usize {
		self.min_rings_per_task
			.unwrap_or_else(|| self.lane_limits().min_batch(units))
	}
}

impl Default for AreaOptions {
	fn default() -> Self {
		Self {
			granularity: Granularity::default(),
			mode: ExecutionMode::default(),
			hole_excess: HoleExcess::default(),
			validation: ValidationOptions::default(),
			degenerate_epsilon: 0.0,
			split_threshold: DEFAULT_SPLIT_THRESHOLD,
			lanes: None,
			min_rings_per_task: None,
		}
	}
}
