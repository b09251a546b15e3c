//! Lane limits for the parallel phases.
//!
//! Area evaluation is CPU-bound, so the default is one lane per logical CPU. Work is cut into
//! roughly `tasks_per_lane` batches per lane: enough slack for work stealing to even out rings
//! of very different length, few enough that per-task overhead stays small.
//!
//! ```
//! use polyarea::LaneLimits;
//!
//! let limits = LaneLimits::new(4, 2);
//! // 1000 rings over 4 lanes with 2 tasks each: batches of 125 rings
//! assert_eq!(limits.min_batch(1000), 125);
//! // never less than one unit per batch
//! assert_eq!(limits.min_batch(3), 1);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLimits {
	/// Number of worker threads.
	pub lanes: usize,

	/// Target number of batches per lane.
	pub tasks_per_lane: usize,
}

impl LaneLimits {
	/// Custom limits; both values are raised to at least 1.
	pub fn new(lanes: usize, tasks_per_lane: usize) -> Self {
		Self {
			lanes: lanes.max(1),
			tasks_per_lane: tasks_per_lane.max(1),
		}
	}

	/// Get the number of logical CPUs available
	pub fn cpu_count() -> usize {
		num_cpus::get()
	}

	/// Smallest number of consecutive units one task should take out of `units`.
	pub fn min_batch(&self, units: usize) -> usize {
		(units / (self.lanes * self.tasks_per_lane)).max(1)
	}
}

impl Default for LaneLimits {
	/// One lane per logical CPU, four batches per lane.
	fn default() -> Self {
		Self::new(num_cpus::get(), 4)
	}
}
