//! Segmented reduction over an offset array.
//!
//! `offsets[k]..offsets[k + 1]` delimits segment `k` of `values`. Each segment is reduced on
//! its own, so segments can run on different lanes; the output has one value per segment, in
//! segment order. Empty segments always yield `0.0`.

use crate::ExecutionMode;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice};

pub fn segmented_reduce<F>(values: &[f64], offsets: &[usize], mode: ExecutionMode, min_len: usize, reduce: F) -> Vec<f64>
where
	F: Fn(&[f64]) -> f64 + Sync + Send,
{
	let segment = |w: &[usize]| {
		if w[0] == w[1] { 0.0 } else { reduce(&values[w[0]..w[1]]) }
	};
	match mode {
		ExecutionMode::Deterministic => offsets.windows(2).map(segment).collect(),
		ExecutionMode::Parallel => offsets
			.par_windows(2)
			.with_min_len(min_len.max(1))
			.map(segment)
			.collect(),
	}
}

/// Plain left-to-right sum of one segment.
pub fn sum_segment(values: &[f64]) -> f64 {
	values.iter().sum()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ExecutionMode::Deterministic)]
	#[case(ExecutionMode::Parallel)]
	fn sums_segments(#[case] mode: ExecutionMode) {
		let values = [1.0, 2.0, 3.0, 4.0, 5.0];
		let offsets = [0, 2, 2, 5];
		assert_eq!(segmented_reduce(&values, &offsets, mode, 1, sum_segment), vec![3.0, 0.0, 12.0]);
	}

	#[rstest]
	#[case(ExecutionMode::Deterministic)]
	#[case(ExecutionMode::Parallel)]
	fn empty_segments_skip_the_reducer(#[case] mode: ExecutionMode) {
		let result = segmented_reduce(&[], &[0, 0, 0], mode, 1, |_| f64::NAN);
		assert_eq!(result, vec![0.0, 0.0]);
	}

	#[test]
	fn no_segments() {
		assert!(segmented_reduce(&[], &[0], ExecutionMode::Parallel, 1, sum_segment).is_empty());
	}

	#[test]
	fn many_segments_keep_order() {
		let values: Vec<f64> = (0..10_000).map(f64::from).collect();
		let offsets: Vec<usize> = (0..=10_000).collect();
		let result = segmented_reduce(&values, &offsets, ExecutionMode::Parallel, 16, sum_segment);
		assert_eq!(result, values);
	}
}
