use std::fmt::Debug;

/// Storage type of a coordinate value.
///
/// Columns may store `f32` or `f64`; every computation widens to `f64` first.
pub trait CoordValue: Copy + Debug + PartialEq + Send + Sync + 'static {
	fn to_f64(self) -> f64;

	/// Bit-identical comparison. Unlike `==`, `0.0` and `-0.0` differ and a NaN equals itself.
	fn bits_eq(self, other: Self) -> bool;
}

macro_rules! impl_coord_value {
	($($t:ty),*) => {$(
		impl CoordValue for $t {
			#[inline]
			fn to_f64(self) -> f64 {
				f64::from(self)
			}

			#[inline]
			fn bits_eq(self, other: Self) -> bool {
				self.to_bits() == other.to_bits()
			}
		}
	)*}
}

impl_coord_value!(f32, f64);

/// One vertex of a ring.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<T: CoordValue = f64>([T; 2]);

impl<T: CoordValue> Point<T> {
	#[must_use]
	pub fn new(x: T, y: T) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> T {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> T {
		self.0[1]
	}

	/// Both coordinates widened to `f64`.
	#[must_use]
	pub fn to_f64(&self) -> [f64; 2] {
		[self.0[0].to_f64(), self.0[1].to_f64()]
	}

	#[must_use]
	pub fn bits_eq(&self, other: &Self) -> bool {
		self.0[0].bits_eq(other.0[0]) && self.0[1].bits_eq(other.0[1])
	}

	/// True if both axes differ by at most `tolerance`.
	#[must_use]
	pub fn within(&self, other: &Self, tolerance: f64) -> bool {
		let [x1, y1] = self.to_f64();
		let [x2, y2] = other.to_f64();
		(x1 - x2).abs() <= tolerance && (y1 - y2).abs() <= tolerance
	}
}

impl<T: CoordValue> From<[T; 2]> for Point<T> {
	fn from(value: [T; 2]) -> Self {
		Point(value)
	}
}

impl<T: CoordValue> From<&[T; 2]> for Point<T> {
	fn from(value: &[T; 2]) -> Self {
		Point(*value)
	}
}

impl<T: CoordValue> From<(T, T)> for Point<T> {
	fn from(value: (T, T)) -> Self {
		Point([value.0, value.1])
	}
}

impl<T: CoordValue> From<&(T, T)> for Point<T> {
	fn from(value: &(T, T)) -> Self {
		Point([value.0, value.1])
	}
}

impl<T: CoordValue> From<Point<T>> for [T; 2] {
	fn from(value: Point<T>) -> Self {
		value.0
	}
}

impl From<geo::Coord<f64>> for Point<f64> {
	fn from(value: geo::Coord<f64>) -> Self {
		Point([value.x, value.y])
	}
}

impl From<geo::Coord<f32>> for Point<f32> {
	fn from(value: geo::Coord<f32>) -> Self {
		Point([value.x, value.y])
	}
}

impl<T: CoordValue> From<Point<T>> for geo::Coord<f64> {
	fn from(value: Point<T>) -> Self {
		let [x, y] = value.to_f64();
		geo::Coord { x, y }
	}
}

impl<T: CoordValue> Debug for Point<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
