//! Default comparator.
//!
//! Without a caller-supplied comparator, keys are compared to elements by the
//! sign of their difference `key - element`. This only makes sense for
//! numbers, hence the [`Numeric`] bound.
use std::cmp::Ordering;

/// Numbers that can be compared by the sign of their difference.
pub trait Numeric: Copy {
	/// Returns the sign of `self - other` as an [`Ordering`].
	fn difference_sign(self, other: Self) -> Ordering;
}

macro_rules! integers {
	($($ty:ty),*) => {
		$(
			impl Numeric for $ty {
				/// Integer subtraction may overflow, but its sign always agrees
				/// with the total order.
				#[inline]
				fn difference_sign(self, other: Self) -> Ordering {
					self.cmp(&other)
				}
			}
		)*
	};
}

macro_rules! floats {
	($($ty:ty),*) => {
		$(
			impl Numeric for $ty {
				/// A `NaN` difference is neither negative nor positive, so it
				/// compares `Equal`.
				#[inline]
				fn difference_sign(self, other: Self) -> Ordering {
					let d = self - other;
					if d < 0.0 {
						Ordering::Less
					} else if d > 0.0 {
						Ordering::Greater
					} else {
						Ordering::Equal
					}
				}
			}
		)*
	};
}

integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floats!(f32, f64);

/// Default comparator: compares `key` with `element` by subtraction.
///
/// ```
/// use std::cmp::Ordering;
/// use sorted_search::compare::numeric;
///
/// assert_eq!(numeric(&3, &5), Ordering::Less);
/// assert_eq!(numeric(&2.5, &2.5), Ordering::Equal);
/// assert_eq!(numeric(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn numeric<T: Numeric>(key: &T, element: &T) -> Ordering {
	key.difference_sign(*element)
}
