use std::cmp::Ordering;

use crate::Sequence;

/// Outcome of the bounds-narrowing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
	/// The comparator returned `Equal` for the element at this index.
	Found(usize),

	/// The bounds met without a match.
	Missed {
		/// Final value of both bounds: the insertion index.
		start: usize,

		/// Last probed index, `0` if the loop never ran.
		last_mid: usize,

		/// Whether the exclusive bound never moved from the sequence length.
		at_end: bool,
	},
}

/// Search `sorted` for `key` by narrowing the half-open range `start..end`.
///
/// `sorted` is assumed to be sorted according to `cmp`. Exactly one comparator
/// call is made per iteration and the first comparator error ends the search.
#[inline]
pub fn probe<S, Q, E>(
	sorted: &S,
	key: &Q,
	mut cmp: impl FnMut(&Q, &S::Item) -> Result<Ordering, E>,
) -> Result<Probe, E>
where
	S: Sequence + ?Sized,
	Q: ?Sized,
{
	let len = sorted.len();
	let mut start = 0;
	let mut end = len;
	let mut mid = 0;

	#[cfg(feature = "tracing")]
	let mut calls = 0usize;

	while start != end {
		mid = start + (end - start) / 2;

		#[cfg(feature = "tracing")]
		{
			calls += 1;
		}

		match cmp(key, sorted.at(mid))? {
			Ordering::Less => end = mid,
			Ordering::Greater => start = mid + 1,
			Ordering::Equal => {
				#[cfg(feature = "tracing")]
				tracing::trace!(target: "sorted_search", len, calls, index = mid, "found");
				return Ok(Probe::Found(mid));
			}
		}
	}

	#[cfg(feature = "tracing")]
	tracing::trace!(target: "sorted_search", len, calls, index = start, "vacant");

	Ok(Probe::Missed {
		start,
		last_mid: mid,
		at_end: end == len,
	})
}

/// Unwraps the result of a search that cannot fail.
#[inline]
pub fn infallible<T>(result: Result<T, std::convert::Infallible>) -> T {
	match result {
		Ok(t) => t,
		Err(e) => match e {},
	}
}
