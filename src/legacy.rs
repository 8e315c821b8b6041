//! Integer-encoded search results.
//!
//! Some callers expect a single signed integer instead of a [`Position`]:
//! a non-negative value is the index of a matching element, and a negative
//! value means the key was not found. The negative value is derived from the
//! last probed index, plus one when the upper bound never moved:
//! `-(last_probe + (end == len))`.
//!
//! The one exception to that formula is the empty sequence, which is encoded
//! as `0` rather than `-1`. Two properties of the encoding are worth knowing:
//!
//! - `0` means both "found at index 0" and "not found, insert at 0".
//! - Its magnitude is the insertion index only when the last probe narrowed
//!   the upper bound, or when the key sorts after every element. When the
//!   search ended by moving the lower bound past an element, the magnitude is
//!   one less than the insertion index. Use [`Position`] whenever the exact
//!   insertion index matters.
//!
//! Indexes above `isize::MAX` cannot be encoded. The search functions of this
//! module return `None` instead of a wrapped value in that case.
//!
//! ```
//! use sorted_search::legacy;
//!
//! let s = [1, 3, 5, 7, 9];
//!
//! assert_eq!(legacy::search(&s, &5), Some(2));
//! assert_eq!(legacy::search(&s, &0), Some(0));
//! assert_eq!(legacy::search(&s, &6), Some(-3));
//! assert_eq!(legacy::search(&s, &10), Some(-5));
//! ```
//!
//! [`Position`]: crate::Position
use std::cmp::Ordering;

use crate::{
	compare::{numeric, Numeric},
	utils::{infallible, probe, Probe},
	Sequence,
};

/// Integer-encodes the outcome of a probe over a sequence of length `len`.
///
/// Returns `None` if the encoded magnitude does not fit in an `isize`.
#[inline]
fn encode(probe: Probe, len: usize) -> Option<isize> {
	match probe {
		Probe::Found(i) => isize::try_from(i).ok(),
		Probe::Missed { .. } if len == 0 => Some(0),
		Probe::Missed {
			last_mid, at_end, ..
		} => isize::try_from(last_mid + at_end as usize).ok().map(|m| -m),
	}
}

/// Searches with the default numeric comparator and encodes the result.
#[inline]
pub fn search<S>(sorted: &S, key: &S::Item) -> Option<isize>
where
	S: Sequence + ?Sized,
	S::Item: Numeric,
{
	search_by(sorted, key, numeric)
}

/// Searches with the given comparator and encodes the result.
#[inline]
pub fn search_by<S, Q>(sorted: &S, key: &Q, mut cmp: impl FnMut(&Q, &S::Item) -> Ordering) -> Option<isize>
where
	S: Sequence + ?Sized,
	Q: ?Sized,
{
	let probe = infallible(probe(sorted, key, |k, e| Ok(cmp(k, e))));
	encode(probe, sorted.len())
}

/// Searches with a fallible comparator and encodes the result.
///
/// The first comparator error is returned as is.
#[inline]
pub fn try_search_by<S, Q, E>(
	sorted: &S,
	key: &Q,
	cmp: impl FnMut(&Q, &S::Item) -> Result<Ordering, E>,
) -> Result<Option<isize>, E>
where
	S: Sequence + ?Sized,
	Q: ?Sized,
{
	let probe = probe(sorted, key, cmp)?;
	Ok(encode(probe, sorted.len()))
}
