//! This library locates keys in sorted random-access sequences by binary
//! search, using caller-supplied three-way comparators.
//!
//! A search either finds an element matching the key, or reports the index at
//! which the key could be inserted while keeping the sequence sorted. Both
//! outcomes are carried by the [`Position`] type.
//!
//! ```
//! use sorted_search::{search, Position};
//!
//! let s = [1, 3, 5, 7, 9];
//!
//! assert_eq!(search(&s, &5), Position::Found(2));
//! assert_eq!(search(&s, &4), Position::Vacant(2));
//! assert_eq!(search(&s, &0), Position::Vacant(0));
//! assert_eq!(search(&s, &10), Position::Vacant(5));
//! ```
//!
//! # Comparators
//!
//! A comparator is called as `cmp(key, element)` and returns
//! [`Ordering::Less`] when the key precedes the element,
//! [`Ordering::Greater`] when it follows it, and [`Ordering::Equal`] when it
//! matches. The sequence must be sorted consistently with the comparator.
//! This is not checked: on an unsorted sequence the search still terminates
//! and returns an in-bounds position, but which one is unspecified.
//!
//! Without a comparator, [`search`] compares numbers by subtraction (see
//! [`compare::numeric`]).
//!
//! # Cost
//!
//! A search over `n` elements calls the comparator at most
//! `floor(log2(n)) + 1` times and never allocates.
//!
//! # Features
//!
//! - `tracing`: emit a `trace` event under the `sorted_search` target at the
//!   end of every search.
use std::cmp::Ordering;

pub(crate) mod utils;

pub mod compare;
mod ext;
mod item;
pub mod legacy;
mod position;
mod sequence;

pub use ext::SortedSearch;
pub use item::Item;
pub use position::Position;
pub use sequence::Sequence;

use compare::{numeric, Numeric};
use utils::{infallible, probe};

/// Searches `sorted` for `key` with the default numeric comparator.
#[inline]
pub fn search<S>(sorted: &S, key: &S::Item) -> Position
where
	S: Sequence + ?Sized,
	S::Item: Numeric,
{
	search_by(sorted, key, numeric)
}

/// Searches `sorted` for `key` with the given comparator.
///
/// ```
/// use sorted_search::{search_by, Position};
///
/// let words = ["apple", "kiwi", "pear"];
///
/// assert_eq!(search_by(&words, "kiwi", |k, e| k.cmp(e)), Position::Found(1));
/// assert_eq!(search_by(&words, "fig", |k, e| k.cmp(e)), Position::Vacant(1));
/// ```
#[inline]
pub fn search_by<S, Q>(sorted: &S, key: &Q, mut cmp: impl FnMut(&Q, &S::Item) -> Ordering) -> Position
where
	S: Sequence + ?Sized,
	Q: ?Sized,
{
	infallible(probe(sorted, key, |k, e| Ok(cmp(k, e)))).into()
}

/// Searches `sorted` for `key` with a comparator that may fail.
///
/// The search stops at the first comparator error, which is returned
/// unchanged.
///
/// ```
/// use sorted_search::{try_search_by, Position};
///
/// let s = ["1", "3", "5", "x", "9"];
/// let parse_cmp = |k: &u32, e: &&str| e.parse::<u32>().map(|e| k.cmp(&e));
///
/// assert_eq!(try_search_by(&s, &1, parse_cmp), Ok(Position::Found(0)));
/// assert!(try_search_by(&s, &8, parse_cmp).is_err());
/// ```
#[inline]
pub fn try_search_by<S, Q, E>(
	sorted: &S,
	key: &Q,
	cmp: impl FnMut(&Q, &S::Item) -> Result<Ordering, E>,
) -> Result<Position, E>
where
	S: Sequence + ?Sized,
	Q: ?Sized,
{
	Ok(probe(sorted, key, cmp)?.into())
}

/// Searches `sorted` for an element whose extracted key equals `key`.
///
/// The sequence must be sorted by the extracted key.
#[inline]
pub fn search_by_key<S, B>(sorted: &S, key: &B, mut f: impl FnMut(&S::Item) -> B) -> Position
where
	S: Sequence + ?Sized,
	B: Ord,
{
	search_by(sorted, key, |k, e| k.cmp(&f(e)))
}
