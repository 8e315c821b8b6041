use std::cmp::Ordering;

use crate::{compare::Numeric, legacy, Position, Sequence};

/// Search methods for sorted sequences.
///
/// Implemented for every [`Sequence`]. Nothing is added to the sequence types
/// until this trait is imported.
///
/// ```
/// use std::collections::VecDeque;
/// use sorted_search::{Position, SortedSearch};
///
/// let queue: VecDeque<u32> = (0..10).map(|i| i * 10).collect();
///
/// assert_eq!(queue.sorted_search(&30), Position::Found(3));
/// assert_eq!(queue.sorted_search(&35), Position::Vacant(4));
/// ```
pub trait SortedSearch: Sequence {
	/// See [`crate::search`].
	#[inline]
	fn sorted_search(&self, key: &Self::Item) -> Position
	where
		Self::Item: Numeric,
	{
		crate::search(self, key)
	}

	/// See [`crate::search_by`].
	#[inline]
	fn sorted_search_by<Q: ?Sized>(
		&self,
		key: &Q,
		cmp: impl FnMut(&Q, &Self::Item) -> Ordering,
	) -> Position {
		crate::search_by(self, key, cmp)
	}

	/// See [`crate::try_search_by`].
	#[inline]
	fn try_sorted_search_by<Q: ?Sized, E>(
		&self,
		key: &Q,
		cmp: impl FnMut(&Q, &Self::Item) -> Result<Ordering, E>,
	) -> Result<Position, E> {
		crate::try_search_by(self, key, cmp)
	}

	/// See [`crate::search_by_key`].
	#[inline]
	fn sorted_search_by_key<B: Ord>(&self, key: &B, f: impl FnMut(&Self::Item) -> B) -> Position {
		crate::search_by_key(self, key, f)
	}

	/// See [`legacy::search`].
	#[inline]
	fn legacy_search(&self, key: &Self::Item) -> Option<isize>
	where
		Self::Item: Numeric,
	{
		legacy::search(self, key)
	}

	/// See [`legacy::search_by`].
	#[inline]
	fn legacy_search_by<Q: ?Sized>(
		&self,
		key: &Q,
		cmp: impl FnMut(&Q, &Self::Item) -> Ordering,
	) -> Option<isize> {
		legacy::search_by(self, key, cmp)
	}
}

impl<S: Sequence + ?Sized> SortedSearch for S {}
