use std::collections::VecDeque;

/// Finite random-access sequence.
///
/// The search routines only ever read the sequence, through [`Sequence::at`],
/// at indexes strictly smaller than [`Sequence::len`].
pub trait Sequence {
	type Item;

	/// Number of elements.
	fn len(&self) -> usize;

	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the element at `index`.
	///
	/// # Panics
	///
	/// May panic if `index` is out of bounds.
	fn at(&self, index: usize) -> &Self::Item;
}

impl<T> Sequence for [T] {
	type Item = T;

	#[inline]
	fn len(&self) -> usize {
		<[T]>::len(self)
	}

	#[inline]
	fn at(&self, index: usize) -> &T {
		&self[index]
	}
}

impl<T, const N: usize> Sequence for [T; N] {
	type Item = T;

	#[inline]
	fn len(&self) -> usize {
		N
	}

	#[inline]
	fn at(&self, index: usize) -> &T {
		&self[index]
	}
}

impl<T> Sequence for Vec<T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize {
		Vec::len(self)
	}

	#[inline]
	fn at(&self, index: usize) -> &T {
		&self[index]
	}
}

/// Ring buffers are not contiguous, but indexing them is still O(1).
impl<T> Sequence for VecDeque<T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize {
		VecDeque::len(self)
	}

	#[inline]
	fn at(&self, index: usize) -> &T {
		&self[index]
	}
}

impl<'a, S: Sequence + ?Sized> Sequence for &'a S {
	type Item = S::Item;

	#[inline]
	fn len(&self) -> usize {
		(**self).len()
	}

	#[inline]
	fn at(&self, index: usize) -> &S::Item {
		(**self).at(index)
	}
}
