use std::fmt;

use crate::utils::Probe;

/// Result of a search in a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
	/// Index of an element matching the key.
	///
	/// If several elements match, any of them may be returned.
	Found(usize),

	/// The key matches no element. This is the index at which it can be
	/// inserted to keep the sequence sorted, between `0` and the sequence
	/// length inclusive.
	Vacant(usize),
}

impl Position {
	/// Returns the found index, or the insertion index.
	#[inline]
	pub fn index(self) -> usize {
		match self {
			Self::Found(i) | Self::Vacant(i) => i,
		}
	}

	#[inline]
	pub fn is_found(self) -> bool {
		matches!(self, Self::Found(_))
	}

	#[inline]
	pub fn found(self) -> Option<usize> {
		match self {
			Self::Found(i) => Some(i),
			Self::Vacant(_) => None,
		}
	}

	#[inline]
	pub fn vacant(self) -> Option<usize> {
		match self {
			Self::Found(_) => None,
			Self::Vacant(i) => Some(i),
		}
	}

	/// Converts into the convention of [`slice::binary_search`]: `Ok` with the
	/// found index, or `Err` with the insertion index.
	#[inline]
	pub fn into_result(self) -> Result<usize, usize> {
		match self {
			Self::Found(i) => Ok(i),
			Self::Vacant(i) => Err(i),
		}
	}
}

impl From<Probe> for Position {
	#[inline]
	fn from(probe: Probe) -> Self {
		match probe {
			Probe::Found(i) => Self::Found(i),
			Probe::Missed { start, .. } => Self::Vacant(start),
		}
	}
}

impl From<Position> for Result<usize, usize> {
	#[inline]
	fn from(position: Position) -> Self {
		position.into_result()
	}
}

impl From<Result<usize, usize>> for Position {
	#[inline]
	fn from(result: Result<usize, usize>) -> Self {
		match result {
			Ok(i) => Self::Found(i),
			Err(i) => Self::Vacant(i),
		}
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Found(i) => write!(f, "found at {i}"),
			Self::Vacant(i) => write!(f, "vacant at {i}"),
		}
	}
}
