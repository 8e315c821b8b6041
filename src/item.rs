use std::{borrow::Borrow, cmp::Ordering, fmt};

/// Key-value record, ordered by key only.
///
/// A sorted sequence of items can be searched with a bare key using
/// [`Item::key_cmp`] as comparator:
///
/// ```
/// use sorted_search::{search_by, Item, Position};
///
/// let items = [Item::new(1, "one"), Item::new(4, "four"), Item::new(9, "nine")];
///
/// assert_eq!(search_by(&items, &4, Item::key_cmp), Position::Found(1));
/// assert_eq!(search_by(&items, &5, Item::key_cmp), Position::Vacant(2));
/// ```
#[derive(Debug, Clone)]
pub struct Item<K, V> {
	pub key: K,
	pub value: V,
}

impl<K, V> Item<K, V> {
	pub fn new(key: K, value: V) -> Self {
		Self { key, value }
	}

	/// Compares a bare `key` with the key of `item`.
	pub fn key_cmp<Q>(key: &Q, item: &Self) -> Ordering
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		Ord::cmp(key, item.key.borrow())
	}
}

impl<K: PartialEq, V> PartialEq for Item<K, V> {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl<K: Eq, V> Eq for Item<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Item<K, V> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.key.partial_cmp(&other.key)
	}
}

impl<K: Ord, V> Ord for Item<K, V> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.key.cmp(&other.key)
	}
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Item<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.key, self.value)
	}
}
