//! [`FromMapping`] and the [`KeyValue`] pair type.
use core::iter::{Fuse, FusedIterator};

/// A key with its value, as produced by enumerating a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyValue<K, V> {
    /// The key.
    pub key: K,
    /// The value stored under `key`.
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a pair.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Converts into a `(key, value)` tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Producer which enumerates the entries of a mapping as [`KeyValue`] pairs.
///
/// Entries come out in the mapping's own iteration order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct FromMapping<I> {
    iter: Fuse<I>,
}

impl<I, K, V> FromMapping<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Create from an iterator over the mapping's entries.
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I, K, V> Iterator for FromMapping<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = KeyValue<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(KeyValue::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, K, V> ExactSizeIterator for FromMapping<I> where I: ExactSizeIterator<Item = (K, V)> {}

impl<I, K, V> FusedIterator for FromMapping<I> where I: Iterator<Item = (K, V)> {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_from_mapping_ordered() {
        let map = BTreeMap::from([("b", 2), ("a", 1), ("c", 3)]);
        let out: Vec<_> = FromMapping::new(map.into_iter()).collect();
        assert_eq!(
            vec![
                KeyValue::new("a", 1),
                KeyValue::new("b", 2),
                KeyValue::new("c", 3),
            ],
            out
        );
    }

    #[test]
    fn test_from_mapping_pairs_keep_order() {
        let pairs = vec![("z", 'x'), ("y", 'y'), ("x", 'z')];
        let out: Vec<_> = FromMapping::new(pairs.into_iter())
            .map(KeyValue::into_tuple)
            .collect();
        assert_eq!(vec![("z", 'x'), ("y", 'y'), ("x", 'z')], out);
    }

    #[test]
    fn test_from_mapping_empty() {
        let mut iter = FromMapping::new(BTreeMap::<String, u8>::new().into_iter());
        assert_eq!((0, Some(0)), iter.size_hint());
        assert_eq!(None, iter.next());
    }
}
