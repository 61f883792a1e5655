//! [`DistinctBy`] and the [`Distinct`] alias.
use core::hash::Hash;
use core::iter::{Fuse, FusedIterator};

use rustc_hash::FxHashSet;

/// [`DistinctBy`] keyed on the items themselves.
pub type Distinct<I> =
    DistinctBy<I, fn(&<I as Iterator>::Item) -> <I as Iterator>::Item, <I as Iterator>::Item>;

/// Yields each item whose key has not been seen before, in source order.
///
/// Streams the source. The set of seen keys grows for as long as the adaptor lives.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctBy<I, Func, Key> {
    iter: Fuse<I>,
    key_fn: Func,
    seen: FxHashSet<Key>,
}

impl<I, Func, Key> DistinctBy<I, Func, Key>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and `key_fn` deriving each item's identity.
    pub fn new(iter: I, key_fn: Func) -> Self
    where
        Func: FnMut(&I::Item) -> Key,
        Key: Eq + Hash,
    {
        Self {
            iter: iter.fuse(),
            key_fn,
            seen: FxHashSet::default(),
        }
    }
}

impl<I, Func, Key> Iterator for DistinctBy<I, Func, Key>
where
    I: Iterator,
    Func: FnMut(&I::Item) -> Key,
    Key: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert((self.key_fn)(&item)) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        // Only the very first item is known to be new.
        let lo = if self.seen.is_empty() { lo.min(1) } else { 0 };
        (lo, hi)
    }
}

impl<I, Func, Key> FusedIterator for DistinctBy<I, Func, Key>
where
    I: Iterator,
    Func: FnMut(&I::Item) -> Key,
    Key: Eq + Hash,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_keeps_first() {
        let iter: Distinct<core::array::IntoIter<i32, 5>> = crate::distinct([3, 1, 3, 2, 1]);
        assert_eq!(vec![3, 1, 2], iter.collect::<Vec<_>>());
    }

    #[test]
    fn test_distinct_by_string_key() {
        let words = ["Apple", "apple", "Banana", "APPLE", "banana", "cherry"];
        let out: Vec<_> = DistinctBy::new(words.into_iter(), |w: &&str| w.to_lowercase()).collect();
        assert_eq!(vec!["Apple", "Banana", "cherry"], out);
    }

    #[test]
    fn test_distinct_streams() {
        // Infinite source, but only two distinct values are ever needed.
        let mut iter = DistinctBy::new([7, 7, 8].into_iter().cycle(), |x| *x);
        assert_eq!(Some(7), iter.next());
        assert_eq!(Some(8), iter.next());
    }
}
