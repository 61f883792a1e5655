//! [`ExceptBy`] and the [`Except`] alias.
use core::hash::Hash;
use core::iter::{Fuse, FusedIterator};

use crate::lookup::LookupSet;

/// [`ExceptBy`] keyed on the items themselves.
pub type Except<A, B> =
    ExceptBy<A, B, fn(&<A as Iterator>::Item) -> <A as Iterator>::Item, <A as Iterator>::Item>;

/// Yields the items of `first` whose key does not occur in `second`.
///
/// On the first call to `next`, all of `second` is drained into an exclusion set. `first` is
/// then streamed. Repeats within `first` are kept.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ExceptBy<A, B, Func, Key> {
    first: Fuse<A>,
    exclude: LookupSet<B, Key>,
    key_fn: Func,
}

impl<A, B, Func, Key> ExceptBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Creates with `first` to stream, `second` to exclude, and `key_fn` deriving identity.
    pub fn new(first: A, second: B, key_fn: Func) -> Self
    where
        Func: FnMut(&A::Item) -> Key,
        Key: Eq + Hash,
    {
        Self {
            first: first.fuse(),
            exclude: LookupSet::new(second),
            key_fn,
        }
    }
}

impl<A, B, Func, Key> Iterator for ExceptBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let exclude = self.exclude.get(&mut self.key_fn, "except");
        self.first
            .by_ref()
            .find(|item| !exclude.contains(&(self.key_fn)(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.first.size_hint().1)
    }
}

impl<A, B, Func, Key> FusedIterator for ExceptBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn test_except_basic() {
        let out: Vec<_> = ExceptBy::new([1, 2, 3].into_iter(), [2, 3].into_iter(), |x: &i32| *x)
            .collect();
        assert_eq!(vec![1], out);
    }

    #[test]
    fn test_except_keeps_repeats_in_first() {
        let out: Vec<_> =
            ExceptBy::new([1, 4, 1, 2].into_iter(), [2].into_iter(), |x: &i32| *x).collect();
        assert_eq!(vec![1, 4, 1], out);
    }

    #[test]
    fn test_except_drains_second_first() {
        let pulled = Cell::new(0);
        let second = [5, 6].into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let mut iter = ExceptBy::new(0.., second, |x: &i32| *x);
        assert_eq!(0, pulled.get());
        assert_eq!(Some(0), iter.next());
        assert_eq!(2, pulled.get());
        // `first` may be infinite.
        let rest: Vec<_> = iter.take(6).collect();
        assert_eq!(vec![1, 2, 3, 4, 7, 8], rest);
    }

    #[test]
    fn test_except_by_key() {
        let people = [("ann", 31), ("bob", 40), ("cy", 31)];
        let banned = [("someone", 40)];
        let out: Vec<_> = ExceptBy::new(people.into_iter(), banned.into_iter(), |p: &(&str, u32)| p.1)
            .map(|p| p.0)
            .collect();
        assert_eq!(vec!["ann", "cy"], out);
    }
}
