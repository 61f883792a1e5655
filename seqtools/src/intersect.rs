//! [`IntersectBy`] and the [`Intersect`] alias.
use core::hash::Hash;
use core::iter::{Fuse, FusedIterator};

use crate::lookup::LookupSet;

/// [`IntersectBy`] keyed on the items themselves.
pub type Intersect<A, B> =
    IntersectBy<A, B, fn(&<A as Iterator>::Item) -> <A as Iterator>::Item, <A as Iterator>::Item>;

/// Yields the items of `first` whose key also occurs in `second`.
///
/// On the first call to `next`, all of `second` is drained into an inclusion set. `first` is
/// then streamed. Repeats within `first` are kept.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntersectBy<A, B, Func, Key> {
    first: Fuse<A>,
    include: LookupSet<B, Key>,
    key_fn: Func,
}

impl<A, B, Func, Key> IntersectBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Creates with `first` to stream, `second` to match against, and `key_fn` deriving identity.
    pub fn new(first: A, second: B, key_fn: Func) -> Self
    where
        Func: FnMut(&A::Item) -> Key,
        Key: Eq + Hash,
    {
        Self {
            first: first.fuse(),
            include: LookupSet::new(second),
            key_fn,
        }
    }
}

impl<A, B, Func, Key> Iterator for IntersectBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let include = self.include.get(&mut self.key_fn, "intersect");
        self.first
            .by_ref()
            .find(|item| include.contains(&(self.key_fn)(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.first.size_hint().1)
    }
}

impl<A, B, Func, Key> FusedIterator for IntersectBy<A, B, Func, Key>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
}
