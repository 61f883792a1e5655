#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use core::convert::identity;
use core::hash::Hash;

pub use either::Either;

pub mod append;
pub mod concat;
pub mod distinct;
pub mod except;
pub mod filter;
pub mod from_mapping;
pub mod from_range;
pub mod from_repeat;
pub mod group_by;
mod group_compared;
pub mod intersect;
mod lookup;
pub mod map;
pub mod prepend;
pub mod reverse;
pub mod sequence;
pub mod skip;
pub mod take;
pub mod try_map;
pub mod union;

use append::Append;
use concat::{Concat, ConcatEither};
use distinct::{Distinct, DistinctBy};
use except::{Except, ExceptBy};
use filter::Filter;
pub use from_mapping::{FromMapping, KeyValue};
pub use from_range::FromRange;
pub use from_repeat::FromRepeat;
pub use group_by::{Group, GroupBy};
use intersect::{Intersect, IntersectBy};
use map::Map;
use prepend::Prepend;
use reverse::Reverse;
pub use sequence::Sequence;
use skip::Skip;
use take::Take;
use try_map::TryMap;
use union::{Union, UnionBy};

/// Extension trait for chaining sequence operators onto any [`Iterator`].
///
/// `map`, `filter`, `skip`, and `take` are not repeated here because [`Iterator`] already owns
/// those names. Use the free functions [`map()`], [`filter()`], [`skip()`], and [`take()`], or the
/// `_indexed` variants below.
#[sealed::sealed]
pub trait Seqtools: Iterator {
    /// Maps each item together with its zero-based pull index.
    fn map_indexed<Func, Out>(self, func: Func) -> Map<Self, Func>
    where
        Self: Sized,
        Func: FnMut(Self::Item, usize) -> Out,
    {
        Map::new(self, func)
    }

    /// Keeps items matching `func`, which also receives the upstream pull index.
    fn filter_indexed<Func>(self, func: Func) -> Filter<Self, Func>
    where
        Self: Sized,
        Func: FnMut(&Self::Item, usize) -> bool,
    {
        Filter::new(self, func)
    }

    /// Maps each item with a fallible function, stopping after the first error.
    fn try_map_indexed<Func, Out, Error>(self, func: Func) -> TryMap<Self, Func>
    where
        Self: Sized,
        Func: FnMut(Self::Item, usize) -> Result<Out, Error>,
    {
        TryMap::new(self, func)
    }

    /// Yields `element` *first*, then this sequence. See [`append()`].
    fn append(self, element: Self::Item) -> Append<Self>
    where
        Self: Sized,
    {
        Append::new(self, element)
    }

    /// Yields this sequence, then `element` *last*. See [`prepend()`].
    fn prepend(self, element: Self::Item) -> Prepend<Self>
    where
        Self: Sized,
    {
        Prepend::new(self, element)
    }

    /// Yields this sequence, then `other`.
    fn concat<Other>(self, other: Other) -> Concat<Self, Other::IntoIter>
    where
        Self: Sized,
        Other: IntoIterator<Item = Self::Item>,
    {
        Concat::new(self, other.into_iter())
    }

    /// Yields this sequence as [`Either::Left`], then `other` as [`Either::Right`].
    fn concat_either<Other>(self, other: Other) -> ConcatEither<Self, Other::IntoIter>
    where
        Self: Sized,
        Other: IntoIterator,
    {
        ConcatEither::new(self, other.into_iter())
    }

    /// Buffers this whole sequence, then yields it last to first.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Drops items equal to an earlier item.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
    {
        distinct(self)
    }

    /// Drops items whose key equals an earlier item's key.
    fn distinct_by<Func, Key>(self, key_fn: Func) -> DistinctBy<Self, Func, Key>
    where
        Self: Sized,
        Func: FnMut(&Self::Item) -> Key,
        Key: Eq + Hash,
    {
        DistinctBy::new(self, key_fn)
    }

    /// Keeps items that do not occur in `other`.
    fn except<Other>(self, other: Other) -> Except<Self, Other::IntoIter>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        Other: IntoIterator<Item = Self::Item>,
    {
        except(self, other)
    }

    /// Keeps items whose key does not occur among the keys of `other`.
    fn except_by<Other, Func, Key>(
        self,
        other: Other,
        key_fn: Func,
    ) -> ExceptBy<Self, Other::IntoIter, Func, Key>
    where
        Self: Sized,
        Other: IntoIterator<Item = Self::Item>,
        Func: FnMut(&Self::Item) -> Key,
        Key: Eq + Hash,
    {
        ExceptBy::new(self, other.into_iter(), key_fn)
    }

    /// Keeps items that also occur in `other`.
    fn intersect<Other>(self, other: Other) -> Intersect<Self, Other::IntoIter>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        Other: IntoIterator<Item = Self::Item>,
    {
        intersect(self, other)
    }

    /// Keeps items whose key also occurs among the keys of `other`.
    fn intersect_by<Other, Func, Key>(
        self,
        other: Other,
        key_fn: Func,
    ) -> IntersectBy<Self, Other::IntoIter, Func, Key>
    where
        Self: Sized,
        Other: IntoIterator<Item = Self::Item>,
        Func: FnMut(&Self::Item) -> Key,
        Key: Eq + Hash,
    {
        IntersectBy::new(self, other.into_iter(), key_fn)
    }

    /// Distinct items of this sequence followed by `other`.
    fn union<Other>(self, other: Other) -> Union<Self, Other::IntoIter>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
        Other: IntoIterator<Item = Self::Item>,
    {
        union(self, other)
    }

    /// Items of this sequence followed by `other`, keeping the first item per key.
    fn union_by<Other, Func, Key>(
        self,
        other: Other,
        key_fn: Func,
    ) -> UnionBy<Self, Other::IntoIter, Func, Key>
    where
        Self: Sized,
        Other: IntoIterator<Item = Self::Item>,
        Func: FnMut(&Self::Item) -> Key,
        Key: Eq + Hash,
    {
        union_by(self, other, key_fn)
    }

    /// Lazily groups items by key. See [`group_by()`].
    fn group_by<KeyFn, Key>(
        self,
        key_fn: KeyFn,
    ) -> GroupBy<Self, KeyFn, fn(Self::Item) -> Self::Item, Key, Self::Item>
    where
        Self: Sized,
        KeyFn: FnMut(&Self::Item) -> Key,
        Key: Eq + Hash + Clone,
    {
        group_by(self, key_fn)
    }

    /// Lazily groups selected values by key. See [`group_by_value()`].
    fn group_by_value<KeyFn, ValFn, Key, Val>(
        self,
        key_fn: KeyFn,
        val_fn: ValFn,
    ) -> GroupBy<Self, KeyFn, ValFn, Key, Val>
    where
        Self: Sized,
        KeyFn: FnMut(&Self::Item) -> Key,
        ValFn: FnMut(Self::Item) -> Val,
        Key: Eq + Hash + Clone,
    {
        GroupBy::new(self, key_fn, val_fn)
    }

    /// Eagerly groups items by key, comparing keys with `==`. See [`group_compared()`].
    fn group_compared<KeyFn, Key>(self, key_fn: KeyFn) -> Vec<Group<Key, Self::Item>>
    where
        Self: Sized,
        KeyFn: FnMut(&Self::Item) -> Key,
        Key: PartialEq,
    {
        group_compared(self, key_fn)
    }

    /// Eagerly groups selected values by key under `key_eq`. See [`group_compared_by()`].
    fn group_compared_by<KeyFn, KeyEq, ValFn, Key, Val>(
        self,
        key_fn: KeyFn,
        key_eq: KeyEq,
        val_fn: ValFn,
    ) -> Vec<Group<Key, Val>>
    where
        Self: Sized,
        KeyFn: FnMut(&Self::Item) -> Key,
        KeyEq: FnMut(&Key, &Key) -> bool,
        ValFn: FnMut(Self::Item) -> Val,
    {
        group_compared_by(self, key_fn, key_eq, val_fn)
    }
}

#[sealed::sealed]
impl<I> Seqtools for I where I: Iterator {}

/// Creates a [`FromMapping`] over the entries of `mapping`, in its iteration order.
pub fn from_mapping<M, K, V>(mapping: M) -> FromMapping<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    FromMapping::new(mapping.into_iter())
}

/// Creates a [`FromRange`] of `count` consecutive integers starting at `start`.
pub fn from_range(start: i64, count: usize) -> FromRange {
    FromRange::new(start, count)
}

/// Creates a [`FromRepeat`] yielding `value` `count` times.
pub fn from_repeat<T>(value: T, count: usize) -> FromRepeat<T>
where
    T: Clone,
{
    FromRepeat::new(value, count)
}

/// Creates a [`Map`] applying `func` to each item and its zero-based index.
pub fn map<I, Func, Out>(source: I, func: Func) -> Map<I::IntoIter, Func>
where
    I: IntoIterator,
    Func: FnMut(I::Item, usize) -> Out,
{
    Map::new(source.into_iter(), func)
}

/// Creates a [`Filter`] keeping items for which `func` returns `true`.
///
/// The index passed to `func` counts every upstream pull, including rejected items.
pub fn filter<I, Func>(source: I, func: Func) -> Filter<I::IntoIter, Func>
where
    I: IntoIterator,
    Func: FnMut(&I::Item, usize) -> bool,
{
    Filter::new(source.into_iter(), func)
}

/// Creates a [`TryMap`] applying fallible `func` to each item, ending after the first `Err`.
pub fn try_map<I, Func, Out, Error>(source: I, func: Func) -> TryMap<I::IntoIter, Func>
where
    I: IntoIterator,
    Func: FnMut(I::Item, usize) -> Result<Out, Error>,
{
    TryMap::new(source.into_iter(), func)
}

/// Creates an [`Append`] which yields `element` **first**, then `source`.
///
/// The head insertion is intentional and long-standing; [`prepend()`] inserts at the tail.
pub fn append<I>(source: I, element: I::Item) -> Append<I::IntoIter>
where
    I: IntoIterator,
{
    Append::new(source.into_iter(), element)
}

/// Creates a [`Prepend`] which yields `source`, then `element` **last**.
///
/// The tail insertion is intentional and long-standing; [`append()`] inserts at the head.
pub fn prepend<I>(source: I, element: I::Item) -> Prepend<I::IntoIter>
where
    I: IntoIterator,
{
    Prepend::new(source.into_iter(), element)
}

/// Creates a [`Concat`] which yields `source`, then `other`.
pub fn concat<A, B>(source: A, other: B) -> Concat<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Concat::new(source.into_iter(), other.into_iter())
}

/// Creates a [`ConcatEither`] which yields `source` as [`Either::Left`], then `other` as
/// [`Either::Right`].
pub fn concat_either<A, B>(source: A, other: B) -> ConcatEither<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ConcatEither::new(source.into_iter(), other.into_iter())
}

/// Creates a [`Skip`] which discards the first `count` items.
pub fn skip<I>(source: I, count: usize) -> Skip<I::IntoIter>
where
    I: IntoIterator,
{
    Skip::new(source.into_iter(), count)
}

/// Creates a [`Take`] which yields at most `count` leading items.
pub fn take<I>(source: I, count: usize) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    Take::new(source.into_iter(), count)
}

/// Creates a [`Reverse`] which buffers all of `source` and yields it last to first.
pub fn reverse<I>(source: I) -> Reverse<I::IntoIter>
where
    I: IntoIterator,
{
    Reverse::new(source.into_iter())
}

/// Creates a [`Distinct`] which drops items equal to an earlier item.
pub fn distinct<I>(source: I) -> Distinct<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + Eq + Hash,
{
    let key_fn: fn(&I::Item) -> I::Item = Clone::clone;
    DistinctBy::new(source.into_iter(), key_fn)
}

/// Creates a [`DistinctBy`] which drops items whose `key_fn` key was already seen.
pub fn distinct_by<I, Func, Key>(source: I, key_fn: Func) -> DistinctBy<I::IntoIter, Func, Key>
where
    I: IntoIterator,
    Func: FnMut(&I::Item) -> Key,
    Key: Eq + Hash,
{
    DistinctBy::new(source.into_iter(), key_fn)
}

/// Creates an [`Except`] which keeps items of `first` that do not occur in `second`.
///
/// `second` is drained on the first pull.
pub fn except<A, B>(first: A, second: B) -> Except<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    A::Item: Clone + Eq + Hash,
    B: IntoIterator<Item = A::Item>,
{
    let key_fn: fn(&A::Item) -> A::Item = Clone::clone;
    ExceptBy::new(first.into_iter(), second.into_iter(), key_fn)
}

/// Creates an [`ExceptBy`] which keeps items of `first` whose key does not occur in `second`.
///
/// `second` is drained on the first pull.
pub fn except_by<A, B, Func, Key>(
    first: A,
    second: B,
    key_fn: Func,
) -> ExceptBy<A::IntoIter, B::IntoIter, Func, Key>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
    ExceptBy::new(first.into_iter(), second.into_iter(), key_fn)
}

/// Creates an [`Intersect`] which keeps items of `first` that also occur in `second`.
///
/// `second` is drained on the first pull.
pub fn intersect<A, B>(first: A, second: B) -> Intersect<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    A::Item: Clone + Eq + Hash,
    B: IntoIterator<Item = A::Item>,
{
    let key_fn: fn(&A::Item) -> A::Item = Clone::clone;
    IntersectBy::new(first.into_iter(), second.into_iter(), key_fn)
}

/// Creates an [`IntersectBy`] which keeps items of `first` whose key also occurs in `second`.
///
/// `second` is drained on the first pull.
pub fn intersect_by<A, B, Func, Key>(
    first: A,
    second: B,
    key_fn: Func,
) -> IntersectBy<A::IntoIter, B::IntoIter, Func, Key>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
    IntersectBy::new(first.into_iter(), second.into_iter(), key_fn)
}

/// Creates a [`Union`], equivalent to `distinct(concat(first, second))`.
pub fn union<A, B>(first: A, second: B) -> Union<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    A::Item: Clone + Eq + Hash,
    B: IntoIterator<Item = A::Item>,
{
    let key_fn: fn(&A::Item) -> A::Item = Clone::clone;
    DistinctBy::new(Concat::new(first.into_iter(), second.into_iter()), key_fn)
}

/// Creates a [`UnionBy`], equivalent to `distinct_by(concat(first, second), key_fn)`.
pub fn union_by<A, B, Func, Key>(
    first: A,
    second: B,
    key_fn: Func,
) -> UnionBy<A::IntoIter, B::IntoIter, Func, Key>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    Func: FnMut(&A::Item) -> Key,
    Key: Eq + Hash,
{
    DistinctBy::new(Concat::new(first.into_iter(), second.into_iter()), key_fn)
}

/// Creates a [`GroupBy`] which buckets whole items under `key_fn`.
///
/// All of `source` is consumed on the first pull. Groups are emitted in the order their keys
/// were first encountered.
pub fn group_by<I, KeyFn, Key>(
    source: I,
    key_fn: KeyFn,
) -> GroupBy<I::IntoIter, KeyFn, fn(I::Item) -> I::Item, Key, I::Item>
where
    I: IntoIterator,
    KeyFn: FnMut(&I::Item) -> Key,
    Key: Eq + Hash + Clone,
{
    let val_fn: fn(I::Item) -> I::Item = identity;
    GroupBy::new(source.into_iter(), key_fn, val_fn)
}

/// Creates a [`GroupBy`] which buckets `val_fn(item)` under `key_fn(&item)`.
pub fn group_by_value<I, KeyFn, ValFn, Key, Val>(
    source: I,
    key_fn: KeyFn,
    val_fn: ValFn,
) -> GroupBy<I::IntoIter, KeyFn, ValFn, Key, Val>
where
    I: IntoIterator,
    KeyFn: FnMut(&I::Item) -> Key,
    ValFn: FnMut(I::Item) -> Val,
    Key: Eq + Hash + Clone,
{
    GroupBy::new(source.into_iter(), key_fn, val_fn)
}

/// Groups all of `source` by key, comparing keys with `==`.
///
/// Unlike [`group_by()`] this is eager and needs only `PartialEq` keys. Each item is matched
/// against the groups so far by linear scan. Groups are in first-encountered order.
pub fn group_compared<I, KeyFn, Key>(source: I, key_fn: KeyFn) -> Vec<Group<Key, I::Item>>
where
    I: IntoIterator,
    KeyFn: FnMut(&I::Item) -> Key,
    Key: PartialEq,
{
    group_compared::collect_groups(source.into_iter(), key_fn, |a: &Key, b: &Key| a == b, identity)
}

/// Groups `val_fn(item)` for all of `source` by key, comparing keys with `key_eq`.
pub fn group_compared_by<I, KeyFn, KeyEq, ValFn, Key, Val>(
    source: I,
    key_fn: KeyFn,
    key_eq: KeyEq,
    val_fn: ValFn,
) -> Vec<Group<Key, Val>>
where
    I: IntoIterator,
    KeyFn: FnMut(&I::Item) -> Key,
    KeyEq: FnMut(&Key, &Key) -> bool,
    ValFn: FnMut(I::Item) -> Val,
{
    group_compared::collect_groups(source.into_iter(), key_fn, key_eq, val_fn)
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    type Src = std::vec::IntoIter<u32>;

    assert_impl_all!(FromRange: Sequence, Send, Sync);
    assert_impl_all!(Distinct<Src>: Sequence, Send);
    assert_impl_all!(Except<Src, Src>: Sequence, Send);
    assert_impl_all!(Intersect<Src, Src>: Sequence, Send);
    assert_impl_all!(Union<Src, Src>: Sequence, Send);
    assert_impl_all!(Reverse<Src>: Sequence, Send);
    assert_impl_all!(Append<Src>: Sequence, Send);
    assert_impl_all!(Prepend<Src>: Sequence, Send);

    #[test]
    fn test_free_functions_accept_collections() {
        assert_eq!(vec![0, 1, 2], take(vec![0, 1, 2, 3], 3).collect::<Vec<_>>());
        assert_eq!(vec![3], skip([0, 1, 2, 3], 3).collect::<Vec<_>>());
        assert_eq!(vec!['c', 'b', 'a'], reverse("abc".chars()).collect::<Vec<_>>());
    }

    #[test]
    fn test_group_compared_default_equality() {
        let out = group_compared(["aa", "b", "cc", "d", "eee"], |s: &&str| s.len());
        assert_eq!(
            vec![
                KeyValue::new(2, vec!["aa", "cc"]),
                KeyValue::new(1, vec!["b", "d"]),
                KeyValue::new(3, vec!["eee"]),
            ],
            out
        );
    }
}
