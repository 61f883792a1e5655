//! [`UnionBy`] and the [`Union`] alias.
//!
//! A union is [`DistinctBy`] over [`Concat`]: the first occurrence of each key wins, across both
//! inputs, in concatenation order.
use crate::concat::Concat;
use crate::distinct::DistinctBy;

/// Distinct items of `first` followed by `second`, by key.
pub type UnionBy<A, B, Func, Key> = DistinctBy<Concat<A, B>, Func, Key>;

/// [`UnionBy`] keyed on the items themselves.
pub type Union<A, B> =
    UnionBy<A, B, fn(&<A as Iterator>::Item) -> <A as Iterator>::Item, <A as Iterator>::Item>;
