//! [`Concat`], [`ConcatEither`], and related items.
use core::iter::{Fuse, FusedIterator};

use either::Either;

fn add_size_hints(
    (lo_a, hi_a): (usize, Option<usize>),
    (lo_b, hi_b): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let hi = match (hi_a, hi_b) {
        (Some(a), Some(b)) => a.checked_add(b),
        _ => None,
    };
    (lo_a.saturating_add(lo_b), hi)
}

/// Yields every item of `first`, then every item of `second`.
///
/// `second` is not pulled until `first` is exhausted.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: Fuse<A>,
    second: Fuse<B>,
}

impl<A, B> Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Creates from the two halves.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first: first.fuse(),
            second: second.fuse(),
        }
    }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.first.next().or_else(|| self.second.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        add_size_hints(self.first.size_hint(), self.second.size_hint())
    }
}

impl<A, B> FusedIterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

/// Like [`Concat`], but the halves may have different item types.
///
/// Items of `first` come out as [`Either::Left`], items of `second` as [`Either::Right`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct ConcatEither<A, B> {
    first: Fuse<A>,
    second: Fuse<B>,
}

impl<A, B> ConcatEither<A, B>
where
    A: Iterator,
    B: Iterator,
{
    /// Creates from the two halves.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first: first.fuse(),
            second: second.fuse(),
        }
    }
}

impl<A, B> Iterator for ConcatEither<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = Either<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.first
            .next()
            .map(Either::Left)
            .or_else(|| self.second.next().map(Either::Right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        add_size_hints(self.first.size_hint(), self.second.size_hint())
    }
}

impl<A, B> FusedIterator for ConcatEither<A, B>
where
    A: Iterator,
    B: Iterator,
{
}
