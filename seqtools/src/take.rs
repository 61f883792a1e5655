//! [`Take`] combinator.
use core::iter::{Fuse, FusedIterator};

/// Yields at most `count` leading items of the source.
///
/// Once `count` items have been yielded the source is never pulled again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: Fuse<I>,
    remaining: usize,
}

impl<I> Take<I>
where
    I: Iterator,
{
    /// Creates with `iter` as the source, yielding up to `count` items.
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter: iter.fuse(),
            remaining: count,
        }
    }
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        self.remaining -= 1;
        let item = self.iter.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if 0 == self.remaining {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (
            lo.min(self.remaining),
            Some(hi.map_or(self.remaining, |hi| hi.min(self.remaining))),
        )
    }
}

impl<I> ExactSizeIterator for Take<I> where I: ExactSizeIterator {}

impl<I> FusedIterator for Take<I> where I: Iterator {}
