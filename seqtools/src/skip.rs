//! [`Skip`] combinator.
use core::iter::{Fuse, FusedIterator};

/// Discards the first `count` items of the source, then yields the rest unchanged.
///
/// The discarded items are pulled on the first call to `next`, not at construction.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: Fuse<I>,
    remaining: usize,
}

impl<I> Skip<I>
where
    I: Iterator,
{
    /// Creates with `iter` as the source, skipping `count` items.
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter: iter.fuse(),
            remaining: count,
        }
    }
}

impl<I> Iterator for Skip<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while 0 < self.remaining {
            self.remaining -= 1;
            if self.iter.next().is_none() {
                self.remaining = 0;
                return None;
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_sub(self.remaining),
            hi.map(|hi| hi.saturating_sub(self.remaining)),
        )
    }
}

impl<I> ExactSizeIterator for Skip<I> where I: ExactSizeIterator {}

impl<I> FusedIterator for Skip<I> where I: Iterator {}
