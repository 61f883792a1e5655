//! [`Prepend`] combinator.
//!
//! Note the naming: `prepend` puts its element at the *tail* of the sequence. See
//! [`crate::append()`] for the head.
use core::iter::{Fuse, FusedIterator};

/// Yields every item of the source, then `element` last.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Prepend<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    tail: Option<I::Item>,
}

impl<I> Prepend<I>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and `element` to yield after it.
    pub fn new(iter: I, element: I::Item) -> Self {
        Self {
            iter: iter.fuse(),
            tail: Some(element),
        }
    }
}

impl<I> Iterator for Prepend<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().or_else(|| self.tail.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.tail.is_some());
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_add(extra),
            hi.and_then(|hi| hi.checked_add(extra)),
        )
    }
}

impl<I> FusedIterator for Prepend<I> where I: Iterator {}
