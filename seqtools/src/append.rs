//! [`Append`] combinator.
//!
//! Note the naming: `append` puts its element at the *head* of the sequence. See
//! [`crate::prepend()`] for the tail.
use core::iter::{Fuse, FusedIterator};

/// Yields `element` first, then every item of the source.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Append<I>
where
    I: Iterator,
{
    head: Option<I::Item>,
    iter: Fuse<I>,
}

impl<I> Append<I>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and `element` to yield before it.
    pub fn new(iter: I, element: I::Item) -> Self {
        Self {
            head: Some(element),
            iter: iter.fuse(),
        }
    }
}

impl<I> Iterator for Append<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.head.is_some());
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_add(extra),
            hi.and_then(|hi| hi.checked_add(extra)),
        )
    }
}

impl<I> FusedIterator for Append<I> where I: Iterator {}
