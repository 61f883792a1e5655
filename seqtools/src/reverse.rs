//! [`Reverse`] combinator.
use core::iter::FusedIterator;

enum ReverseState<I, Item> {
    Accumulating { iter: I },
    Emitting { buffer: Vec<Item> },
}

/// Combinator which waits for all upstream items, then emits them last to first.
///
/// The whole source is buffered on the first call to `next`, so this does not terminate on an
/// infinite source.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Reverse<I>
where
    I: Iterator,
{
    state: ReverseState<I, I::Item>,
}

impl<I> Reverse<I>
where
    I: Iterator,
{
    /// Creates a new `Reverse` combinator over `iter`.
    pub fn new(iter: I) -> Self {
        Self {
            state: ReverseState::Accumulating { iter },
        }
    }
}

impl<I> Iterator for Reverse<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let ReverseState::Accumulating { iter } = &mut self.state {
            let buffer: Vec<_> = iter.collect();
            tracing::trace!(len = buffer.len(), "reverse buffered upstream");
            self.state = ReverseState::Emitting { buffer };
        }

        match &mut self.state {
            ReverseState::Emitting { buffer } => buffer.pop(),
            ReverseState::Accumulating { .. } => unreachable!(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Accumulating { iter } => iter.size_hint(),
            ReverseState::Emitting { buffer } => (buffer.len(), Some(buffer.len())),
        }
    }
}

impl<I> FusedIterator for Reverse<I> where I: Iterator {}
