//! [`Map`] and related items.
use core::iter::{Fuse, FusedIterator};

/// Like [`Iterator::map`], but the selector also receives the zero-based pull index.
///
/// Pulls one upstream item per output item and buffers nothing.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Map<I, Func> {
    iter: Fuse<I>,
    func: Func,
    index: usize,
}

impl<I, Func> Map<I, Func>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and mapping `func`.
    pub fn new<Out>(iter: I, func: Func) -> Self
    where
        Func: FnMut(I::Item, usize) -> Out,
    {
        Self {
            iter: iter.fuse(),
            func,
            index: 0,
        }
    }
}

impl<I, Func, Out> Iterator for Map<I, Func>
where
    I: Iterator,
    Func: FnMut(I::Item, usize) -> Out,
{
    type Item = Out;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.func)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, Func, Out> ExactSizeIterator for Map<I, Func>
where
    I: ExactSizeIterator,
    Func: FnMut(I::Item, usize) -> Out,
{
}

impl<I, Func, Out> FusedIterator for Map<I, Func>
where
    I: Iterator,
    Func: FnMut(I::Item, usize) -> Out,
{
}
