//! [`TryMap`] and related items.
use core::iter::{Fuse, FusedIterator};

/// Same as [`crate::map::Map`] but the selector returns `Result<Out, Error>` instead of `Out`.
///
/// Each result is yielded as-is. After the first `Err` the adaptor is exhausted and never pulls
/// from upstream again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct TryMap<I, Func> {
    iter: Option<Fuse<I>>,
    func: Func,
    index: usize,
}

impl<I, Func> TryMap<I, Func>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and fallible mapping `func`.
    pub fn new<Out, Error>(iter: I, func: Func) -> Self
    where
        Func: FnMut(I::Item, usize) -> Result<Out, Error>,
    {
        Self {
            iter: Some(iter.fuse()),
            func,
            index: 0,
        }
    }
}

impl<I, Func, Out, Error> Iterator for TryMap<I, Func>
where
    I: Iterator,
    Func: FnMut(I::Item, usize) -> Result<Out, Error>,
{
    type Item = Result<Out, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.as_mut()?.next()?;
        let index = self.index;
        self.index += 1;
        let result = (self.func)(item, index);
        if result.is_err() {
            self.iter = None;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            // May stop at the first error.
            Some(iter) => (iter.size_hint().0.min(1), iter.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, Func, Out, Error> FusedIterator for TryMap<I, Func>
where
    I: Iterator,
    Func: FnMut(I::Item, usize) -> Result<Out, Error>,
{
}
