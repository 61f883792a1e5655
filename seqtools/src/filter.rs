//! [`Filter`] and related items.
use core::iter::{Fuse, FusedIterator};

/// Like [`Iterator::filter`], but the predicate also receives the upstream pull index.
///
/// The index counts every item pulled from upstream, including rejected ones.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Filter<I, Func> {
    iter: Fuse<I>,
    func: Func,
    index: usize,
}

impl<I, Func> Filter<I, Func>
where
    I: Iterator,
{
    /// Creates with `iter` as the source and predicate `func`.
    pub fn new(iter: I, func: Func) -> Self
    where
        Func: FnMut(&I::Item, usize) -> bool,
    {
        Self {
            iter: iter.fuse(),
            func,
            index: 0,
        }
    }
}

impl<I, Func> Iterator for Filter<I, Func>
where
    I: Iterator,
    Func: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.func)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, Func> FusedIterator for Filter<I, Func>
where
    I: Iterator,
    Func: FnMut(&I::Item, usize) -> bool,
{
}
