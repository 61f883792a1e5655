//! [`FromRepeat`] producer.
use core::iter::FusedIterator;

/// Producer which yields the same value `count` times.
///
/// Each pull clones `value`. Use a reference or an [`Rc`](std::rc::Rc) to hand out one shared
/// value instead of copies.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct FromRepeat<T> {
    value: T,
    remaining: usize,
}

impl<T> FromRepeat<T>
where
    T: Clone,
{
    /// Create with repeated `value` and length `count`.
    pub fn new(value: T, count: usize) -> Self {
        Self {
            value,
            remaining: count,
        }
    }
}

impl<T> Iterator for FromRepeat<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for FromRepeat<T> where T: Clone {}

impl<T> FusedIterator for FromRepeat<T> where T: Clone {}
