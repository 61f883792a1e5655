//! [`FromRange`] producer.
use core::iter::FusedIterator;

/// Producer of `count` consecutive integers starting at `start`.
///
/// Stops early after yielding [`i64::MAX`] rather than overflowing.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct FromRange {
    next: Option<i64>,
    remaining: usize,
}

impl FromRange {
    /// Create with first value `start` and length `count`.
    pub fn new(start: i64, count: usize) -> Self {
        Self {
            next: Some(start),
            remaining: count,
        }
    }
}

impl Iterator for FromRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        let Some(item) = self.next else {
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        self.next = item.checked_add(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) if 0 < self.remaining => {
                // Values left before `i64::MAX` is reached, inclusive.
                let headroom = i64::MAX.abs_diff(next).saturating_add(1);
                let len = usize::try_from(headroom).map_or(self.remaining, |h| h.min(self.remaining));
                (len, Some(len))
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for FromRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_range_basic() {
        assert_eq!(vec![0, 1, 2, 3, 4], FromRange::new(0, 5).collect::<Vec<_>>());
        assert_eq!(vec![-2, -1, 0], FromRange::new(-2, 3).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_range_empty() {
        let mut iter = FromRange::new(10, 0);
        assert_eq!((0, Some(0)), iter.size_hint());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_from_range_stops_at_max() {
        let out: Vec<_> = FromRange::new(i64::MAX - 1, 5).collect();
        assert_eq!(vec![i64::MAX - 1, i64::MAX], out);
    }

    #[test]
    fn test_from_range_size_hint() {
        let mut iter = FromRange::new(7, 3);
        assert_eq!((3, Some(3)), iter.size_hint());
        iter.next();
        assert_eq!((2, Some(2)), iter.size_hint());
        assert_eq!((2, Some(2)), FromRange::new(i64::MAX - 1, 100).size_hint());
    }
}
