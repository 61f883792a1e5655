//! [`GroupBy`] and the [`Group`] type.
use core::hash::Hash;
use core::iter::FusedIterator;

use rustc_hash::FxHashMap;

use crate::from_mapping::{FromMapping, KeyValue};

/// A key with every value that was bucketed under it, in source order.
pub type Group<K, V> = KeyValue<K, Vec<V>>;

enum GroupByState<I, KeyFn, ValFn, Key, Val> {
    Accumulating {
        iter: I,
        key_fn: KeyFn,
        val_fn: ValFn,
    },
    Emitting {
        groups: FromMapping<std::vec::IntoIter<(Key, Vec<Val>)>>,
    },
}

/// Combinator which buckets every upstream item by key, then emits one [`Group`] per key.
///
/// The whole source is consumed on the first call to `next`. Groups come out in the order their
/// keys were first encountered; values within a group keep source order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupBy<I, KeyFn, ValFn, Key, Val> {
    state: GroupByState<I, KeyFn, ValFn, Key, Val>,
}

impl<I, KeyFn, ValFn, Key, Val> GroupBy<I, KeyFn, ValFn, Key, Val>
where
    I: Iterator,
{
    /// Creates with `iter` as the source, `key_fn` selecting each item's key, and `val_fn`
    /// selecting what gets stored in the group.
    pub fn new(iter: I, key_fn: KeyFn, val_fn: ValFn) -> Self
    where
        KeyFn: FnMut(&I::Item) -> Key,
        ValFn: FnMut(I::Item) -> Val,
        Key: Eq + Hash + Clone,
    {
        Self {
            state: GroupByState::Accumulating {
                iter,
                key_fn,
                val_fn,
            },
        }
    }
}

impl<I, KeyFn, ValFn, Key, Val> Iterator for GroupBy<I, KeyFn, ValFn, Key, Val>
where
    I: Iterator,
    KeyFn: FnMut(&I::Item) -> Key,
    ValFn: FnMut(I::Item) -> Val,
    Key: Eq + Hash + Clone,
{
    type Item = Group<Key, Val>;

    fn next(&mut self) -> Option<Self::Item> {
        if let GroupByState::Accumulating {
            iter,
            key_fn,
            val_fn,
        } = &mut self.state
        {
            let mut index = FxHashMap::<Key, usize>::default();
            let mut buckets = Vec::<(Key, Vec<Val>)>::new();
            let mut items = 0_usize;
            for item in iter {
                items += 1;
                let key = (key_fn)(&item);
                let val = (val_fn)(item);
                if let Some(&i) = index.get(&key) {
                    buckets[i].1.push(val);
                } else {
                    index.insert(key.clone(), buckets.len());
                    buckets.push((key, vec![val]));
                }
            }
            tracing::trace!(groups = buckets.len(), items, "group_by buckets built");
            self.state = GroupByState::Emitting {
                groups: FromMapping::new(buckets.into_iter()),
            };
        }

        match &mut self.state {
            GroupByState::Emitting { groups } => groups.next(),
            GroupByState::Accumulating { .. } => unreachable!(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            GroupByState::Accumulating { iter, .. } => {
                let (lo, hi) = iter.size_hint();
                (lo.min(1), hi)
            }
            GroupByState::Emitting { groups } => groups.size_hint(),
        }
    }
}

impl<I, KeyFn, ValFn, Key, Val> FusedIterator for GroupBy<I, KeyFn, ValFn, Key, Val>
where
    I: Iterator,
    KeyFn: FnMut(&I::Item) -> Key,
    ValFn: FnMut(I::Item) -> Val,
    Key: Eq + Hash + Clone,
{
}
