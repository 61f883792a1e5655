//! Eager grouping under a caller-supplied key equality.
use crate::group_by::Group;

/// Buckets all of `iter` into groups whose keys are equal under `key_eq`.
///
/// Each item's key is matched against the groups found so far by linear scan, so this costs
/// O(items * groups) comparisons. Keys need no `Hash` or `Eq`. Groups are returned in the order
/// their keys were first encountered.
pub(crate) fn collect_groups<I, KeyFn, KeyEq, ValFn, Key, Val>(
    iter: I,
    mut key_fn: KeyFn,
    mut key_eq: KeyEq,
    mut val_fn: ValFn,
) -> Vec<Group<Key, Val>>
where
    I: Iterator,
    KeyFn: FnMut(&I::Item) -> Key,
    KeyEq: FnMut(&Key, &Key) -> bool,
    ValFn: FnMut(I::Item) -> Val,
{
    let mut groups: Vec<Group<Key, Val>> = Vec::new();
    for item in iter {
        let key = (key_fn)(&item);
        let val = (val_fn)(item);
        match groups.iter_mut().find(|group| (key_eq)(&group.key, &key)) {
            Some(group) => group.value.push(val),
            None => groups.push(Group {
                key,
                value: vec![val],
            }),
        }
    }
    tracing::trace!(groups = groups.len(), "group_compared buckets built");
    groups
}
