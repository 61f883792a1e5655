//! Operator chains built with the [`Seqtools`] extension trait.

use std::cell::Cell;

use seqtools::{Either, Group, KeyValue, Seqtools, from_mapping, from_range};

#[test]
fn test_chain_map_filter_reverse() {
    let out: Vec<_> = from_range(1, 6)
        .map_indexed(|x, i| x * 100 + i as i64)
        .filter_indexed(|_, i| i != 2)
        .reverse()
        .collect();
    assert_eq!(vec![605, 504, 403, 201, 100], out);
}

#[test]
fn test_chain_append_prepend() {
    let out: Vec<_> = vec!['b', 'c']
        .into_iter()
        .append('a')
        .prepend('d')
        .collect();
    assert_eq!(vec!['a', 'b', 'c', 'd'], out);
}

#[test]
fn test_chain_concat_union_distinct() {
    let out: Vec<_> = [3, 1, 3].into_iter().concat([2, 1]).distinct().collect();
    assert_eq!(vec![3, 1, 2], out);

    let out: Vec<_> = [3, 1, 3].into_iter().union([2, 1]).collect();
    assert_eq!(vec![3, 1, 2], out);
}

#[test]
fn test_chain_concat_either_heterogeneous() {
    let labels: Vec<String> = [1, 2]
        .into_iter()
        .concat_either(["three"])
        .map(|item| match item {
            Either::Left(n) => n.to_string(),
            Either::Right(s) => s.to_owned(),
        })
        .collect();
    assert_eq!(vec!["1", "2", "three"], labels);
}

#[test]
fn test_chain_except_intersect() {
    let blocked = ["spam", "ads"];
    let kept: Vec<_> = ["news", "spam", "mail", "ads", "news"]
        .into_iter()
        .except(blocked)
        .collect();
    assert_eq!(vec!["news", "mail", "news"], kept);

    let hits: Vec<_> = ["news", "spam", "mail", "ads"]
        .into_iter()
        .intersect(blocked)
        .collect();
    assert_eq!(vec!["spam", "ads"], hits);
}

#[test]
fn test_chain_except_streams_infinite_first() {
    let out: Vec<_> = (0_u32..)
        .except_by(0..5, |x| x % 10)
        .take(4)
        .collect();
    assert_eq!(vec![5, 6, 7, 8], out);
}

#[test]
fn test_chain_intersect_by_and_take() {
    let out: Vec<_> = (0_u32..)
        .intersect_by([7, 9], |x| x % 10)
        .take(4)
        .collect();
    assert_eq!(vec![7, 9, 17, 19], out);
}

#[test]
fn test_chain_group_by_lazy() {
    let pulled = Cell::new(0);
    let mut groups = ["ant", "bee", "asp", "cat", "bat"]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .group_by(|w| w.as_bytes()[0]);
    assert_eq!(0, pulled.get());

    assert_eq!(Some(KeyValue::new(b'a', vec!["ant", "asp"])), groups.next());
    assert_eq!(5, pulled.get());
    let rest: Vec<Group<u8, &str>> = groups.collect();
    assert_eq!(
        vec![
            KeyValue::new(b'b', vec!["bee", "bat"]),
            KeyValue::new(b'c', vec!["cat"]),
        ],
        rest
    );
}

#[test]
fn test_chain_group_by_value_from_mapping() {
    let scores = [("ann", 3), ("bob", 5), ("ann", 4), ("cy", 5)];
    let totals: Vec<_> = from_mapping(scores)
        .group_by_value(|kv| kv.key, |kv| kv.value)
        .map(|group| (group.key, group.value.iter().sum::<i32>()))
        .collect();
    assert_eq!(vec![("ann", 7), ("bob", 5), ("cy", 5)], totals);
}

#[test]
fn test_chain_group_compared() {
    let groups = ["x", "yy", "z", "ww"]
        .into_iter()
        .group_compared(|s| s.len());
    assert_eq!(
        vec![KeyValue::new(1, vec!["x", "z"]), KeyValue::new(2, vec!["yy", "ww"])],
        groups
    );

    let groups = [10, 11, 25, 29, 12]
        .into_iter()
        .group_compared_by(|x| *x, |a, b| a / 10 == b / 10, |x| x % 10);
    assert_eq!(
        vec![KeyValue::new(10, vec![0, 1, 2]), KeyValue::new(25, vec![5, 9])],
        groups
    );
}

#[test]
fn test_chain_try_map() -> anyhow::Result<()> {
    let parsed: Vec<u16> = ["1", "22", "333"]
        .into_iter()
        .try_map_indexed(|s, _| s.parse::<u16>())
        .collect::<Result<_, _>>()?;
    assert_eq!(vec![1, 22, 333], parsed);

    let mut failing = ["1", "x", "3"]
        .into_iter()
        .try_map_indexed(|s, i| s.parse::<u16>().map(|n| (i, n)));
    assert_eq!(Some(Ok((0, 1))), failing.next().map(|r| r.map_err(|_| ())));
    assert!(failing.next().is_some_and(|r| r.is_err()));
    assert!(failing.next().is_none());
    Ok(())
}
