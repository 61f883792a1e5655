use std::collections::HashSet;
use std::sync::OnceLock;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seqtools::{Seqtools, distinct, except, group_by};

const NUM_INTS: usize = 100_000;

fn vals() -> impl Iterator<Item = usize> {
    static VALS: OnceLock<Vec<usize>> = OnceLock::new();
    VALS.get_or_init(|| {
        let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(5938450);
        let mut vals = Vec::with_capacity(NUM_INTS);
        for _ in 0..NUM_INTS {
            vals.push(rand::Rng::gen_range(&mut rng, 0..(1 << 12)));
        }
        vals
    })
    .iter()
    .copied()
}

fn benchmark_distinct(c: &mut Criterion) {
    c.bench_function("set_ops/distinct", |b| {
        let _init = vals();
        b.iter(|| {
            for x in distinct(vals()) {
                black_box(x);
            }
        });
    });

    c.bench_function("set_ops/distinct/std_hashset", |b| {
        let _init = vals();
        b.iter(|| {
            let mut seen = HashSet::new();
            for x in vals().filter(|x| seen.insert(*x)) {
                black_box(x);
            }
        });
    });
}

fn benchmark_except(c: &mut Criterion) {
    c.bench_function("set_ops/except", |b| {
        let _init = vals();
        b.iter(|| {
            for x in except(vals(), vals().step_by(3)) {
                black_box(x);
            }
        });
    });
}

fn benchmark_group_by(c: &mut Criterion) {
    c.bench_function("set_ops/group_by", |b| {
        let _init = vals();
        b.iter(|| {
            for group in group_by(vals(), |x| x % 64) {
                black_box(group);
            }
        });
    });

    c.bench_function("set_ops/group_compared", |b| {
        let _init = vals();
        b.iter(|| black_box(vals().group_compared(|x| x % 64)));
    });
}

criterion_group!(
    set_ops,
    benchmark_distinct,
    benchmark_except,
    benchmark_group_by,
);
criterion_main!(set_ops);
