use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use vec_interval_set::IntervalSet;

struct IntervalGenerator {
    rng: StdRng,
    limit: u32,
}
impl IntervalGenerator {
    fn new() -> Self {
        const LIMIT: u32 = 1_000_000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> (u32, u32) {
        let low = self.rng.gen_range(0..=self.limit - 1);
        let high = self.rng.gen_range(low + 1..=self.limit);
        (low, high)
    }
}

// insert helper fn
fn interval_set_insert(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = IntervalSet::new();
        for (low, high) in intervals.iter().copied() {
            black_box(set.insert(low, high).unwrap());
        }
    });
}

// insert and remove helper fn
fn interval_set_insert_remove(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = IntervalSet::new();
        for (low, high) in intervals.iter().copied() {
            black_box(set.insert(low, high).unwrap());
        }
        for (low, high) in intervals.iter().copied() {
            black_box(set.remove(low, high));
        }
    });
}

fn bench_interval_set_insert(c: &mut Criterion) {
    c.bench_function("bench_interval_set_insert_100", |b| {
        interval_set_insert(100, b)
    });
    c.bench_function("bench_interval_set_insert_1000", |b| {
        interval_set_insert(1000, b)
    });
    c.bench_function("bench_interval_set_insert_10,000", |b| {
        interval_set_insert(10_000, b)
    });
    c.bench_function("bench_interval_set_insert_100,000", |b| {
        interval_set_insert(100_000, b)
    });
}

fn bench_interval_set_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_interval_set_insert_remove_100", |b| {
        interval_set_insert_remove(100, b)
    });
    c.bench_function("bench_interval_set_insert_remove_1000", |b| {
        interval_set_insert_remove(1000, b)
    });
    c.bench_function("bench_interval_set_insert_remove_10,000", |b| {
        interval_set_insert_remove(10_000, b)
    });
    c.bench_function("bench_interval_set_insert_remove_100,000", |b| {
        interval_set_insert_remove(100_000, b)
    });
}

// overlapping query helper fn
fn interval_set_overlapping(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut set = IntervalSet::new();
    for (low, high) in intervals.iter().copied() {
        set.insert(low, high).unwrap();
    }
    bench.iter(|| {
        for (low, high) in intervals.iter().copied() {
            black_box(set.overlapping(low, high).collect::<Vec<_>>());
        }
    });
}

// full scan helper fn
fn interval_set_iter(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut set = IntervalSet::new();
    for (low, high) in intervals.iter().copied() {
        set.insert(low, high).unwrap();
    }
    bench.iter(|| {
        black_box(set.iter().collect::<Vec<_>>());
    });
}

fn bench_interval_set_overlapping(c: &mut Criterion) {
    c.bench_function("bench_interval_set_overlapping_100", |b| {
        interval_set_overlapping(100, b)
    });
    c.bench_function("bench_interval_set_overlapping_1000", |b| {
        interval_set_overlapping(1000, b)
    });
}

fn bench_interval_set_iter(c: &mut Criterion) {
    c.bench_function("bench_interval_set_iter_100", |b| {
        interval_set_iter(100, b)
    });
    c.bench_function("bench_interval_set_iter_1000", |b| {
        interval_set_iter(1000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_interval_set_insert, bench_interval_set_insert_remove,
}

criterion_group! {
    name = benches_query;
    config = criterion_config();
    targets = bench_interval_set_overlapping, bench_interval_set_iter
}

criterion_main!(benches_basic_op, benches_query);
