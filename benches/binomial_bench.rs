//! Criterion benchmarks for the binomial queue
//!
//! Compares push/pop and merge workloads against `std::collections::BinaryHeap`
//! (wrapped in `Reverse` to make it a min-heap).
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench binomial_bench
//!
//! # Only the merge group
//! cargo bench --bench binomial_bench -- merge
//! ```

use binomial_queue::binomial::BinomialQueue;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

/// Same generator as the stress tests, so workloads line up
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &log_n in &[8u32, 12, 16] {
        let n = 1usize << log_n;
        let values = random_values(n, 12345 + log_n as u64);
        let label = format!("2^{}", log_n);

        group.bench_with_input(BenchmarkId::new("binomial", &label), &values, |b, vs| {
            b.iter(|| {
                let mut queue = BinomialQueue::new();
                for &v in vs {
                    queue.insert(v);
                }
                let mut sum = 0u64;
                while let Ok(v) = queue.delete_min() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in vs {
                    heap.push(Reverse(v));
                }
                let mut sum = 0u64;
                while let Some(Reverse(v)) = heap.pop() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for &log_n in &[8u32, 12, 16] {
        let n = 1usize << log_n;
        let left: BinomialQueue<u64> = random_values(n, 1).into_iter().collect();
        let right: BinomialQueue<u64> = random_values(n - 1, 2).into_iter().collect();
        let label = format!("2^{}", log_n);

        group.bench_function(BenchmarkId::new("binomial", &label), |b| {
            b.iter_batched(
                || (left.clone(), right.clone()),
                |(mut a, other)| {
                    a.merge(other);
                    black_box(a.len())
                },
                criterion::BatchSize::LargeInput,
            )
        });

        let left_std: BinaryHeap<Reverse<u64>> =
            random_values(n, 1).into_iter().map(Reverse).collect();
        let right_std: BinaryHeap<Reverse<u64>> =
            random_values(n - 1, 2).into_iter().map(Reverse).collect();

        group.bench_function(BenchmarkId::new("std_binary_heap", &label), |b| {
            b.iter_batched(
                || (left_std.clone(), right_std.clone()),
                |(mut a, mut other)| {
                    a.append(&mut other);
                    black_box(a.len())
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_merge);
criterion_main!(benches);
