// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_map_window::{MapInterval, reconcile};

fn bench_reconcile_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile/script");

    // Script construction is O(removed) regardless of window size.
    for len in [32i32, 256, 2_048] {
        let previous = MapInterval::new(0, len);
        let cases = [
            ("identical", previous),
            ("shift_by_one", MapInterval::new(1, len + 1)),
            ("shrink_half", MapInterval::new(len / 4, len - len / 4)),
            ("disjoint", MapInterval::new(len * 2, len * 3)),
        ];
        for (name, current) in cases {
            group.bench_with_input(BenchmarkId::new(name, len), &current, |b, current| {
                b.iter(|| black_box(reconcile(black_box(*current), black_box(previous))));
            });
        }
    }

    group.finish();
}

fn bench_apply_vs_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile/apply");

    // Hypothesis: applying the script for a one-index pan is O(1) amortized on a
    // deque and O(n) on a vec (head removal shifts), while rebuilding is always O(n).
    for len in [256i32, 4_096] {
        let previous = MapInterval::new(0, len);
        let current = MapInterval::new(1, len + 1);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("vec_apply", len), |b| {
            b.iter_batched(
                || previous.indices().collect::<Vec<i32>>(),
                |mut target| {
                    reconcile(current, previous)
                        .apply(&mut target, |i| i)
                        .expect("target mirrors previous");
                    black_box(target);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("deque_apply", len), |b| {
            b.iter_batched(
                || previous.indices().collect::<std::collections::VecDeque<i32>>(),
                |mut target| {
                    reconcile(current, previous)
                        .apply(&mut target, |i| i)
                        .expect("target mirrors previous");
                    black_box(target);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("rebuild", len), |b| {
            b.iter(|| black_box(current.indices().collect::<Vec<i32>>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile_shapes, bench_apply_vs_rebuild);
criterion_main!(benches);
