// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use understory_map_view::Projection;
use understory_map_window::{CellPlacement, GridFactory, MapWindow, WindowConfig};

/// Simple deterministic RNG for reproducible pan walks.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        u32::try_from(self.0 >> 32).expect("high half fits in u32")
    }

    fn next_delta(&mut self, max: f64) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX) * 2.0 - 1.0) * max
    }
}

struct Rects;

impl GridFactory for Rects {
    type Cell = Rect;
    type Row = Vec<Rect>;

    fn create_row(&mut self, _y: i32) -> Vec<Rect> {
        Vec::new()
    }

    fn create_cell(&mut self, placement: CellPlacement<'_>) -> Rect {
        placement.rect
    }
}

fn pan_walk(n: usize, max_step: f64) -> Vec<Projection> {
    let mut rng = Lcg::new(0x00c0_ffee);
    let mut p = Projection::new((500.0, 500.0), 1.0).expect("valid projection");
    (0..n)
        .map(|_| {
            p = p.pan_by_cells(Vec2::new(
                rng.next_delta(max_step),
                rng.next_delta(max_step),
            ));
            p
        })
        .collect()
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_window/pan");
    let config = WindowConfig::default()
        .with_map_size(1_000)
        .with_viewport(1_280.0, 720.0)
        .with_cell_pixel_size(8.0);

    for max_step in [0.5, 4.0, 40.0] {
        let walk = pan_walk(64, max_step);

        group.bench_function(format!("incremental(step<={max_step})"), |b| {
            b.iter_batched(
                || (MapWindow::configure(config).expect("valid config"), Vec::new()),
                |(mut window, mut rows): (MapWindow, Vec<Vec<Rect>>)| {
                    for p in &walk {
                        black_box(window.draw(&mut rows, &mut Rects, p).expect("in sync"));
                    }
                    black_box(rows);
                },
                BatchSize::LargeInput,
            );
        });

        // Baseline: throw the target away every frame.
        group.bench_function(format!("rebuild(step<={max_step})"), |b| {
            b.iter_batched(
                || MapWindow::configure(config).expect("valid config"),
                |mut window| {
                    for p in &walk {
                        let mut rows: Vec<Vec<Rect>> = Vec::new();
                        window.reset();
                        black_box(window.draw(&mut rows, &mut Rects, p).expect("in sync"));
                        black_box(rows);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_window/zoom");
    let config = WindowConfig::default()
        .with_map_size(1_000)
        .with_viewport(1_280.0, 720.0)
        .with_cell_pixel_size(8.0);
    let base = Projection::new((500.0, 500.0), 1.0).expect("valid projection");
    let zooms: Vec<Projection> = [1.0, 1.25, 1.5, 2.0, 1.5, 1.0, 0.75, 0.5, 1.0]
        .into_iter()
        .map(|z| base.with_zoom(z))
        .collect();

    group.bench_function("zoom_cycle", |b| {
        b.iter_batched(
            || (MapWindow::configure(config).expect("valid config"), Vec::new()),
            |(mut window, mut rows): (MapWindow, Vec<Vec<Rect>>)| {
                for p in &zooms {
                    black_box(window.draw(&mut rows, &mut Rects, p).expect("in sync"));
                }
                black_box(rows);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pan, bench_zoom);
criterion_main!(benches);
