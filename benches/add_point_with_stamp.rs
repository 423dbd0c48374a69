//! Benchmarks for splatting: one call per point vs. one batched call.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heatmap::{Heatmap, Stamp};

const NPOINTS: usize = 1000;

// Deterministic, roughly centered scatter (sum of three uniform-ish draws).
fn gen_points(n: usize, mapsize: usize) -> Vec<(i32, i32)> {
    let mut state = 0x2545_f491_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as usize % (mapsize / 3).max(1)
    };
    (0..n)
        .map(|_| ((next() + next() + next()) as i32, (next() + next() + next()) as i32))
        .collect()
}

fn bench_per_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_point_with_stamp/per_point");
    let points = gen_points(NPOINTS, 1024);
    for radius in [4usize, 16, 64, 128] {
        let stamp = Stamp::new(radius).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let mut hm = Heatmap::new(1024, 1024).unwrap();
                for &(x, y) in &points {
                    hm.add_point_with_stamp(black_box(x), black_box(y), &stamp);
                }
                hm
            })
        });
    }
    group.finish();
}

fn bench_batched(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_point_with_stamp/batched");
    let points = gen_points(NPOINTS, 1024);
    for radius in [4usize, 16, 64, 128] {
        let stamp = Stamp::new(radius).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let mut hm = Heatmap::new(1024, 1024).unwrap();
                hm.add_points_with_stamp(black_box(points.iter().copied()), &stamp);
                hm
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_per_point, bench_batched);
criterion_main!(benches);
