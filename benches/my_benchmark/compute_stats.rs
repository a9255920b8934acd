use axis_stats::prelude::*;
use criterion::{black_box, Criterion};

const SHAPES: [(usize, usize); 3] = [(16, 16), (256, 64), (1024, 1024)];

pub fn bench_compute_stats(c: &mut Criterion) {
    for (rows, cols) in SHAPES {
        let array = make_random(rows, cols, 42, 1, 1000);
        let id = &format!("compute_stats_{}x{}", rows, cols);
        c.bench_function(id, |b| b.iter(|| compute_stats(black_box(&array)).unwrap()));
    }
}

pub fn bench_format_report(c: &mut Criterion) {
    let array = make_random(64, 16, 42, 1, 1000);
    let stats = compute_stats(&array).unwrap();
    c.bench_function("format_report_64x16", |b| {
        b.iter(|| format_report(black_box(&array.view()), black_box(&stats)))
    });
}
