//! Benchmarks for the OKLCH color kernel.

use criterion::{Criterion, criterion_group, criterion_main};
use design_core::color::{OklchColor, contrast_ratio_str};
use std::hint::black_box;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_oklch", |b| {
        b.iter(|| OklchColor::parse(black_box("oklch(0.7 0.15 250)")));
    });
}

fn bench_adjust(c: &mut Criterion) {
    let base = OklchColor::new(0.7, 0.15, 250.0);
    c.bench_function("adjust", |b| {
        b.iter(|| black_box(base).adjust(0.05, 0.02, -15.0));
    });
}

fn bench_contrast(c: &mut Criterion) {
    c.bench_function("contrast_ratio_str", |b| {
        b.iter(|| contrast_ratio_str(black_box("oklch(0.95 0 0)"), black_box("oklch(0.15 0 0)")));
    });
}

criterion_group!(benches, bench_parse, bench_adjust, bench_contrast);
criterion_main!(benches);
