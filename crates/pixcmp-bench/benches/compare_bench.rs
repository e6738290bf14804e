//! Benchmarks for the comparators.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use pixcmp_core::{Bounds, Rgba64Buffer, RgbaBuffer};
use pixcmp_ops::{compare_fast, compare_fast_par, compare_precise, compare_precise_par, normalize};

fn noise(width: u32, height: u32, seed: u32) -> RgbaBuffer {
    let len = width as usize * height as usize * 4;
    let data = (0..len as u32)
        .map(|i| (i.wrapping_mul(2654435761).wrapping_add(seed) >> 24) as u8)
        .collect();
    RgbaBuffer::from_raw(Bounds::from_size(width, height), data).unwrap()
}

/// Precise vs fast on the same canonical pair.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for size in [64u32, 512, 1024].iter() {
        let a = noise(*size, *size, 1);
        let b = noise(*size, *size, 2);

        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        let pair = (&a, &b);

        group.bench_with_input(BenchmarkId::new("precise", size), &pair, |bench, &(a, b)| {
            bench.iter(|| compare_precise(black_box(a), black_box(b)))
        });

        group.bench_with_input(BenchmarkId::new("fast", size), &pair, |bench, &(a, b)| {
            bench.iter(|| compare_fast(black_box(a), black_box(b)))
        });

        group.bench_with_input(BenchmarkId::new("precise_par", size), &pair, |bench, &(a, b)| {
            bench.iter(|| compare_precise_par(black_box(a), black_box(b)))
        });

        group.bench_with_input(BenchmarkId::new("fast_par", size), &pair, |bench, &(a, b)| {
            bench.iter(|| compare_fast_par(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

/// Cost of normalizing a 16-bit image before the fast path.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let canonical = noise(1024, 1024, 3);
    let deep = Rgba64Buffer::filled(
        Bounds::from_size(1024, 1024),
        [0x8000, 0x4000, 0x2000, 0xffff],
    );

    group.throughput(Throughput::Elements(1024 * 1024));

    group.bench_function("canonical_noop", |b| {
        b.iter(|| normalize(black_box(&canonical)).as_bytes().len())
    });

    group.bench_function("rgba64_convert", |b| {
        b.iter(|| normalize(black_box(&deep)).as_bytes().len())
    });

    group.finish();
}

criterion_group!(benches, bench_compare, bench_normalize);
criterion_main!(benches);
