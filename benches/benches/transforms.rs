//! Benchmarks for block transform operations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dctc_core::{Image, ReductionMode};
use dctc_transform::{
    forward_dct_8x8, inverse_dct_8x8, merge, pad, select_first_k, split, CoefficientReducer,
};

fn bench_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Transform");

    let input: [f32; 64] = core::array::from_fn(|i| ((i * 7) % 256) as f32);

    group.bench_function("dct_8x8_forward", |b| {
        b.iter(|| {
            let mut output = [0.0f32; 64];
            forward_dct_8x8(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("dct_8x8_inverse", |b| {
        let mut coeffs = [0.0f32; 64];
        forward_dct_8x8(&input, &mut coeffs);

        b.iter(|| {
            let mut output = [0.0f32; 64];
            inverse_dct_8x8(black_box(&coeffs), black_box(&mut output));
        });
    });

    group.finish();
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Coefficient Reduction");

    let coeffs: [f32; 64] = core::array::from_fn(|i| (i as f32 - 32.0) * 11.0);

    for k in [1usize, 10, 64] {
        group.bench_with_input(BenchmarkId::new("select_first_k", k), &k, |b, &k| {
            b.iter(|| select_first_k(black_box(&coeffs), k).unwrap());
        });
    }

    let reducer = CoefficientReducer::new(ReductionMode::quantize(2.0)).unwrap();
    group.bench_function("quantize_roundtrip", |b| {
        b.iter(|| reducer.reduce(black_box(&coeffs)));
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Grid");

    let (width, height) = (250u32, 250u32);
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    let image = Image::gray(width, height, data).unwrap();

    group.bench_function("pad_split_merge_250x250", |b| {
        b.iter(|| {
            let padded = pad(black_box(&image)).unwrap();
            let blocks = split(&padded).unwrap();
            black_box(merge(&blocks, padded.width()).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dct, bench_reduction, bench_grid);
criterion_main!(benches);
