use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dctc_compressor::compress;
use dctc_core::{Image, ReductionMode};
use dctc_quality::{default_sweep_params, sweep, SweepMode};

/// Helper to create a test image with gradient pattern
fn create_test_image(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((((x * 255) / width + (y * 97) % 64) % 256) as u8);
        }
    }
    Image::gray(width, height, data).unwrap()
}

/// Benchmark the full pipeline for both reduction modes
fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [(64, 64), (256, 256), (1024, 768)].iter() {
        let (width, height) = *size;
        let image = create_test_image(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        for (name, mode) in [
            ("quantize_s2", ReductionMode::quantize(2.0)),
            ("truncate_k10", ReductionMode::truncate(10)),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{}x{}", width, height)),
                &image,
                |b, image| {
                    b.iter(|| black_box(compress(black_box(image), mode).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark a default five-point sweep, metrics included
fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let image = create_test_image(256, 256);
    let params = default_sweep_params();

    group.bench_function("scale_factor_256x256", |b| {
        b.iter(|| black_box(sweep(&image, SweepMode::ScaleFactor, &params).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_compress, benchmark_sweep);
criterion_main!(benches);
