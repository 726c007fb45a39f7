//! Benchmark for noise sampling.
//!
//! Zoning samples once per 400-unit cell, building heights once per
//! placed building; both go through the same clamped field.
//!
//! Run with: cargo bench --package civitas_procedural --bench noise_benchmark

use civitas_procedural::{CitySeed, NoiseField, SimplexNoise};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new(CitySeed::new(42));

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7)))
        });
    });
}

fn benchmark_height_grid(c: &mut Criterion) {
    let noise = SimplexNoise::new(CitySeed::new(42));

    // Height lookups at building spacing over a 2000x2000 city
    let mut group = c.benchmark_group("height_grid");
    group.throughput(Throughput::Elements(25 * 25));
    group.bench_function("25x25_height_samples", |b| {
        b.iter(|| {
            for i in 0..25u32 {
                for j in 0..25u32 {
                    let x = f64::from(i) * 80.0 / 50.0;
                    let y = f64::from(j) * 80.0 / 50.0;
                    black_box(noise.sample(x, y));
                }
            }
        });
    });

    group.finish();
}

fn benchmark_seeding(c: &mut Criterion) {
    c.bench_function("noise_permutation_setup", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(SimplexNoise::new(CitySeed::new(black_box(seed))))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_height_grid,
    benchmark_seeding
);
criterion_main!(benches);
