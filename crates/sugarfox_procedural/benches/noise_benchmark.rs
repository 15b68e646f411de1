//! Benchmark for surface noise and displacement.
//!
//! The shader does this work on the GPU; these numbers bound what a CPU
//! fallback or a headless preview can afford per frame.
//!
//! Run with: cargo bench --package sugarfox_procedural --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sugarfox_procedural::{DisplacementParams, SimplexNoise, SurfaceField};
use sugarfox_shared::Vec3;

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new();

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7), black_box(x * -0.3)))
        });
    });
}

fn benchmark_sphere_displacement(c: &mut Criterion) {
    let field = SurfaceField::new();
    let params = DisplacementParams::at_scroll(0.5);

    // One ring of a 512-segment sphere.
    let ring: Vec<Vec3> = (0..512)
        .map(|i| {
            let theta = i as f32 / 512.0 * std::f32::consts::TAU;
            Vec3::new(theta.cos(), 0.0, theta.sin())
        })
        .collect();

    let mut group = c.benchmark_group("sphere_displacement");
    group.throughput(Throughput::Elements(ring.len() as u64));

    group.bench_function("displace_ring_512", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.016;
            for &n in &ring {
                black_box(field.displace(n * 1.5, n, t, &params));
            }
        });
    });

    group.finish();
}

fn benchmark_surface_mask(c: &mut Criterion) {
    let field = SurfaceField::new();

    c.bench_function("surface_mask", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.016;
            black_box(field.mask(black_box(Vec3::new(0.4, 1.1, -0.9)), t, 0.5))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_sphere_displacement,
    benchmark_surface_mask
);
criterion_main!(benches);
