//! Benchmark for the CPU side of a hero frame.
//!
//! TARGET: well under 1ms per frame so the display refresh is never missed
//!
//! Run with: cargo bench --package sugarfox_rendering --bench frame_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sugarfox_rendering::{HeroScene, ParticleField, SphereMesh, SurfaceSize};
use sugarfox_shared::{SceneConfig, ScrollProgress};

fn benchmark_scene_update(c: &mut Criterion) {
    let mut scene = HeroScene::new(&SceneConfig::default(), SurfaceSize::new(1920, 1080));
    scene.set_scroll(ScrollProgress::new(0.4));
    scene.set_pointer([0.3, -0.2]);

    c.bench_function("hero_scene_update", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            let frame = scene.update(black_box(t));
            black_box(frame.uniforms);
        });
    });
}

fn benchmark_particle_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_step");

    for count in [200usize, 10_000] {
        let mut field = ParticleField::spawn(count, 42);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| field.step(black_box(0.5)));
        });
    }

    group.finish();
}

fn benchmark_sphere_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_mesh");
    group.sample_size(10);

    group.bench_function("generate_512x512", |b| {
        b.iter(|| black_box(SphereMesh::generate(1.5, 512)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scene_update,
    benchmark_particle_step,
    benchmark_sphere_mesh
);
criterion_main!(benches);
