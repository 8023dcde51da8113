//! Benchmarks des chemins chauds du moteur : génération des directions
//! d'explosion et pas de simulation complet.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use fireworks_show::physic_engine::config::SimConfig;
use fireworks_show::physic_engine::fireworks::{FireworksEngine, PhysicEngineTestHelpers};
use fireworks_show::physic_engine::rocket::LaunchParamsBuilder;
use fireworks_show::physic_engine::shape_emitter::{emit, BurstShape};
use fireworks_show::physic_engine::PhysicEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_emit_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let mut rng = StdRng::seed_from_u64(42);

    for shape in [
        BurstShape::Circle,
        BurstShape::Star,
        BurstShape::Heart,
        BurstShape::Spiral,
        BurstShape::Scatter,
    ] {
        group.bench_function(shape.name(), |b| {
            b.iter(|| black_box(emit(black_box(shape), 140, &mut rng)))
        });
    }

    group.finish();
}

fn bench_emit_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_heart_by_count");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [90usize, 140, 240] {
        group.bench_with_input(BenchmarkId::new("n", n), &n, |b, &n| {
            b.iter(|| black_box(emit(BurstShape::Heart, n, &mut rng)))
        });
    }

    group.finish();
}

fn bench_engine_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_update");

    // Charge représentative d'un final : plusieurs explosions simultanées
    group.bench_function("finale_load", |b| {
        let cfg = SimConfig::default();
        let mut engine = FireworksEngine::with_rng(&cfg, StdRng::seed_from_u64(42));
        for i in 0..5 {
            let params = LaunchParamsBuilder::default()
                .x(cfg.width * (0.2 + 0.15 * i as f32))
                .count(240)
                .build()
                .unwrap();
            engine.launch(&params);
        }
        // Quelques pas pour peupler traînées et particules
        for _ in 0..30 {
            engine.update(1.0 / 60.0);
        }
        assert!(engine.rockets_count() > 0 || engine.particles_count() > 0);

        b.iter(|| {
            black_box(engine.update(black_box(1.0 / 60.0)).detonations.len());
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_emit_shapes,
    bench_emit_counts,
    bench_engine_update,
);
criterion_main!(benches);
