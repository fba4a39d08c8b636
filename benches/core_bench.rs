use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use pin_string_editor::{compute_arc, Scene};
use std::hint::black_box;

fn build_pin_grid(pin_count: usize) -> Scene {
    let mut scene = Scene::new();
    for index in 0..pin_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        scene.add_pin(Vec2::new(column * 25.0, row * 25.0));
    }
    scene
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 2500) as f32 + 0.37;
            let y = ((i * 7) % 2500) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pin_at");
    let queries = build_query_points(256);

    for &pin_count in &[100usize, 1_000, 10_000] {
        let scene = build_pin_grid(pin_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(pin_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let hits = queries
                        .iter()
                        .filter(|q| scene.find_pin_at(black_box(**q)).is_some())
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_arc_geometry(c: &mut Criterion) {
    let center = Vec2::new(100.0, 100.0);
    let start = Vec2::new(160.0, 100.0);
    let end = Vec2::new(100.0, 40.0);

    c.bench_function("compute_arc", |b| {
        b.iter(|| compute_arc(black_box(start), black_box(center), black_box(end)))
    });

    let geometry = compute_arc(start, center, end);
    c.bench_function("arc_sample_48", |b| {
        b.iter(|| black_box(geometry.sample(black_box(center), 48)))
    });
}

criterion_group!(core_benches, bench_hit_testing, bench_arc_geometry);
criterion_main!(core_benches);
