use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::rngs::SmallRng;

use wallcaster_engine::*;
use wallcaster_geometry::{Segment, V2};
use wallcaster_world::{Rgb, Texture, Wall, WallSet};

const WORLD_SIZE: f64 = 2000.0;
const RAYS: usize = 129;

/// Short walls scattered over the world, like the inside of a generated map.
fn build_walls(count: usize) -> WallSet {
    let mut rng = SmallRng::seed_from_u64(5);
    let tex = Arc::new(Texture::solid("bench", 1, Rgb::WHITE));
    (0..count)
        .map(|_| {
            let start = V2::new(rng.gen_range(0.0..WORLD_SIZE), rng.gen_range(0.0..WORLD_SIZE));
            let end = start + V2::from_angle_degrees(rng.gen_range(0.0..360.0)) * rng.gen_range(10.0..80.0);
            Wall::new(Segment::new(start, end), tex.clone())
        })
        .collect()
}

fn build_viewpoint() -> Viewpoint {
    Viewpoint::new(
        V2::new(WORLD_SIZE / 2.0, WORLD_SIZE / 2.0),
        30.0,
        ViewpointParams {
            ray_count: RAYS,
            ..Default::default()
        },
    )
    .unwrap()
}

pub fn benchmarks(c: &mut Criterion) {
    let strategies = [
        ("brute_force", CastStrategy::BruteForce, 0),
        ("indexed", CastStrategy::Indexed, 0),
        ("brute_force_pool", CastStrategy::BruteForce, 4),
        ("indexed_pool", CastStrategy::Indexed, 4),
    ];

    let vp = build_viewpoint();
    for (name, strategy, workers) in strategies {
        let mut group = c.benchmark_group(name);
        for walls in [50, 500, 5000] {
            let caster = RayCaster::new(
                build_walls(walls),
                &CasterConfig {
                    strategy,
                    workers,
                    ..Default::default()
                },
                (50.0, 50.0),
            )
            .unwrap();

            group.throughput(Throughput::Elements(walls as u64));
            group.bench_with_input(BenchmarkId::from_parameter(walls), &caster, |b, caster| {
                b.iter(|| caster.cast(vp.rays()));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
