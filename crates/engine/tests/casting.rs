//! The accelerated casters must agree with testing every wall.
use std::sync::Arc;

use proptest::prelude::*;
use wallcaster_engine::*;
use wallcaster_geometry::{Ray, Segment, V2};
use wallcaster_world::{Rgb, Texture, Wall, WallSet};

fn wall_set(segments: &[(V2, V2)]) -> WallSet {
    let tex = Arc::new(Texture::solid("t", 1, Rgb::WHITE));
    segments
        .iter()
        .map(|&(a, b)| Wall::new(Segment::new(a, b), tex.clone()))
        .collect()
}

fn arb_segment() -> impl Strategy<Value = (V2, V2)> {
    (
        -300.0..900.0f64,
        -300.0..900.0f64,
        0.0..360.0f64,
        1.0..400.0f64,
    )
        .prop_map(|(x, y, ang, len)| {
            let start = V2::new(x, y);
            (start, start + V2::from_angle_degrees(ang) * len)
        })
}

fn assert_same(expected: &[Option<Hit>], got: &[Option<Hit>]) -> Result<(), TestCaseError> {
    prop_assert_eq!(expected.len(), got.len());
    for (e, g) in expected.iter().zip(got.iter()) {
        match (e, g) {
            (None, None) => {}
            (Some(e), Some(g)) => {
                prop_assert!(
                    (e.distance - g.distance).abs() < 1e-6,
                    "{:?} != {:?}",
                    e,
                    g
                );
                prop_assert_eq!(e.angle, g.angle);
            }
            _ => prop_assert!(false, "{:?} != {:?}", e, g),
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn indexed_matches_brute_force(
        segments in prop::collection::vec(arb_segment(), 0..40),
        origin_x in 0.0..600.0f64,
        origin_y in 0.0..600.0f64,
        facing in 0.0..360.0f64,
        cell in 7.0..150.0f64,
    ) {
        let walls = wall_set(&segments);
        let brute = RayCaster::brute_force(walls.clone());
        let indexed = RayCaster::new(
            walls,
            &CasterConfig {
                strategy: CastStrategy::Indexed,
                cell_size: Some(cell),
                ..Default::default()
            },
            (cell, cell),
        ).unwrap();

        let vp = Viewpoint::new(
            V2::new(origin_x, origin_y),
            facing,
            ViewpointParams { ray_count: 31, ..Default::default() },
        ).unwrap();

        assert_same(&brute.cast(vp.rays()), &indexed.cast(vp.rays()))?;
    }
}

#[test]
fn pool_matches_calling_thread() {
    let segments = (0..50)
        .map(|i| {
            let a = i as f64 * 7.2;
            let start = V2::from_angle_degrees(a) * 300.0;
            (start, V2::from_angle_degrees(a + 7.2) * 300.0)
        })
        .collect::<Vec<_>>();
    let walls = wall_set(&segments);
    let rays = (0..1000)
        .map(|i| Ray::new(V2::new(10.0, -20.0), i as f64 * 0.36))
        .collect::<Vec<_>>();

    let single = RayCaster::brute_force(walls.clone()).cast(&rays);
    for strategy in [CastStrategy::BruteForce, CastStrategy::Indexed] {
        let pooled = RayCaster::new(
            walls.clone(),
            &CasterConfig {
                strategy,
                workers: 3,
                chunk_size: 32,
                cell_size: None,
            },
            (40.0, 40.0),
        )
        .unwrap();
        assert_eq!(pooled.workers(), 3);

        let got = pooled.cast(&rays);
        assert_eq!(got.len(), rays.len());
        for (i, (s, p)) in single.iter().zip(got.iter()).enumerate() {
            let s = s.unwrap_or_else(|| panic!("Ray {} should hit the ring", i));
            let p = p.unwrap_or_else(|| panic!("Ray {} should hit the ring", i));
            assert_eq!(s.angle, p.angle);
            assert!((s.distance - p.distance).abs() < 1e-6, "{:?} {:?}", s, p);
        }
    }
}

#[test]
fn rays_into_nothing_project_nothing() {
    let walls = wall_set(&[(V2::new(100.0, -50.0), V2::new(100.0, 50.0))]);
    let caster = RayCaster::brute_force(walls.clone());
    let mut vp = Viewpoint::new(V2::ZERO, 180.0, ViewpointParams::default()).unwrap();
    vp.update(&caster);

    assert!(vp.last_hits().iter().all(Option::is_none));
    let projector = ColumnProjector::new(640.0, 480.0, 100.0, 0.1);
    assert!(projector.project(&vp, &walls).is_empty());
}

#[test]
fn hit_distance_to_a_midpoint() {
    let walls = wall_set(&[(V2::new(120.0, 40.0), V2::new(60.0, 200.0))]);
    let mid = V2::new(90.0, 120.0);
    let origin = V2::new(-15.0, 7.0);
    let d = mid - origin;
    let angle = d.y.atan2(d.x).to_degrees();

    for caster in [
        RayCaster::brute_force(walls.clone()),
        RayCaster::new(walls.clone(), &CasterConfig::default(), (30.0, 30.0)).unwrap(),
    ] {
        let hit = caster.cast_one(&Ray::new(origin, angle)).expect("Should hit");
        assert!((hit.distance - origin.distance(&mid)).abs() < 1e-6);
    }
}
