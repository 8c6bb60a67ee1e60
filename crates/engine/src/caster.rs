//! Find the nearest wall along every ray of a fan.
use log::*;
use rayon::prelude::*;
use wallcaster_geometry::intersections::ray_against_segment;
use wallcaster_geometry::{Ray, V2};
use wallcaster_world::WallSet;

use crate::*;

/// Where a ray struck a wall.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    /// Angle of the ray which produced this hit, in degrees.
    pub angle: f64,
    pub point: V2,
    /// Index of the wall in the [WallSet] that was cast against.
    pub wall: usize,
    /// Distance from the ray origin to `point`.
    pub distance: f64,
}

impl Hit {
    pub fn new(ray: &Ray, point: V2, wall: usize) -> Hit {
        Hit {
            angle: ray.get_angle(),
            point,
            wall,
            distance: ray.get_origin().distance(&point),
        }
    }

    /// Should this hit replace `other` as the nearest?
    ///
    /// Equal distances go to the lower wall index so that the answer doesn't depend on the order walls were examined.
    pub fn is_nearer_than(&self, other: Option<&Hit>) -> bool {
        match other {
            None => true,
            Some(o) => {
                self.distance < o.distance || (self.distance == o.distance && self.wall < o.wall)
            }
        }
    }
}

/// Test `ray` against every wall and keep the nearest hit.
pub fn nearest_hit_brute_force(walls: &WallSet, ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (i, wall) in walls.iter().enumerate() {
        if let Some(point) = ray_against_segment(ray, wall.get_segment()) {
            let candidate = Hit::new(ray, point, i);
            if candidate.is_nearer_than(best.as_ref()) {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Casts batches of rays against one immutable [WallSet].
///
/// The walls are shared with every worker and never change, so the caster is built once and reused every frame.  When
/// configured with workers it owns a thread pool for its whole life.
pub struct RayCaster {
    walls: WallSet,
    index: Option<WallIndex>,
    pool: Option<rayon::ThreadPool>,
    chunk_size: usize,
}

impl RayCaster {
    /// Build a caster.  `default_cell_size` sizes the wall index when the config doesn't.
    pub fn new(
        walls: WallSet,
        config: &CasterConfig,
        default_cell_size: (f64, f64),
    ) -> Result<RayCaster> {
        if config.chunk_size == 0 {
            return Err(EngineError::InvalidConfig(
                "caster chunk_size must be at least 1".into(),
            ));
        }

        let index = match config.strategy {
            CastStrategy::BruteForce => None,
            CastStrategy::Indexed => {
                let (cw, ch) = config
                    .cell_size
                    .map(|c| (c, c))
                    .unwrap_or(default_cell_size);
                if !(cw > 0.0 && ch > 0.0) {
                    return Err(EngineError::InvalidConfig(format!(
                        "wall index cells must have a positive size, got {}x{}",
                        cw, ch
                    )));
                }
                Some(WallIndex::new(&walls, cw, ch))
            }
        };

        let pool = if config.workers > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.workers)
                .thread_name(|n| format!("Ray caster {}", n))
                .build()?;
            info!("Started {} ray casting threads", config.workers);
            Some(pool)
        } else {
            None
        };

        info!(
            "Casting against {} walls with strategy {:?}",
            walls.len(),
            config.strategy
        );

        Ok(RayCaster {
            walls,
            index,
            pool,
            chunk_size: config.chunk_size,
        })
    }

    /// A single-threaded caster which tests every wall.
    pub fn brute_force(walls: WallSet) -> RayCaster {
        RayCaster {
            walls,
            index: None,
            pool: None,
            chunk_size: CasterConfig::default().chunk_size,
        }
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn strategy(&self) -> CastStrategy {
        if self.index.is_some() {
            CastStrategy::Indexed
        } else {
            CastStrategy::BruteForce
        }
    }

    /// Threads in the pool, or 0 when casting on the calling thread.
    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map(|p| p.current_num_threads())
            .unwrap_or(0)
    }

    pub fn cast_one(&self, ray: &Ray) -> Option<Hit> {
        match &self.index {
            Some(index) => index.nearest_hit(&self.walls, ray),
            None => nearest_hit_brute_force(&self.walls, ray),
        }
    }

    /// Cast every ray.  The output has one slot per ray, in the same order.
    pub fn cast(&self, rays: &[Ray]) -> Vec<Option<Hit>> {
        match &self.pool {
            Some(pool) => pool.install(|| {
                rays.par_iter()
                    .with_min_len(self.chunk_size)
                    .map(|r| self.cast_one(r))
                    .collect()
            }),
            None => rays.iter().map(|r| self.cast_one(r)).collect(),
        }
    }
}

impl Drop for RayCaster {
    fn drop(&mut self) {
        if self.pool.is_some() {
            info!("Stopping ray casting threads");
        }
    }
}

impl std::fmt::Debug for RayCaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayCaster")
            .field("walls", &self.walls.len())
            .field("strategy", &self.strategy())
            .field("workers", &self.workers())
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}
