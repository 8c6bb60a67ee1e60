//! A spatial index over walls which answers "nearest wall along this ray" by walking cells outward from the origin.
use smallvec::SmallVec;
use wallcaster_geometry::intersections::ray_against_segment;
use wallcaster_geometry::{Cell, GridTraversal, Ray, SpatialHash};
use wallcaster_world::WallSet;

use crate::*;

#[derive(Debug)]
pub struct WallIndex {
    hash: SpatialHash<usize>,
    /// Lowest and highest occupied cells, or `None` for a map with no walls.
    bounds: Option<(Cell, Cell)>,
}

impl WallIndex {
    pub fn new(walls: &WallSet, cell_width: f64, cell_height: f64) -> WallIndex {
        let mut hash = SpatialHash::new(cell_width, cell_height);
        for (i, w) in walls.iter().enumerate() {
            hash.insert(&w.get_segment().get_bounding_box(), i);
        }

        let bounds = hash.occupied_bounds();
        WallIndex { hash, bounds }
    }

    /// Find the nearest wall hit by `ray`.
    ///
    /// Cells are visited in the order the ray crosses them.  Once the best hit so far lies in a cell which has been
    /// fully examined, no wall in a later cell can be nearer, so the walk stops.  Ties in distance go to the wall with
    /// the lower index, the same as [nearest_hit_brute_force].
    pub fn nearest_hit(&self, walls: &WallSet, ray: &Ray) -> Option<Hit> {
        let (lo, hi) = self.bounds?;
        let origin = ray.get_origin();
        let far = ray.far_point();
        let dir = far - origin;

        // Once a cell is past the occupied bounds in the direction of travel, every later cell is too.
        let left_for_good = |(x, y): Cell| {
            (x > hi.0 && dir.x >= 0.0)
                || (x < lo.0 && dir.x <= 0.0)
                || (y > hi.1 && dir.y >= 0.0)
                || (y < lo.1 && dir.y <= 0.0)
        };

        let mut best: Option<Hit> = None;
        let mut visited: SmallVec<[Cell; 32]> = SmallVec::new();
        let cells = GridTraversal::new(
            self.hash.to_cell_space(&origin),
            self.hash.to_cell_space(&far),
        );

        for cell in cells {
            if left_for_good(cell) {
                break;
            }

            for &i in self.hash.get_items_for_cell(cell) {
                if let Some(point) = ray_against_segment(ray, walls[i].get_segment()) {
                    let candidate = Hit::new(ray, point, i);
                    if candidate.is_nearer_than(best.as_ref()) {
                        best = Some(candidate);
                    }
                }
            }

            visited.push(cell);
            if let Some(b) = &best {
                if visited.contains(&self.hash.cell_of(&b.point)) {
                    break;
                }
            }
        }

        best
    }
}
