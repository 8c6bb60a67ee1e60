//! A simple HashMap-backed spatial hash.
use std::collections::HashMap;

use smallvec::SmallVec;

use crate::*;

/// A cell coordinate in a [SpatialHash].
pub type Cell = (i64, i64);

/// A `SpatialHash` can tell us what items touch a particular cell.
///
/// This hash doesn't support updates or removals.  Walls never move, so it is built once alongside the map.
///
/// Every spatial hash divides the world into cells of a given width and height, then adds items to all the cells
/// their bounding boxes touch.  A point on the boundary between two cells belongs to the cell with the larger
/// coordinate, and so does any box whose edge lies on that boundary.  Consequently every item touching a point is
/// found in [SpatialHash::cell_of] that point.
#[derive(Debug)]
pub struct SpatialHash<T: Clone> {
    entries: HashMap<Cell, SmallVec<[T; 8]>>,
    cell_width: f64,
    cell_height: f64,
}

/// Represents a range in the hash that the box covers: `lx..=hx` and `ly..=hy`.
/// The ranges are inclusive on both ends.
struct RoundedAabb {
    lx: i64,
    ly: i64,
    hx: i64,
    hy: i64,
}

impl<T: Clone> SpatialHash<T> {
    /// Build an empty hash.  Cell sizes must be positive.
    pub fn new(cell_width: f64, cell_height: f64) -> SpatialHash<T> {
        assert!(
            cell_width > 0.0 && cell_height > 0.0,
            "Cells must have a positive size"
        );
        SpatialHash {
            cell_width,
            cell_height,
            entries: Default::default(),
        }
    }

    /// The cell containing a point.
    pub fn cell_of(&self, point: &V2) -> Cell {
        (
            (point.x / self.cell_width).floor() as i64,
            (point.y / self.cell_height).floor() as i64,
        )
    }

    /// Convert a point into cell units, so that cell `(i, j)` spans `i..i+1` and `j..j+1`.
    pub fn to_cell_space(&self, point: &V2) -> V2 {
        V2::new(point.x / self.cell_width, point.y / self.cell_height)
    }

    fn round_aabb(&self, aabb: &Aabb) -> RoundedAabb {
        let (lx, ly) = self.cell_of(&aabb.get_p1());
        let (hx, hy) = self.cell_of(&aabb.get_p2());
        RoundedAabb { lx, ly, hx, hy }
    }

    pub fn insert(&mut self, aabb: &Aabb, val: T) {
        let RoundedAabb { lx, ly, hx, hy } = self.round_aabb(aabb);
        for x in lx..=hx {
            for y in ly..=hy {
                self.entries.entry((x, y)).or_default().push(val.clone());
            }
        }
    }

    /// Get everything stored in a given cell.
    pub fn get_items_for_cell(&self, cell: Cell) -> &[T] {
        self.entries.get(&cell).map(|x| &x[..]).unwrap_or(&[])
    }

    /// The smallest and largest occupied cells, or `None` if the hash is empty.
    pub fn occupied_bounds(&self) -> Option<(Cell, Cell)> {
        let mut keys = self.entries.keys();
        let first = *keys.next()?;
        Some(keys.fold((first, first), |(lo, hi), &(x, y)| {
            ((lo.0.min(x), lo.1.min(y)), (hi.0.max(x), hi.1.max(y)))
        }))
    }
}
