//! An axis-aligned bounding box.
use crate::*;

/// An axis-aligned bounding box, given by its lower corner and a width/height vector.
///
/// Walls on a grid map are axis aligned, so unlike a general AABB these boxes may have zero width or zero height.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Aabb {
    p1: V2,
    /// width-height
    wh: V2,
}

impl Aabb {
    /// Build the smallest box containing both points, whatever order they are in.
    pub fn enclosing(a: V2, b: V2) -> Aabb {
        let p1 = V2::new(a.x.min(b.x), a.y.min(b.y));
        let p2 = V2::new(a.x.max(b.x), a.y.max(b.y));
        Aabb { p1, wh: p2 - p1 }
    }

    pub fn get_p1(&self) -> V2 {
        self.p1
    }

    pub fn get_p2(&self) -> V2 {
        self.p1 + self.wh
    }

    /// get the squared distance to a specific point.
    pub fn distance_to_point_squared(&self, point: &V2) -> f64 {
        // The closest point on a box to a point is the clamped value of the point itself.
        let p2 = self.get_p2();
        let x = point.x.clamp(self.p1.x, p2.x);
        let y = point.y.clamp(self.p1.y, p2.y);
        (point.x - x).powi(2) + (point.y - y).powi(2)
    }

    pub fn distance_to_point(&self, point: &V2) -> f64 {
        self.distance_to_point_squared(point).sqrt()
    }
}
