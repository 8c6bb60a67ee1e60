//! A straight line segment between two points.
use crate::*;

/// Tolerance on the cross product used when deciding whether a point is on a segment.
pub const COLLINEAR_EPSILON: f64 = 1e-4;

#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    start: V2,
    end: V2,
}

impl Segment {
    pub const fn new(start: V2, end: V2) -> Segment {
        Segment { start, end }
    }

    pub fn get_start(&self) -> V2 {
        self.start
    }

    pub fn get_end(&self) -> V2 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn midpoint(&self) -> V2 {
        (self.start + self.end) / 2.0
    }

    #[allow(clippy::float_cmp)]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Does `point` lie on this segment?
    ///
    /// The point must be collinear within [COLLINEAR_EPSILON], and between the endpoints inclusive.
    pub fn contains_point(&self, point: &V2) -> bool {
        let lv = self.end - self.start;
        let pv = *point - self.start;

        lv.cross(&pv).abs() < COLLINEAR_EPSILON && lv.dot(&pv) >= 0.0 && pv.length() <= lv.length()
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::enclosing(self.start, self.end)
    }
}
