//! Test a ray against a wall segment.
use crate::*;

/// Determinants smaller than this are treated as parallel lines.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Intersect the segment `ray_origin..ray_far` with `seg_start..seg_end`.
///
/// Solves `ray_origin + t * (ray_far - ray_origin) = seg_start + u * (seg_end - seg_start)` and returns the point
/// when both `t` and `u` lie in `0..=1`.
pub fn ray_segment(ray_origin: V2, ray_far: V2, seg_start: V2, seg_end: V2) -> Option<V2> {
    let (x1, y1) = (ray_origin.x, ray_origin.y);
    let (x2, y2) = (ray_far.x, ray_far.y);
    let (x3, y3) = (seg_start.x, seg_start.y);
    let (x4, y4) = (seg_end.x, seg_end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(V2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// Cast `ray` against `segment`.
pub fn ray_against_segment(ray: &Ray, segment: &Segment) -> Option<V2> {
    ray_segment(
        ray.get_origin(),
        ray.far_point(),
        segment.get_start(),
        segment.get_end(),
    )
}
