//! Scalar helpers shared by the caster and the projector.
use crate::Segment;

/// Clamp `val` into `min..=max`.
///
/// Unlike [f64::clamp] this never panics when `min > max`; `max` wins.
pub fn clamp(val: f64, min: f64, max: f64) -> f64 {
    val.max(min).min(max)
}

/// Map a value from `val_min..val_max` onto `res_min..res_max` linearly. Values outside the input range extrapolate.
pub fn map_value(val: f64, val_min: f64, val_max: f64, res_min: f64, res_max: f64) -> f64 {
    let normalized = (val - val_min) / (val_max - val_min);
    res_min + normalized * (res_max - res_min)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Fold an angle in degrees into `0.0..360.0`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// The signed angle from `a` to `b` in degrees, folded into `0.0..360.0`.
pub fn angle_between_segments(a: &Segment, b: &Segment) -> f64 {
    let u = a.get_end() - a.get_start();
    let v = b.get_end() - b.get_start();
    normalize_degrees(radians_to_degrees(u.cross(&v).atan2(u.dot(&v))))
}
