use crate::*;

/// How far a ray reaches when tested against walls.
///
/// Rays are finite segments so that intersection parameters stay bounded.
pub const RAY_LENGTH: f64 = 10000.0;

/// A ray leaving `origin` at `angle` degrees, measured from +x toward +y.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    origin: V2,
    angle: f64,
    length: f64,
}

impl Ray {
    pub fn new(origin: V2, angle: f64) -> Ray {
        Ray::with_length(origin, angle, RAY_LENGTH)
    }

    pub fn with_length(origin: V2, angle: f64, length: f64) -> Ray {
        Ray {
            origin,
            angle,
            length,
        }
    }

    pub fn get_origin(&self) -> V2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: V2) {
        self.origin = origin;
    }

    /// The angle of this ray in degrees.
    pub fn get_angle(&self) -> f64 {
        self.angle
    }

    pub fn get_length(&self) -> f64 {
        self.length
    }

    pub fn rotate(&mut self, delta_degrees: f64) {
        self.angle += delta_degrees;
    }

    /// The unit direction of this ray.
    pub fn direction(&self) -> V2 {
        V2::from_angle_degrees(self.angle)
    }

    /// The point one unit along the ray.
    pub fn end(&self) -> V2 {
        self.evaluate(1.0)
    }

    /// The point at the full length of the ray.
    pub fn far_point(&self) -> V2 {
        self.evaluate(self.length)
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> V2 {
        self.origin + self.direction() * t
    }
}
