//! A simple circle.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: V2,
    radius: f64,
}

impl Circle {
    pub fn new(center: V2, radius: f64) -> Result<Circle> {
        if radius < 0.0 || radius.is_nan() {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Circle { center, radius })
    }

    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Move the circle to a new position.
    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn move_circle(&self, new_center: &V2) -> Circle {
        Circle {
            center: *new_center,
            radius: self.radius,
        }
    }
}
