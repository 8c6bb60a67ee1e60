//! A 2-dimensional vector/point.
//!
//! Every operation returns a new value; nothing here mutates in place except the `*Assign` operators.
use crate::scalar::degrees_to_radians;

#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, derive_more::Display, serde::Serialize, serde::Deserialize,
)]
#[display(fmt = "V2[{}, {}]", x, y)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

impl V2 {
    pub const ZERO: V2 = V2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> V2 {
        V2 { x, y }
    }

    /// The unit vector pointing along `degrees`, measured from +x toward +y.
    pub fn from_angle_degrees(degrees: f64) -> V2 {
        let rad = degrees_to_radians(degrees);
        V2::new(rad.cos(), rad.sin())
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize this vector.
    ///
    /// A zero vector has no direction and yields NaN components; use [V2::try_normalize] when that can happen.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2 {
        let l = self.length();
        V2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    /// Normalize this vector, or return `None` if it has no length.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn try_normalize(self) -> Option<V2> {
        let l = self.length();
        if l == 0.0 || !l.is_finite() {
            return None;
        }

        Some(V2 {
            x: self.x / l,
            y: self.y / l,
        })
    }

    pub fn dot(&self, other: &V2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &V2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(&self, other: &V2) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance(&self, other: &V2) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl std::ops::Add for V2 {
    type Output = V2;

    fn add(self, rhs: V2) -> V2 {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for V2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for V2 {
    type Output = V2;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::ops::Div<f64> for V2 {
    type Output = V2;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl std::ops::Neg for V2 {
    type Output = V2;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Sub for V2 {
    type Output = V2;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::SubAssign for V2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use approx::*;

    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = V2::new(1.0, 2.0);
        let b = V2::new(3.0, -1.0);
        assert_eq!(a + b, V2::new(4.0, 1.0));
        assert_eq!(a - b, V2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, V2::new(2.0, 4.0));
        assert_eq!(b / 2.0, V2::new(1.5, -0.5));
        assert_eq!(-a, V2::new(-1.0, -2.0));
        assert_relative_eq!(a.dot(&b), 1.0);
        assert_relative_eq!(a.cross(&b), -7.0);
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(V2::new(0.0, 0.0).distance(&V2::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(V2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = V2::new(0.0, -7.0).normalize();
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, -1.0);
        assert!(V2::ZERO.try_normalize().is_none());
        assert_eq!(V2::new(2.0, 0.0).try_normalize(), Some(V2::new(1.0, 0.0)));
    }

    #[test]
    fn test_from_angle() {
        let v = V2::from_angle_degrees(90.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(V2::new(1.5, -2.0).to_string(), "V2[1.5, -2]");
    }
}
