//! Screen-space rectangles.
use crate::*;

/// A rectangle given by its top-left corner and a size, in screen coordinates (y grows downward).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub top_left: V2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top_left: V2, width: f64, height: f64) -> Rect {
        Rect {
            top_left,
            width,
            height,
        }
    }

    pub fn bottom_right(&self) -> V2 {
        self.top_left + V2::new(self.width, self.height)
    }

    /// Do the two rectangles overlap or touch?
    pub fn intersects(&self, other: &Rect) -> bool {
        let o_br = other.bottom_right();
        let s_br = self.bottom_right();
        !(o_br.x < self.top_left.x
            || o_br.y < self.top_left.y
            || other.top_left.x > s_br.x
            || other.top_left.y > s_br.y)
    }

    pub fn contains(&self, point: &V2) -> bool {
        let br = self.bottom_right();
        point.x >= self.top_left.x && point.y >= self.top_left.y && point.x <= br.x && point.y <= br.y
    }

    /// Scale about the origin, then translate.
    #[must_use]
    pub fn transformed(&self, scale: f64, offset: V2) -> Rect {
        Rect::new(self.top_left * scale + offset, self.width * scale, self.height * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(V2::new(0.0, 0.0), 10.0, 10.0);
        let b = Rect::new(V2::new(10.0, 10.0), 5.0, 5.0);
        let c = Rect::new(V2::new(10.5, 0.0), 5.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains() {
        let a = Rect::new(V2::new(1.0, 1.0), 2.0, 2.0);
        assert!(a.contains(&V2::new(3.0, 3.0)));
        assert!(!a.contains(&V2::new(0.5, 2.0)));
    }

    #[test]
    fn test_transformed() {
        let a = Rect::new(V2::new(10.0, 20.0), 100.0, 50.0).transformed(0.5, V2::new(1.0, 1.0));
        assert_eq!(a, Rect::new(V2::new(6.0, 11.0), 50.0, 25.0));
    }
}
