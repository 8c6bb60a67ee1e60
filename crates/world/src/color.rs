//! 8-bit RGB colors.

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        *self == Rgb::BLACK
    }

    /// Multiply every channel by `factor`, which should be in `0.0..=1.0`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Rgb {
        let f = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        assert_eq!(Rgb::new(200, 100, 50).scaled(0.5), Rgb::new(100, 50, 25));
        assert_eq!(Rgb::WHITE.scaled(1.0), Rgb::WHITE);
        assert!(Rgb::WHITE.scaled(0.0).is_black());
    }
}
