//! Square wall textures.
use crate::*;

/// The name of the built-in brick texture.
pub const BRICK_WALL: &str = "brick_wall";
/// The name of the built-in plain white texture.
pub const PLAIN: &str = "plain";

/// A square, row-major RGB texture of side `resolution`.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: String,
    resolution: usize,
    pixels: Vec<Rgb>,
}

impl Texture {
    /// Build a texture from packed `r, g, b` bytes, row by row.
    pub fn from_rgb_bytes(name: &str, resolution: usize, bytes: &[u8]) -> Result<Texture> {
        let expected = resolution * resolution * 3;
        if resolution == 0 || bytes.len() != expected {
            return Err(MapError::TextureSize {
                name: name.to_string(),
                expected,
                found: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Ok(Texture {
            name: name.to_string(),
            resolution,
            pixels,
        })
    }

    /// A single-color texture.  The resolution must be at least 1.
    pub fn solid(name: &str, resolution: usize, color: Rgb) -> Texture {
        assert!(resolution > 0, "Textures must have at least one texel");
        Texture {
            name: name.to_string(),
            resolution,
            pixels: vec![color; resolution * resolution],
        }
    }

    /// A brick pattern: rows of red bricks separated by grey mortar, every other row offset by half a brick.
    ///
    /// The resolution must be at least 1.
    pub fn brick(resolution: usize) -> Texture {
        assert!(resolution > 0, "Textures must have at least one texel");
        const MORTAR: Rgb = Rgb::new(110, 105, 100);
        const BRICK: Rgb = Rgb::new(160, 60, 45);
        const BRICK_DARK: Rgb = Rgb::new(135, 48, 36);

        let brick_h = (resolution / 4).max(2);
        let brick_w = (resolution / 2).max(2);
        let mut pixels = Vec::with_capacity(resolution * resolution);
        for y in 0..resolution {
            let course = y / brick_h;
            let offset = if course % 2 == 0 { 0 } else { brick_w / 2 };
            for x in 0..resolution {
                let bx = (x + offset) % brick_w;
                let by = y % brick_h;
                let color = if bx == 0 || by == 0 {
                    MORTAR
                } else if (x + offset) / brick_w % 2 == course % 2 {
                    BRICK
                } else {
                    BRICK_DARK
                };
                pixels.push(color);
            }
        }

        Texture {
            name: BRICK_WALL.to_string(),
            resolution,
            pixels,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_resolution(&self) -> usize {
        self.resolution
    }

    /// Sample the texel at column `x`, row `y`.  Coordinates past the edge are clamped to it.
    pub fn sample(&self, x: usize, y: usize) -> Rgb {
        let last = self.resolution - 1;
        self.pixels[y.min(last) * self.resolution + x.min(last)]
    }
}
