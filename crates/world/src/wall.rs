//! Textured wall segments and the immutable set of them that makes up a map.
use std::sync::Arc;

use wallcaster_geometry::{Segment, V2};

use crate::*;

/// A wall: a segment of the map boundary with a texture.
#[derive(Debug, Clone)]
pub struct Wall {
    segment: Segment,
    texture: Arc<Texture>,
    /// Drawn on the minimap, and wherever the texture isn't wanted.
    color: Rgb,
}

impl Wall {
    pub fn new(segment: Segment, texture: Arc<Texture>) -> Wall {
        Wall::with_color(segment, texture, Rgb::WHITE)
    }

    pub fn with_color(segment: Segment, texture: Arc<Texture>, color: Rgb) -> Wall {
        Wall {
            segment,
            texture,
            color,
        }
    }

    pub fn get_segment(&self) -> &Segment {
        &self.segment
    }

    pub fn get_start(&self) -> V2 {
        self.segment.get_start()
    }

    pub fn get_end(&self) -> V2 {
        self.segment.get_end()
    }

    pub fn length(&self) -> f64 {
        self.segment.length()
    }

    pub fn contains_point(&self, point: &V2) -> bool {
        self.segment.contains_point(point)
    }

    pub fn get_texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn texture_name(&self) -> &str {
        self.texture.get_name()
    }

    pub fn get_color(&self) -> Rgb {
        self.color
    }

    /// Sample this wall's texture at column `x`, row `y`.
    pub fn sample(&self, x: usize, y: usize) -> Rgb {
        self.texture.sample(x, y)
    }
}

/// The walls of a map.
///
/// Built once and never changed afterward.  Cloning is cheap and shares the walls, which is how the caster's worker
/// threads get their read-only snapshot.
#[derive(Debug, Clone)]
pub struct WallSet {
    walls: Arc<[Wall]>,
}

impl WallSet {
    pub fn new(walls: Vec<Wall>) -> WallSet {
        WallSet {
            walls: walls.into(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    pub fn as_slice(&self) -> &[Wall] {
        &self.walls
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl std::ops::Index<usize> for WallSet {
    type Output = Wall;

    fn index(&self, index: usize) -> &Wall {
        &self.walls[index]
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> WallSet {
        WallSet::new(iter.into_iter().collect())
    }
}
