//! Shapes for whatever owns the window to draw, and the minimap built out of them.
use wallcaster_geometry::{Rect, V2};
use wallcaster_world::{Rgb, WallSet};

use crate::*;

/// How far along its direction a ray is drawn on the minimap, before scaling.
pub const MINIMAP_RAY_LENGTH: f64 = 100.0;

/// Something to draw, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: V2, end: V2, color: Rgb },
    Ray { origin: V2, tip: V2, color: Rgb },
    Rect { rect: Rect, color: Rgb },
    ViewpointMarker { center: V2, radius: f64, color: Rgb },
    Text { position: V2, text: String, color: Rgb },
}

/// A scaled-down top view of the map in the top right corner of the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Minimap {
    scale: f64,
    offset: V2,
    size: (f64, f64),
}

impl Minimap {
    pub fn new(screen_width: f64, screen_height: f64, scale: f64) -> Minimap {
        Minimap {
            scale,
            offset: V2::new(screen_width * (1.0 - scale), 1.0),
            size: (screen_width * scale, screen_height * scale),
        }
    }

    pub fn get_scale(&self) -> f64 {
        self.scale
    }

    pub fn get_offset(&self) -> V2 {
        self.offset
    }

    /// Map a point in world coordinates onto the minimap.
    pub fn transform(&self, point: V2) -> V2 {
        point * self.scale + self.offset
    }

    pub fn background(&self) -> Rect {
        Rect::new(self.offset, self.size.0, self.size.1)
    }

    /// The background, then every wall, the viewpoint, and every ray of its fan.
    pub fn commands(&self, walls: &WallSet, viewpoint: &Viewpoint) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(walls.len() + viewpoint.rays().len() + 2);
        out.push(DrawCommand::Rect {
            rect: self.background(),
            color: Rgb::BLACK,
        });

        out.extend(walls.iter().map(|w| DrawCommand::Line {
            start: self.transform(w.get_start()),
            end: self.transform(w.get_end()),
            color: Rgb::WHITE,
        }));

        out.push(DrawCommand::ViewpointMarker {
            center: self.transform(viewpoint.position()),
            radius: viewpoint.radius() * self.scale,
            color: Rgb::WHITE,
        });

        out.extend(viewpoint.rays().iter().map(|r| {
            let tip = r.get_origin() + r.direction() * MINIMAP_RAY_LENGTH;
            DrawCommand::Ray {
                origin: self.transform(r.get_origin()),
                tip: self.transform(tip),
                color: Rgb::WHITE,
            }
        }));

        out
    }
}
