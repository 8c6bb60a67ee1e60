//! Turn the hits of a fan into textured screen columns.
use wallcaster_geometry::scalar::{clamp, degrees_to_radians, map_value, normalize_degrees};
use wallcaster_geometry::{Rect, V2};
use wallcaster_world::{Rgb, Wall, WallSet};

use crate::*;

/// One texel-high slice of a screen column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnRect {
    /// The fan slot this came from; also the screen column.
    pub column: usize,
    /// The texture row.
    pub row: usize,
    pub rect: Rect,
    pub color: Rgb,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnProjector {
    screen_width: f64,
    screen_height: f64,
    /// `K` in `height = screen_height * K / distance`.
    column_scale: f64,
    /// Corrected distances are floored to this.
    min_distance: f64,
}

impl ColumnProjector {
    pub fn new(
        screen_width: f64,
        screen_height: f64,
        column_scale: f64,
        min_distance: f64,
    ) -> ColumnProjector {
        ColumnProjector {
            screen_width,
            screen_height,
            column_scale,
            min_distance,
        }
    }

    pub fn from_config(config: &EngineConfig) -> ColumnProjector {
        ColumnProjector::new(
            config.screen_width,
            config.screen_height,
            config.column_scale,
            config.min_corrected_distance,
        )
    }

    /// Width of each of `columns` columns.  One pixel wider than an even split so that no gaps open up.
    pub fn column_width(&self, columns: usize) -> f64 {
        (self.screen_width / columns.max(1) as f64).floor() + 1.0
    }

    /// The hit distance with the fisheye removed: the distance along the facing direction rather than along the ray.
    pub fn corrected_distance(&self, viewpoint_pos: V2, facing: f64, hit: &Hit) -> f64 {
        let true_distance = viewpoint_pos.distance(&hit.point);
        let corrected = true_distance * degrees_to_radians(facing - hit.angle).cos();
        corrected.max(self.min_distance)
    }

    pub fn column_height(&self, corrected_distance: f64) -> f64 {
        self.screen_height * self.column_scale / corrected_distance
    }

    pub fn brightness(&self, corrected_distance: f64) -> f64 {
        clamp(
            map_value(corrected_distance, 0.0, self.screen_height, 1.0, 0.0),
            0.0,
            1.0,
        )
    }

    /// Emit the rectangles for every hit in `viewpoint`'s last update.
    ///
    /// A slot without a hit emits nothing, as does any texel which comes out black after shading.
    pub fn project(&self, viewpoint: &Viewpoint, walls: &WallSet) -> Vec<ColumnRect> {
        let hits = viewpoint.last_hits();
        let width = self.column_width(hits.len());
        let mut out = vec![];

        for (column, hit) in hits.iter().enumerate() {
            let hit = match hit {
                Some(h) => h,
                None => continue,
            };
            let wall = match walls.get(hit.wall) {
                Some(w) => w,
                None => continue,
            };

            let distance = self.corrected_distance(viewpoint.position(), viewpoint.angle(), hit);
            let height = self.column_height(distance);
            let brightness = self.brightness(distance);
            let res = wall.get_texture().get_resolution();
            let tex_x = texture_column(wall, hit, viewpoint.angle(), res);
            let row_height = height / res as f64;
            let top = (self.screen_height - height) / 2.0;

            for row in 0..res {
                let color = wall.sample(tex_x, row).scaled(brightness);
                if color.is_black() {
                    continue;
                }

                out.push(ColumnRect {
                    column,
                    row,
                    rect: Rect::new(
                        V2::new(column as f64 * width, top + row_height * row as f64),
                        width,
                        row_height,
                    ),
                    color,
                });
            }
        }

        out
    }
}

/// Which texture column a hit samples.
///
/// The column is the fraction of the way along the wall from its start, flipped for horizontal walls seen while facing
/// `0..=180` and vertical walls seen while facing `90..=270` so that textures read the same way from either side.
pub fn texture_column(wall: &Wall, hit: &Hit, facing: f64, resolution: usize) -> usize {
    let len = wall.length();
    let frac = if len > 0.0 {
        wall.get_start().distance(&hit.point) / len
    } else {
        0.0
    };
    let last = resolution.saturating_sub(1);
    let x = ((resolution as f64 * frac).floor() as usize).min(last);

    let facing = normalize_degrees(facing);
    let segment = wall.get_segment();
    let flip = (segment.is_horizontal() && (0.0..=180.0).contains(&facing))
        || (segment.is_vertical() && (90.0..=270.0).contains(&facing));
    if flip {
        last - x
    } else {
        x
    }
}
