//! Turn a [Grid] into the walls of a map.
use log::*;
use wallcaster_geometry::{Segment, V2};

use crate::*;

/// The size of one grid cell on screen, `(width, height)`.
pub fn cell_size(grid: &Grid, screen_width: f64, screen_height: f64) -> (f64, f64) {
    (
        screen_width / grid.get_width() as f64,
        screen_height / grid.get_height() as f64,
    )
}

/// Build the walls of a grid spread over a `screen_width` by `screen_height` area.
///
/// Every edge shared between a wall cell and an open cell becomes one wall, textured for the wall cell's symbol.
/// Edges between two wall cells, and the outer border of the grid, produce nothing.
pub fn generate_map(
    grid: &Grid,
    screen_width: f64,
    screen_height: f64,
    registry: &TextureRegistry,
) -> Result<WallSet> {
    if !(screen_width > 0.0 && screen_height > 0.0) {
        return Err(MapError::InvalidScreen {
            width: screen_width,
            height: screen_height,
        });
    }

    let (cw, ch) = cell_size(grid, screen_width, screen_height);
    let corner = |row: usize, column: usize| V2::new(column as f64 * cw, row as f64 * ch);

    let mut walls = vec![];
    for i in 0..grid.get_height() {
        for j in 0..grid.get_width() {
            let symbol = grid.get(i, j).expect("Iterating inside the grid");
            let texture_name = match texture_for_symbol(symbol) {
                Some(t) => t,
                None => continue,
            };
            let texture = registry.resolve(texture_name)?;
            let mut emit = |start: V2, end: V2| {
                walls.push(Wall::new(Segment::new(start, end), texture.clone()));
            };

            if i > 0 && grid.is_open(i - 1, j) {
                emit(corner(i, j), corner(i, j + 1));
            }
            if grid.is_open(i + 1, j) {
                emit(corner(i + 1, j), corner(i + 1, j + 1));
            }
            if j > 0 && grid.is_open(i, j - 1) {
                emit(corner(i, j), corner(i + 1, j));
            }
            if grid.is_open(i, j + 1) {
                emit(corner(i, j + 1), corner(i + 1, j + 1));
            }
        }
    }

    info!(
        "Generated {} walls from a {}x{} grid with {}x{} cells",
        walls.len(),
        grid.get_width(),
        grid.get_height(),
        cw,
        ch
    );
    Ok(WallSet::new(walls))
}
