//! The static world: textures, the walls built from a character grid, and the on-disk cache of those walls.
mod cache;
mod color;
mod errors;
mod generate;
mod grid;
mod texture;
mod texture_registry;
mod wall;

pub use cache::*;
pub use color::*;
pub use errors::*;
pub use generate::*;
pub use grid::*;
pub use texture::*;
pub use texture_registry::*;
pub use wall::*;
