//! The raycasting engine: casting a fan of rays against the walls of a map, moving a circular viewpoint through it
//! without passing through walls, and projecting the hits into screen columns.
//!
//! Nothing here draws.  A frame is a list of colored rectangles and [DrawCommand]s for whatever owns the window.
mod caster;
mod config;
mod draw;
mod engine;
mod errors;
mod fps;
mod input;
mod projector;
mod viewpoint;
mod wall_index;

pub use caster::*;
pub use config::*;
pub use draw::*;
pub use engine::*;
pub use errors::*;
pub use fps::*;
pub use input::*;
pub use projector::*;
pub use viewpoint::*;
pub use wall_index::*;
