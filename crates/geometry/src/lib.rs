//! Flat 2D geometry for the wall caster: points, segments, rays, and the analytic intersection tests between them.
mod aabb;
mod circle;
mod errors;
mod grid_traversal;
pub mod intersections;
mod ray;
mod rect;
pub mod scalar;
mod segment;
mod spatial_hash;
mod v2;

pub use aabb::*;
pub use circle::*;
pub use errors::*;
pub use grid_traversal::*;
pub use ray::*;
pub use rect::*;
pub use segment::*;
pub use spatial_hash::*;
pub use v2::*;
