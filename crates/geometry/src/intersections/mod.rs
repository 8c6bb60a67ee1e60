//! Analytic intersection tests.
//!
//! Degenerate configurations (parallel lines, zero-length segments, misses) are reported as `None`; none of these
//! are errors.
mod circle_segment;
mod ray_segment;

pub use circle_segment::*;
pub use ray_segment::*;
