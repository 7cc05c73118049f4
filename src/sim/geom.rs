//! Plane geometry for the arena
//!
//! Positions and headings live on the horizontal plane. `Vec2::x` is world x
//! and `Vec2::y` is world z; height is never simulated.

use glam::Vec2;

/// Whether `p` lies strictly inside the square arena of half-width `bounds`.
///
/// Touching the wall counts as outside. With `bounds <= 0` (or a NaN
/// coordinate) nothing is inside.
#[inline]
pub fn inside_bounds(p: Vec2, bounds: f32) -> bool {
    -bounds < p.x && p.x < bounds && -bounds < p.y && p.y < bounds
}

/// Per-axis proximity test: both axis deltas strictly below `tolerance`.
///
/// This is a box test, not a Euclidean distance.
#[inline]
pub fn near(a: Vec2, b: Vec2, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Heading rotated to the actor's left: (dx, dz) -> (dz, -dx)
#[inline]
pub fn rotate_left(heading: Vec2) -> Vec2 {
    Vec2::new(heading.y, -heading.x)
}

/// Heading rotated to the actor's right: (dx, dz) -> (-dz, dx)
#[inline]
pub fn rotate_right(heading: Vec2) -> Vec2 {
    Vec2::new(-heading.y, heading.x)
}
