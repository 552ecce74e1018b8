//! 2D vector definitions for the engine.
//!
//! Provides type alias for `glam::DVec2` and planar rotation utilities.

use std::cmp::Ordering;
use std::f64::consts::PI;

pub use glam::DVec2 as Vec2;

/// Rotates `v` counter-clockwise by `angle` radians about the origin.
///
/// # Examples
/// ```
/// use pivot_engine::core::vec2::{rotate, Vec2};
///
/// let v = rotate(Vec2::X, std::f64::consts::FRAC_PI_2);
/// assert!((v - Vec2::Y).length() < 1e-12);
/// ```
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotates `v` counter-clockwise by `turns` exact quarter turns.
pub fn quarter_turns(v: Vec2, turns: u8) -> Vec2 {
    match turns % 4 {
        0 => v,
        1 => Vec2::new(-v.y, v.x),
        2 => Vec2::new(-v.x, -v.y),
        _ => Vec2::new(v.y, -v.x),
    }
}

/// Lexicographic `(x, y)` ordering with a total order on floats.
pub fn lexicographic(a: &Vec2, b: &Vec2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Folds an angle into `[0, π)`.
///
/// Rectangles are symmetric under a half turn, so directions that differ
/// by `π` are equivalent.
pub fn fold_half_turn(angle: f64) -> f64 {
    let folded = angle.rem_euclid(PI);
    if folded >= PI {
        0.0
    } else {
        folded
    }
}
