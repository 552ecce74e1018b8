//! Thin wrapper around `glam::DVec3` shared across engine modules.
//!
//! The engine assumes Z-up world coordinates throughout.

use super::vec2::{self, Vec2};

pub use glam::DVec3 as Vec3;

/// World axis selector for band filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the component of `v` along this axis.
    ///
    /// # Examples
    /// ```
    /// use pivot_engine::core::{Axis, Vec3};
    /// assert_eq!(Axis::Y.component(Vec3::new(1.0, 2.0, 3.0)), 2.0);
    /// ```
    pub fn component(self, v: Vec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Projects a point onto the XY plane.
pub fn xy(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Rotates `v` counter-clockwise about the Z axis, leaving `z` untouched.
///
/// # Examples
/// ```
/// use pivot_engine::core::vec3::{rotate_z, Vec3};
/// let v = rotate_z(Vec3::new(1.0, 0.0, 5.0), std::f64::consts::PI);
/// assert!((v - Vec3::new(-1.0, 0.0, 5.0)).length() < 1e-12);
/// ```
pub fn rotate_z(v: Vec3, angle: f64) -> Vec3 {
    vec2::rotate(xy(v), angle).extend(v.z)
}

/// Rotates `v` about Z by exact quarter turns.
pub fn quarter_turns_z(v: Vec3, turns: u8) -> Vec3 {
    vec2::quarter_turns(xy(v), turns).extend(v.z)
}
