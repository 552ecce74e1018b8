//! Unit quaternion helpers.
//!
//! Every constructor here returns a unit quaternion; degenerate inputs fall
//! back to the identity rotation.

use super::vec3::Vec3;

pub use glam::DQuat as Quat;

/// Builds a rotation of `angle` radians about `axis`.
///
/// A zero-length axis yields the identity.
///
/// # Examples
/// ```
/// use pivot_engine::core::quat::from_axis_angle;
/// use pivot_engine::core::{Quat, Vec3};
///
/// assert_eq!(from_axis_angle(Vec3::ZERO, 1.0), Quat::IDENTITY);
/// ```
pub fn from_axis_angle(axis: Vec3, angle: f64) -> Quat {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO || !angle.is_finite() {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle)
}

/// Rotation of `angle` radians about +Z.
pub fn about_z(angle: f64) -> Quat {
    from_axis_angle(Vec3::Z, angle)
}

/// Normalizes `q`, returning the identity for zero or non-finite input.
pub fn normalize_or_identity(q: Quat) -> Quat {
    let length = q.length();
    if !length.is_finite() || length <= f64::EPSILON {
        return Quat::IDENTITY;
    }
    q / length
}
