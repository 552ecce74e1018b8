//! Wall detection from lateral bounding-box shells.
//!
//! Each shell is the thin slab of vertices at one side of the bounding box.
//! The widest shell is the face mounted against the wall.

use config::constants::{WALL_RATIO_MAX, WALL_SHELL_FRACTION};
use serde::{Deserialize, Serialize};

use super::{FrontAxis, ShapeProfile, ALL_TURNS};
use crate::bbox::BoundingBox3D;
use crate::core::{Axis, Vec2, Vec3};

/// Lateral side of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellSide {
    XPositive,
    XNegative,
    YPositive,
    YNegative,
}

impl ShellSide {
    /// Evaluation order; earlier sides win ties.
    pub const ORDER: [ShellSide; 4] = [
        ShellSide::XPositive,
        ShellSide::XNegative,
        ShellSide::YPositive,
        ShellSide::YNegative,
    ];

    pub fn axis(self) -> Axis {
        match self {
            ShellSide::XPositive | ShellSide::XNegative => Axis::X,
            ShellSide::YPositive | ShellSide::YNegative => Axis::Y,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, ShellSide::XPositive | ShellSide::YPositive)
    }

    /// Unit direction pointing out of the box through this side.
    pub fn outward(self) -> Vec2 {
        match self {
            ShellSide::XPositive => Vec2::X,
            ShellSide::XNegative => Vec2::NEG_X,
            ShellSide::YPositive => Vec2::Y,
            ShellSide::YNegative => Vec2::NEG_Y,
        }
    }
}

/// Vertices near one side of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    pub side: ShellSide,
    pub bounds: BoundingBox3D,
    /// Face area across the two axes other than the side's axis.
    pub area: f64,
}

/// Area of the face of `size` normal to `axis`.
fn face_area(size: Vec3, axis: Axis) -> f64 {
    match axis {
        Axis::X => size.y * size.z,
        Axis::Y => size.x * size.z,
        Axis::Z => size.x * size.y,
    }
}

/// Builds the shell on `side`; `None` if no vertex falls inside it.
pub fn shell(profile: &ShapeProfile<'_>, side: ShellSide) -> Option<Shell> {
    let axis = side.axis();
    let (lo, hi) = if side.is_positive() {
        (
            profile.bounds.factor_to_coord(axis, 1.0 - WALL_SHELL_FRACTION),
            axis.component(profile.bounds.max),
        )
    } else {
        (
            axis.component(profile.bounds.min),
            profile.bounds.factor_to_coord(axis, WALL_SHELL_FRACTION),
        )
    };
    let bounds = BoundingBox3D::from_points_in_band(profile.vertices, axis, lo, hi)?;
    Some(Shell {
        side,
        bounds,
        area: face_area(bounds.size(), axis),
    })
}

/// The shell with the largest area, first side winning ties.
pub fn dominant_shell(profile: &ShapeProfile<'_>) -> Option<Shell> {
    ShellSide::ORDER
        .into_iter()
        .filter_map(|side| shell(profile, side))
        .fold(None, |best: Option<Shell>, s| match best {
            Some(b) if s.area <= b.area => Some(b),
            _ => Some(s),
        })
}

/// True when the shell covers a large enough share of the full face.
pub fn is_wall(profile: &ShapeProfile<'_>, shell: &Shell) -> bool {
    if shell.area <= 0.0 {
        return false;
    }
    let full_area = face_area(profile.bounds.size(), shell.side.axis());
    full_area / shell.area < WALL_RATIO_MAX
}

/// Turns the mounting side toward +Y.
pub fn refine(shell: &Shell, front: &mut FrontAxis) {
    front.snap(shell.side.outward(), Vec2::Y, &ALL_TURNS);
}

/// Centre of the shell, pushed out to the side of the bounding box.
pub fn contact_point(profile: &ShapeProfile<'_>, shell: &Shell) -> Vec3 {
    let mut point = shell.bounds.center();
    let extreme = if shell.side.is_positive() {
        profile.bounds.max
    } else {
        profile.bounds.min
    };
    match shell.side.axis() {
        Axis::X => point.x = extreme.x,
        _ => point.y = extreme.y,
    }
    point
}
