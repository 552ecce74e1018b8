//! # Surface Classification
//!
//! Decides which surface an object rests against and refines its forward
//! axis in quarter turns.
//!
//! ## Decision Order
//!
//! 1. [`flat::detect`]: thin sheet-like middle profile
//! 2. [`ground::is_ground`]: stable base under the center of gravity
//! 3. [`wall::dominant_shell`]: one lateral face dominates
//! 4. Otherwise ceiling
//!
//! All inputs are in the working frame, i.e. already rotated by the
//! hull-derived forward angle. Quarter turns are applied on top of it.

pub mod flat;
pub mod ground;
pub mod wall;

use std::f64::consts::FRAC_PI_2;

use config::constants::{BASE_BAND_FACTOR, GEOMETRY_EPSILON};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bbox::{BoundingBox2D, BoundingBox3D};
use crate::cog::{CogResult, SliceData};
use crate::core::vec2::quarter_turns;
use crate::core::{Axis, Vec2, Vec3};

// =============================================================================
// PUBLIC ENUMS
// =============================================================================

/// Surface an object is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SurfaceType {
    Ground = 0,
    Wall = 1,
    Ceiling = 2,
}

impl SurfaceType {
    /// Integer code used by host bridges.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Shape decision, finer grained than [`SurfaceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShapeClass {
    Flat,
    Ground,
    Wall,
    Ceiling,
}

impl ShapeClass {
    /// Flat sheets lie on the ground.
    pub fn surface(self) -> SurfaceType {
        match self {
            ShapeClass::Flat | ShapeClass::Ground => SurfaceType::Ground,
            ShapeClass::Wall => SurfaceType::Wall,
            ShapeClass::Ceiling => SurfaceType::Ceiling,
        }
    }
}

/// Caller override for the surface decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SurfaceContext {
    /// Run the full decision procedure.
    #[default]
    Auto,
    Ground,
    Wall,
    Ceiling,
}

// =============================================================================
// FRONT AXIS
// =============================================================================

/// Every quarter-turn count.
pub const ALL_TURNS: [u8; 4] = [0, 1, 2, 3];

/// Counter-clockwise quarter turns about +Z, modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrontAxis(u8);

impl FrontAxis {
    pub fn new(turns: u8) -> Self {
        Self(turns % 4)
    }

    pub fn turns(self) -> u8 {
        self.0
    }

    /// Adds `turns` quarter turns.
    pub fn turn(&mut self, turns: u8) {
        self.0 = (self.0 + turns % 4) % 4;
    }

    /// Rotates a working-frame direction by the current turns.
    pub fn apply(self, v: Vec2) -> Vec2 {
        quarter_turns(v, self.0)
    }

    /// Angle of the current turns in radians.
    pub fn angle(self) -> f64 {
        f64::from(self.0) * FRAC_PI_2
    }

    /// Turns so that `dir`, as seen after the current turns, points as close
    /// to `target` as `options` allow. Returns `false` for a vanishing
    /// direction.
    pub fn snap(&mut self, dir: Vec2, target: Vec2, options: &[u8]) -> bool {
        match turns_toward(self.apply(dir), target, options) {
            Some(turns) => {
                self.turn(turns);
                true
            }
            None => false,
        }
    }
}

/// The option whose quarter turns best align `dir` with `target`.
///
/// The first option with the largest alignment wins. A `dir` no longer
/// than [`GEOMETRY_EPSILON`] or an empty option list gives `None`.
///
/// # Example
///
/// ```rust
/// use pivot_engine::classify::{turns_toward, ALL_TURNS};
/// use pivot_engine::core::Vec2;
///
/// assert_eq!(turns_toward(Vec2::X, Vec2::Y, &ALL_TURNS), Some(1));
/// assert_eq!(turns_toward(Vec2::X, Vec2::Y, &[0, 2]), Some(0));
/// assert_eq!(turns_toward(Vec2::ZERO, Vec2::Y, &ALL_TURNS), None);
/// ```
pub fn turns_toward(dir: Vec2, target: Vec2, options: &[u8]) -> Option<u8> {
    if dir.length() <= GEOMETRY_EPSILON {
        return None;
    }
    let dir = dir.normalize();
    let mut best: Option<(u8, f64)> = None;
    for &turns in options {
        let score = quarter_turns(dir, turns).dot(target);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((turns, score));
        }
    }
    best.map(|(turns, _)| turns)
}

// =============================================================================
// PROFILE
// =============================================================================

/// Everything the classifier reads about one object, in the working frame.
#[derive(Debug, Clone, Copy)]
pub struct ShapeProfile<'a> {
    pub vertices: &'a [Vec3],
    pub cog: &'a CogResult,
    pub bounds: BoundingBox3D,
}

impl<'a> ShapeProfile<'a> {
    /// Returns `None` when there are no vertices.
    pub fn new(vertices: &'a [Vec3], cog: &'a CogResult) -> Option<Self> {
        let bounds = BoundingBox3D::from_points(vertices.iter().copied())?;
        Some(Self {
            vertices,
            cog,
            bounds,
        })
    }

    /// XY rectangle under the whole object.
    pub fn footprint(&self) -> BoundingBox2D {
        self.bounds.footprint()
    }

    /// Slices without the first and last.
    pub fn interior_slices(&self) -> &'a [SliceData] {
        let cog: &'a CogResult = self.cog;
        let slices = cog.slices.as_slice();
        if slices.len() > 2 {
            &slices[1..slices.len() - 1]
        } else {
            &[]
        }
    }

    /// Z interval of the lowest base band.
    pub fn base_band(&self) -> (f64, f64) {
        (
            self.bounds.min.z,
            self.bounds.factor_to_coord(Axis::Z, BASE_BAND_FACTOR),
        )
    }

    /// Z interval of the highest band.
    pub fn top_band(&self) -> (f64, f64) {
        (
            self.bounds.factor_to_coord(Axis::Z, 1.0 - BASE_BAND_FACTOR),
            self.bounds.max.z,
        )
    }

    /// Centre of the base band's bounds, at the lowest Z.
    pub fn base_contact(&self) -> Vec3 {
        let (lo, hi) = self.base_band();
        let center = BoundingBox2D::from_points_in_band(self.vertices, Axis::Z, lo, hi)
            .map_or_else(|| self.footprint().center(), |b| b.center());
        center.extend(self.bounds.min.z)
    }

    /// Centre of the top band's bounds, at the highest Z.
    pub fn top_contact(&self) -> Vec3 {
        let (lo, hi) = self.top_band();
        let center = BoundingBox2D::from_points_in_band(self.vertices, Axis::Z, lo, hi)
            .map_or_else(|| self.footprint().center(), |b| b.center());
        center.extend(self.bounds.max.z)
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of classifying one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub shape: ShapeClass,
    pub front: FrontAxis,
    /// Contact point in the working frame, before the front turns.
    pub contact: Vec3,
}

/// Classifies `profile`, or applies the refinement of a forced surface.
pub fn classify(profile: &ShapeProfile<'_>, context: SurfaceContext) -> Classification {
    let mut front = FrontAxis::default();

    let (shape, contact) = match context {
        SurfaceContext::Auto => decide(profile, &mut front),
        SurfaceContext::Ground => {
            ground::refine(profile, &mut front);
            (ShapeClass::Ground, profile.base_contact())
        }
        SurfaceContext::Wall => match wall::dominant_shell(profile) {
            Some(shell) => {
                wall::refine(&shell, &mut front);
                (ShapeClass::Wall, wall::contact_point(profile, &shell))
            }
            None => (ShapeClass::Wall, profile.base_contact()),
        },
        SurfaceContext::Ceiling => (ShapeClass::Ceiling, profile.top_contact()),
    };

    debug!(?context, ?shape, turns = front.turns(), "Classified object");
    Classification {
        shape,
        front,
        contact,
    }
}

fn decide(profile: &ShapeProfile<'_>, front: &mut FrontAxis) -> (ShapeClass, Vec3) {
    if let Some(middle) = flat::detect(profile) {
        flat::refine(profile, &middle, front);
        return (ShapeClass::Flat, profile.base_contact());
    }

    if ground::is_ground(profile) {
        ground::refine(profile, front);
        return (ShapeClass::Ground, profile.base_contact());
    }

    if let Some(shell) = wall::dominant_shell(profile).filter(|s| wall::is_wall(profile, s)) {
        wall::refine(&shell, front);
        return (ShapeClass::Wall, wall::contact_point(profile, &shell));
    }

    (ShapeClass::Ceiling, profile.top_contact())
}

#[cfg(test)]
mod tests;
