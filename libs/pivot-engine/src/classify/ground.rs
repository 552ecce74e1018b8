//! # Ground Detection
//!
//! An object stands on the ground when its base is broad relative to its
//! mean cross-section, it has no vanishing waist, it is not too slender to
//! stand, and its center of gravity lies over the base.
//!
//! ## Front Refinement
//!
//! Tried in order until one applies:
//!
//! 1. [`snap_stand`]: narrow stand slices point away from the front
//! 2. [`snap_high`]: the top leans toward the back
//! 3. Size fallbacks built on [`snap_dense`]

use config::constants::{
    GROUND_MAX_SLENDERNESS, GROUND_MIN_CROSS_SECTION, GROUND_RATIO_MAX, HIGH_OFFSET_FRACTION,
    SMALL_OBJECT_MAX_EXTENT, SQUARISH_RATIO, STAND_AREA_RATIO,
};
use tracing::debug;

use super::{FrontAxis, ShapeProfile, ALL_TURNS};
use crate::bbox::BoundingBox2D;
use crate::core::vec3::xy;
use crate::core::{Axis, Vec2};
use crate::hull::{contains_point, monotonic_chain_band};

/// Convex hull of the base band.
pub fn base_hull(profile: &ShapeProfile<'_>) -> Vec<Vec2> {
    let (lo, hi) = profile.base_band();
    monotonic_chain_band(profile.vertices, Axis::Z, lo, hi)
}

/// Mean cross-section of the bounding box over the base hull's box area.
///
/// `None` when the base has no area.
pub fn base_ratio(profile: &ShapeProfile<'_>, hull: &[Vec2]) -> Option<f64> {
    let base = BoundingBox2D::from_points(hull.iter().copied())?;
    if base.area <= 0.0 {
        return None;
    }
    Some(profile.footprint().area / base.area)
}

/// Height over the narrowest footprint extent.
pub fn slenderness(profile: &ShapeProfile<'_>) -> f64 {
    let height = profile.bounds.height();
    if height <= 0.0 {
        return 0.0;
    }
    let size = profile.footprint().size();
    height / size.x.min(size.y)
}

pub fn is_ground(profile: &ShapeProfile<'_>) -> bool {
    if profile.cog.slices.is_empty() {
        return false;
    }

    let hull = base_hull(profile);
    let ratio = base_ratio(profile, &hull);
    let broad_base = ratio.is_some_and(|r| r < GROUND_RATIO_MAX);
    let thick_enough = profile
        .interior_slices()
        .iter()
        .all(|s| s.area > GROUND_MIN_CROSS_SECTION);
    let slenderness = slenderness(profile);
    let stands = slenderness <= GROUND_MAX_SLENDERNESS;
    let cog_over_base = contains_point(&hull, xy(profile.cog.overall));

    debug!(
        ?ratio,
        thick_enough, slenderness, cog_over_base, "Ground checks"
    );
    broad_base && thick_enough && stands && cog_over_base
}

/// Applies the first front refinement that fits.
pub fn refine(profile: &ShapeProfile<'_>, front: &mut FrontAxis) {
    if snap_stand(profile, front) || snap_high(profile, front) {
        return;
    }

    if is_small(profile) {
        snap_dense(profile, front, &ALL_TURNS);
        front.turn(2);
    } else if is_squarish(profile) {
        snap_dense(profile, front, &ALL_TURNS);
    } else {
        align_long_axis_to_x(profile, front);
        snap_dense(profile, front, &[0, 2]);
    }
}

/// Interior slices much narrower than the footprint form a stand. When
/// there is more than one, their mean offset from the COG points forward.
pub fn snap_stand(profile: &ShapeProfile<'_>, front: &mut FrontAxis) -> bool {
    let footprint_area = profile.footprint().area;
    let stand: Vec<Vec2> = profile
        .interior_slices()
        .iter()
        .filter(|s| {
            let area = s.bounds_area();
            area > 0.0 && footprint_area / area > STAND_AREA_RATIO
        })
        .map(|s| s.centroid)
        .collect();
    if stand.len() < 2 {
        return false;
    }

    let mean = stand.iter().copied().sum::<Vec2>() / stand.len() as f64;
    front.snap(mean - xy(profile.cog.overall), Vec2::Y, &ALL_TURNS);
    true
}

/// Turns toward the top slice when it sits well off the footprint centre.
pub fn snap_high(profile: &ShapeProfile<'_>, front: &mut FrontAxis) -> bool {
    let Some(top) = profile.cog.slices.iter().rev().find(|s| s.area > 0.0) else {
        return false;
    };
    let footprint = profile.footprint();
    let offset = top.centroid - footprint.center();
    let reach = footprint.size().max_element() * HIGH_OFFSET_FRACTION;
    if offset.length() <= reach {
        return false;
    }
    front.snap(offset, Vec2::Y, &ALL_TURNS)
}

/// Turns the side the COG leans toward to +Y.
pub fn snap_dense(profile: &ShapeProfile<'_>, front: &mut FrontAxis, options: &[u8]) -> bool {
    let offset = xy(profile.cog.overall) - profile.footprint().center();
    front.snap(offset, Vec2::Y, options)
}

/// One quarter turn when the footprint is deeper than it is wide.
pub fn align_long_axis_to_x(profile: &ShapeProfile<'_>, front: &mut FrontAxis) {
    let size = profile.footprint().size();
    if size.y > size.x {
        front.turn(1);
    }
}

pub fn is_small(profile: &ShapeProfile<'_>) -> bool {
    profile.footprint().size().max_element() < SMALL_OBJECT_MAX_EXTENT
}

pub fn is_squarish(profile: &ShapeProfile<'_>) -> bool {
    let size = profile.footprint().size();
    let (long, short) = (size.max_element(), size.min_element());
    short > 0.0 && long / short < SQUARISH_RATIO
}
