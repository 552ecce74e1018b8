//! Flat sheet detection.
//!
//! A flat object has a middle profile that is long in one horizontal
//! direction and thin in the other, like a sign or a bracket stem.

use config::constants::{FLAT_ASPECT_RATIO, FLAT_MAX_THIN, FLAT_MIN_LONG, FLAT_UPPER_FRACTION};

use super::{FrontAxis, ShapeProfile, ALL_TURNS};
use crate::bbox::BoundingBox2D;
use crate::core::{Axis, Vec2};

/// Union of the slice boxes in the middle half of the profile.
pub fn middle_bounds(profile: &ShapeProfile<'_>) -> Option<BoundingBox2D> {
    let slices = &profile.cog.slices;
    let n = slices.len();
    let start = n / 4;
    let end = (3 * n / 4).max(start + 1).min(n);
    slices
        .get(start..end)?
        .iter()
        .filter_map(|s| s.bounds)
        .reduce(|a, b| a.union(&b))
}

/// Returns the middle bounds when the object is a flat sheet.
pub fn detect(profile: &ShapeProfile<'_>) -> Option<BoundingBox2D> {
    let middle = middle_bounds(profile)?;
    let size = middle.size();
    let (long, thin) = (size.x.max(size.y), size.x.min(size.y));
    let elongated = thin == 0.0 || long / thin > FLAT_ASPECT_RATIO;
    (elongated && thin < FLAT_MAX_THIN && long > FLAT_MIN_LONG).then_some(middle)
}

/// Turns the heavier upper half of the long axis toward +X.
pub fn refine(profile: &ShapeProfile<'_>, middle: &BoundingBox2D, front: &mut FrontAxis) {
    let size = middle.size();
    let (axis, unit) = if size.x >= size.y {
        (Axis::X, Vec2::X)
    } else {
        (Axis::Y, Vec2::Y)
    };
    let center = match axis {
        Axis::Y => middle.center().y,
        _ => middle.center().x,
    };

    let threshold = profile.bounds.factor_to_coord(Axis::Z, FLAT_UPPER_FRACTION);
    let (mut positive, mut negative) = (0usize, 0usize);
    for &v in profile.vertices.iter().filter(|v| v.z >= threshold) {
        if axis.component(v) >= center {
            positive += 1;
        } else {
            negative += 1;
        }
    }

    let heavier = if negative > positive { -unit } else { unit };
    front.snap(heavier, Vec2::X, &ALL_TURNS);
}
