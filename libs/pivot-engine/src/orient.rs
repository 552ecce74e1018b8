//! # Orientation Solver
//!
//! Finds the rotation about Z that minimizes the axis-aligned bounding
//! rectangle of a silhouette hull.
//!
//! ## Algorithm Overview
//!
//! 1. Collect the direction of every hull edge, folded into `[0, π)`
//! 2. Sort and deduplicate the directions within a small tolerance
//! 3. For each direction `θ`, rotate the hull by `-θ` and measure its
//!    bounding box; the first strictly smallest box wins

use std::f64::consts::PI;

use config::constants::{ANGLE_DEDUP_TOLERANCE, DEGENERATE_EDGE_LENGTH_SQ};

use crate::bbox::BoundingBox2D;
use crate::core::vec2::{fold_half_turn, rotate};
use crate::core::Vec2;

/// Relative improvement a candidate needs to replace the current best.
const AREA_TIE_TOLERANCE: f64 = 1e-9;

/// Unique hull edge directions in `[0, π)`, ascending.
pub fn candidate_angles(hull: &[Vec2]) -> Vec<f64> {
    let n = hull.len();
    let mut angles: Vec<f64> = (0..n)
        .filter_map(|i| {
            let d = hull[(i + 1) % n] - hull[i];
            (d.length_squared() > DEGENERATE_EDGE_LENGTH_SQ)
                .then(|| fold_half_turn(d.y.atan2(d.x)))
        })
        .collect();
    angles.sort_by(f64::total_cmp);

    let mut unique: Vec<f64> = Vec::with_capacity(angles.len());
    for angle in angles {
        if unique
            .last()
            .map_or(true, |&last| angle - last > ANGLE_DEDUP_TOLERANCE)
        {
            unique.push(angle);
        }
    }
    // Directions just below π duplicate those just above zero.
    if unique.len() > 1 {
        if let (Some(&first), Some(&last)) = (unique.first(), unique.last()) {
            if first + PI - last <= ANGLE_DEDUP_TOLERANCE {
                unique.pop();
            }
        }
    }
    unique
}

/// Minimum-area rectangle of `hull`.
///
/// `bounds.rotation` is the rotation that aligns the hull with the
/// rectangle; the box itself is measured in that rotated frame. Returns
/// `None` when the hull has no usable edge.
pub fn min_area_rect(hull: &[Vec2]) -> Option<BoundingBox2D> {
    let mut best: Option<BoundingBox2D> = None;
    for angle in candidate_angles(hull) {
        let rotation = -angle;
        let Some(bounds) = BoundingBox2D::from_points(hull.iter().map(|&p| rotate(p, rotation)))
        else {
            continue;
        };
        let improves = best.map_or(true, |b| {
            bounds.area < b.area - AREA_TIE_TOLERANCE * b.area.abs().max(f64::MIN_POSITIVE)
        });
        if improves {
            best = Some(bounds.with_rotation(rotation));
        }
    }
    best
}

/// Rotation about Z that puts `hull` into its minimum-area rectangle.
///
/// # Example
///
/// ```rust
/// use pivot_engine::core::vec2::rotate;
/// use pivot_engine::core::Vec2;
/// use pivot_engine::orient::forward_angle;
///
/// let rect = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 0.0),
///     Vec2::new(2.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// let tilted: Vec<Vec2> = rect.iter().map(|&p| rotate(p, 0.3)).collect();
/// assert!((forward_angle(&tilted) + 0.3).abs() < 1e-9);
/// ```
pub fn forward_angle(hull: &[Vec2]) -> f64 {
    min_area_rect(hull).map_or(0.0, |b| b.rotation)
}

#[cfg(test)]
mod tests;
