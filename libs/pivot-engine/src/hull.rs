//! # Planar Convex Hull
//!
//! Andrew's monotone chain over XY points, plus the polygon measures the
//! slicing and classification stages need.
//!
//! ## Algorithm Overview
//!
//! 1. Sort points by `(x, y)`
//! 2. Build the lower chain left to right, popping while the last turn is
//!    not strictly counter-clockwise
//! 3. Build the upper chain right to left the same way
//! 4. Concatenate, dropping each chain's last point
//!
//! Turn tests use the adaptive-precision `robust::orient2d` predicate.

use robust::{orient2d, Coord};

use crate::core::vec2::lexicographic;
use crate::core::vec3::xy;
use crate::core::{Axis, Vec2, Vec3};

#[inline]
fn coord(p: Vec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

fn push_chain(chain: &mut Vec<Vec2>, p: Vec2) {
    while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
    {
        chain.pop();
    }
    chain.push(p);
}

/// Computes the convex hull of `points` in counter-clockwise order.
///
/// Inputs of three points or fewer are returned unchanged.
///
/// # Example
///
/// ```rust
/// use pivot_engine::core::Vec2;
/// use pivot_engine::hull::monotonic_chain;
///
/// let points = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(0.5, 0.5),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// let hull = monotonic_chain(&points);
/// assert_eq!(hull.len(), 4);
/// assert!(!hull.contains(&Vec2::new(0.5, 0.5)));
/// ```
pub fn monotonic_chain(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(lexicographic);

    let mut lower = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        push_chain(&mut lower, p);
    }
    let mut upper = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        push_chain(&mut upper, p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Hull of the XY projection of the points whose `axis` coordinate lies in
/// `[min, max]`.
pub fn monotonic_chain_band(points: &[Vec3], axis: Axis, min: f64, max: f64) -> Vec<Vec2> {
    let band: Vec<Vec2> = points
        .iter()
        .filter(|&&p| (min..=max).contains(&axis.component(p)))
        .map(|&p| xy(p))
        .collect();
    monotonic_chain(&band)
}

/// Signed area and centroid of a simple polygon (shoelace formula).
///
/// Counter-clockwise polygons have positive area. Returns `None` for fewer
/// than three vertices or a zero-area polygon.
pub fn area_centroid(polygon: &[Vec2]) -> Option<(f64, Vec2)> {
    if polygon.len() < 3 {
        return None;
    }
    let mut twice_area = 0.0;
    let mut weighted = Vec2::ZERO;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let cross = a.perp_dot(b);
        twice_area += cross;
        weighted += (a + b) * cross;
    }
    if twice_area == 0.0 {
        return None;
    }
    let area = twice_area / 2.0;
    Some((area, weighted / (3.0 * twice_area)))
}

/// Even-odd point-in-polygon test. Polygons with fewer than three vertices
/// contain nothing.
pub fn contains_point(polygon: &[Vec2], p: Vec2) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
