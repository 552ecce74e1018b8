use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;

fn rectangle(w: f64, h: f64) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(w, 0.0),
        Vec2::new(w, h),
        Vec2::new(0.0, h),
    ]
}

fn rotated(points: &[Vec2], angle: f64) -> Vec<Vec2> {
    points.iter().map(|&p| rotate(p, angle)).collect()
}

#[test]
fn test_axis_aligned_rectangle_angles() {
    let angles = candidate_angles(&rectangle(2.0, 1.0));
    assert_eq!(angles.len(), 2);
    assert_abs_diff_eq!(angles[0], 0.0);
    assert_abs_diff_eq!(angles[1], FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_near_pi_direction_merges_with_zero() {
    let hull = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.5, 1.0),
        Vec2::new(-0.5, 1.0 + 1e-6),
    ];
    let angles = candidate_angles(&hull);
    assert!(angles.iter().all(|&a| (0.0..PI).contains(&a)));
    assert_eq!(angles.iter().filter(|&&a| a < 1e-3 || a > PI - 1e-3).count(), 1);
}

#[test]
fn test_aligned_rectangle_keeps_zero_rotation() {
    let rect = min_area_rect(&rectangle(2.0, 1.0)).unwrap();
    assert_abs_diff_eq!(rect.rotation, 0.0);
    assert_abs_diff_eq!(rect.area, 2.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_is_recovered_modulo_symmetry() {
    let base = rectangle(3.0, 1.0);
    let base_area = min_area_rect(&base).unwrap().area;

    for offset in [0.1, 0.45, 1.0, 2.2, -0.7] {
        let rect = min_area_rect(&rotated(&base, offset)).unwrap();
        assert_abs_diff_eq!(rect.area, base_area, epsilon = 1e-9);

        let residual = (rect.rotation + offset).rem_euclid(FRAC_PI_2);
        let residual = residual.min(FRAC_PI_2 - residual);
        assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_rotated_hull_is_axis_aligned() {
    let tilted = rotated(&rectangle(4.0, 1.0), 0.6);
    let angle = forward_angle(&tilted);
    let aligned = rotated(&tilted, angle);
    let bounds = BoundingBox2D::from_points(aligned).unwrap();
    assert_abs_diff_eq!(bounds.area, 4.0, epsilon = 1e-9);
}

#[test]
fn test_degenerate_hull_gives_zero() {
    assert_eq!(forward_angle(&[]), 0.0);
    assert_eq!(forward_angle(&[Vec2::ONE, Vec2::ONE]), 0.0);
}

#[test]
fn test_two_point_hull_aligns_segment() {
    let hull = [Vec2::ZERO, Vec2::new(1.0, 1.0)];
    assert_abs_diff_eq!(forward_angle(&hull), -PI / 4.0, epsilon = 1e-12);
}
