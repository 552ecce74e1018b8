use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_box_has_twelve_unit_axis_edges() {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b.vertices.len(), 8);
    assert_eq!(b.edges.len(), 12);
    for [a, c] in &b.edges {
        let d = b.vertices[*c as usize] - b.vertices[*a as usize];
        let axes = [d.x, d.y, d.z].iter().filter(|&&x| x != 0.0).count();
        assert_eq!(axes, 1);
    }
}

#[test]
fn test_grid_counts_and_offsets() {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, Vec3::ONE);
    let base = b.add_grid(Vec3::new(0.0, 0.0, 2.0), 0.5, 3, 2);
    assert_eq!(base, 8);
    assert_eq!(b.vertices.len(), 8 + 6);
    // 2 rows of 2 horizontal edges plus 3 vertical edges.
    assert_eq!(b.edges.len(), 12 + 7);
    assert_eq!(b.vertices[8 + 5], Vec3::new(1.0, 0.5, 2.0));
}

#[test]
fn test_unanchored_strand_is_a_chain() {
    let mut b = WireframeBuilder::new();
    let range = b.add_strand(Vec3::ZERO, Vec3::Z, 3, None);
    assert_eq!(range, 0..3);
    assert_eq!(b.edges, vec![[0, 1], [1, 2]]);

    let empty = b.add_strand(Vec3::ZERO, Vec3::Z, 0, Some(0));
    assert!(empty.is_empty());
    assert_eq!(b.edges.len(), 2);
}

#[test]
fn test_rotated_keeps_edges() {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
    let turned = b.rotated(std::f64::consts::FRAC_PI_2);
    assert_eq!(turned.edges, b.edges);
    assert_abs_diff_eq!(turned.vertices[1].y, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(turned.vertices[1].x, 0.0, epsilon = 1e-12);
}

#[test]
fn test_view_validates() {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, Vec3::ONE);
    assert_eq!(b.view().unwrap().edge_count(), 12);
    b.edges.push([0, 40]);
    assert!(b.view().is_err());
}
