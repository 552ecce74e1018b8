//! Named wireframe scenes. Shared by unit tests and the integration tests.

use std::ops::Range;

use super::{Vec3, WireframeBuilder};

/// A 1.0 × 0.6 × 0.02 plate with a 0.1 cube standing near its +X end.
pub fn bump_plate() -> WireframeBuilder {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::new(-0.5, -0.3, 0.0), Vec3::new(0.5, 0.3, 0.02));
    b.add_box(Vec3::new(0.35, -0.05, 0.02), Vec3::new(0.45, 0.05, 0.12));
    b
}

/// An upright 1.5 tall slab; thin along Y, or along X when `turned`.
pub fn wall_slab(turned: bool) -> WireframeBuilder {
    let size = if turned {
        Vec3::new(0.02, 0.25, 1.5)
    } else {
        Vec3::new(0.25, 0.02, 1.5)
    };
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, size);
    b
}

/// A tall thin stem on a short foot plate.
pub fn l_bracket() -> WireframeBuilder {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::ZERO, Vec3::new(0.5, 0.04, 0.6));
    b.add_box(Vec3::ZERO, Vec3::new(0.5, 0.3, 0.04));
    b
}

/// A unit square at z = 0.5 joined to an apex below its centre at z = 0.
pub fn inverted_pyramid() -> WireframeBuilder {
    let mut b = WireframeBuilder::new();
    b.add_grid(Vec3::new(0.0, 0.0, 0.5), 1.0, 2, 2);
    b.vertices.push(Vec3::new(0.5, 0.5, 0.0));
    b.edges.extend([[0, 4], [1, 4], [2, 4], [3, 4]]);
    b
}

/// A 0.02 cube that fits inside one voxel.
pub fn small_cube() -> WireframeBuilder {
    let mut b = WireframeBuilder::new();
    b.add_box(Vec3::splat(0.001), Vec3::splat(0.021));
    b
}

/// Index of the grid vertex at (0.5, 0.5) in [`grid_plate`].
pub const GRID_PLATE_CENTER: u32 = 10 * 21 + 10;

/// Unit 21 × 21 grid with 5 cm spacing at z = 0.
pub fn grid_plate() -> WireframeBuilder {
    let mut b = WireframeBuilder::new();
    b.add_grid(Vec3::ZERO, 0.05, 21, 21);
    b
}

/// [`grid_plate`] with a 60-vertex strand rising from its centre vertex.
pub fn plate_with_strand() -> (WireframeBuilder, Range<usize>) {
    strand_from_plate(Vec3::new(0.515, 0.515, 0.005), Vec3::new(0.0, 0.0, 0.01))
}

/// [`grid_plate`] with a 60-vertex strand hanging below its centre vertex.
pub fn plate_with_hanging_strand() -> (WireframeBuilder, Range<usize>) {
    strand_from_plate(Vec3::new(0.515, 0.515, -0.005), Vec3::new(0.0, 0.0, -0.01))
}

fn strand_from_plate(start: Vec3, step: Vec3) -> (WireframeBuilder, Range<usize>) {
    let mut b = grid_plate();
    let strand = b.add_strand(start, step, 60, Some(GRID_PLATE_CENTER));
    (b, strand)
}
