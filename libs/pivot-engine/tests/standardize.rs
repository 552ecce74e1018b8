mod common;

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use common::{bump_plate, l_bracket, small_cube, wall_slab, WireframeBuilder};
use pivot_engine::bbox::BoundingBox3D;
use pivot_engine::core::Vec3;
use pivot_engine::{
    apply_rotation, standardize_mesh, standardize_object_transform, EngineError, MeshView,
    OriginMethod, ShapeClass, StandardizeOptions, Standardization, SurfaceContext, SurfaceType,
};

fn run(scene: &WireframeBuilder) -> Standardization {
    standardize_object_transform(&scene.vertices, &scene.edges).unwrap()
}

fn run_with(scene: &WireframeBuilder, options: StandardizeOptions) -> Standardization {
    let mesh = MeshView::new(&scene.vertices, &scene.edges).unwrap();
    standardize_mesh(&mesh, &options)
}

#[test]
fn plate_with_bump_stands_on_ground_facing_bump() {
    let result = run(&bump_plate());
    assert_eq!(result.surface, SurfaceType::Ground);
    assert_eq!(result.shape, ShapeClass::Ground);
    assert_abs_diff_eq!(result.angle, FRAC_PI_2, epsilon = 1e-9);
    assert_abs_diff_eq!(result.origin.length(), 0.0, epsilon = 1e-9);
}

#[test]
fn rotated_plate_recovers_same_pose() {
    let result = run(&bump_plate().rotated(0.3));
    assert_eq!(result.surface, SurfaceType::Ground);
    assert_abs_diff_eq!(result.angle, FRAC_PI_2 - 0.3, epsilon = 1e-9);
}

#[test]
fn upright_slab_is_wall() {
    let result = run(&wall_slab(false));
    assert_eq!(result.surface, SurfaceType::Wall);
    assert_abs_diff_eq!(result.angle, 0.0, epsilon = 1e-12);
    // Base origin sits on the mounting face.
    assert_abs_diff_eq!(result.origin.y, 0.02, epsilon = 1e-12);
}

#[test]
fn turned_slab_faces_y_after_rotation() {
    let scene = wall_slab(true);
    let result = run(&scene);
    assert_eq!(result.surface, SurfaceType::Wall);
    assert_abs_diff_eq!(result.angle, FRAC_PI_2, epsilon = 1e-9);

    let mut vertices = scene.vertices.clone();
    apply_rotation(&mut vertices, result.rotation);
    let bounds = BoundingBox3D::from_points(vertices).unwrap();
    assert_abs_diff_eq!(bounds.size().y, 0.02, epsilon = 1e-9);
    assert_abs_diff_eq!(bounds.size().x, 0.25, epsilon = 1e-9);
    // Mounting face at the +Y side after rotation.
    assert_abs_diff_eq!(result.origin.y, bounds.max.y, epsilon = 1e-9);
}

#[test]
fn bracket_is_flat_on_ground() {
    let result = run(&l_bracket());
    assert_eq!(result.shape, ShapeClass::Flat);
    assert_eq!(result.surface, SurfaceType::Ground);
}

#[test]
fn small_cube_lands_on_ground() {
    let result = run(&small_cube());
    assert_eq!(result.surface, SurfaceType::Ground);
    // Symmetric and small: half turn.
    assert_abs_diff_eq!(result.angle.abs(), PI, epsilon = 1e-9);
}

#[test]
fn volume_origin_is_rotated_cog() {
    let options = StandardizeOptions::default().with_origin(OriginMethod::Volume);
    let result = run_with(&small_cube(), options);
    assert_abs_diff_eq!(result.origin.x, -0.011, epsilon = 1e-9);
    assert_abs_diff_eq!(result.origin.y, -0.011, epsilon = 1e-9);
    assert_abs_diff_eq!(result.origin.z, 0.011, epsilon = 1e-9);
}

#[test]
fn volume_origin_leans_toward_bump() {
    let options = StandardizeOptions::default().with_origin(OriginMethod::Volume);
    let result = run_with(&bump_plate(), options);
    // The bump at +X is turned to +Y, and the COG with it.
    assert!(result.origin.y > 0.0);
    assert_abs_diff_eq!(result.origin.x, 0.0, epsilon = 1e-9);
}

#[test]
fn forced_ground_matches_auto_for_ground_object() {
    let forced = run_with(
        &bump_plate(),
        StandardizeOptions::default().with_surface(SurfaceContext::Ground),
    );
    assert_eq!(forced, run(&bump_plate()));
}

#[test]
fn forced_ceiling_uses_top_contact() {
    let options = StandardizeOptions::default().with_surface(SurfaceContext::Ceiling);
    let result = run_with(&wall_slab(false), options);
    assert_eq!(result.surface, SurfaceType::Ceiling);
    assert_abs_diff_eq!(result.angle, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.origin.z, 1.5, epsilon = 1e-12);
}

#[test]
fn out_of_range_edge_is_invalid_geometry() {
    let scene = wall_slab(false);
    let mut edges = scene.edges.clone();
    edges.push([0, 99]);
    match standardize_object_transform(&scene.vertices, &edges) {
        Err(EngineError::InvalidGeometry { message }) => assert!(message.contains("99")),
        other => panic!("expected invalid geometry, got {other:?}"),
    }
}

#[test]
fn non_finite_vertex_is_invalid_geometry() {
    let mut scene = wall_slab(false);
    scene.vertices[3].z = f64::NAN;
    assert!(matches!(
        standardize_object_transform(&scene.vertices, &scene.edges),
        Err(EngineError::InvalidGeometry { .. })
    ));
}

#[test]
fn result_serializes_for_bridge() {
    let result = run(&wall_slab(false));
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["surface"], "WALL");
    assert_eq!(json["shape"], "WALL");
    let back: Standardization = serde_json::from_value(json).unwrap();
    assert_eq!(back.surface, result.surface);
    assert_abs_diff_eq!(back.origin.y, result.origin.y, epsilon = 1e-12);
}

#[test]
fn empty_mesh_is_identity_at_origin() {
    let result = standardize_object_transform(&[], &[]).unwrap();
    assert_eq!(result, Standardization::identity(Vec3::ZERO));
}
