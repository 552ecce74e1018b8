//! # Classification Tests
//!
//! Decision order, forced contexts, and quarter-turn bookkeeping.

use super::*;
use crate::fixtures::{bump_plate, inverted_pyramid, l_bracket, wall_slab, WireframeBuilder};
use approx::assert_abs_diff_eq;

fn classify_builder(b: &WireframeBuilder, context: SurfaceContext) -> Classification {
    let cog = b.cog();
    let profile = ShapeProfile::new(&b.vertices, &cog).unwrap();
    classify(&profile, context)
}

// =============================================================================
// FRONT AXIS TESTS
// =============================================================================

#[test]
fn test_front_axis_wraps() {
    let mut front = FrontAxis::new(3);
    front.turn(2);
    assert_eq!(front.turns(), 1);
    assert_abs_diff_eq!(front.angle(), FRAC_PI_2);
    assert_eq!(FrontAxis::new(6).turns(), 2);
}

#[test]
fn test_turns_toward_each_direction() {
    assert_eq!(turns_toward(Vec2::Y, Vec2::Y, &ALL_TURNS), Some(0));
    assert_eq!(turns_toward(Vec2::X, Vec2::Y, &ALL_TURNS), Some(1));
    assert_eq!(turns_toward(Vec2::NEG_Y, Vec2::Y, &ALL_TURNS), Some(2));
    assert_eq!(turns_toward(Vec2::NEG_X, Vec2::Y, &ALL_TURNS), Some(3));
}

#[test]
fn test_turns_toward_tie_keeps_first_option() {
    assert_eq!(turns_toward(Vec2::new(1.0, 1.0), Vec2::Y, &ALL_TURNS), Some(0));
    assert_eq!(turns_toward(Vec2::Y, Vec2::Y, &[]), None);
}

#[test]
fn test_snap_sees_current_turns() {
    let mut front = FrontAxis::new(1);
    // +X already shows as +Y after one turn.
    assert!(front.snap(Vec2::X, Vec2::Y, &ALL_TURNS));
    assert_eq!(front.turns(), 1);

    assert!(!front.snap(Vec2::ZERO, Vec2::Y, &ALL_TURNS));
    assert_eq!(front.turns(), 1);
}

// =============================================================================
// ENUM TESTS
// =============================================================================

#[test]
fn test_shape_surface_mapping() {
    assert_eq!(ShapeClass::Flat.surface(), SurfaceType::Ground);
    assert_eq!(ShapeClass::Wall.surface(), SurfaceType::Wall);
    assert_eq!(SurfaceType::Ground.code(), 0);
    assert_eq!(SurfaceType::Ceiling.code(), 2);
}

#[test]
fn test_serialized_names() {
    assert_eq!(
        serde_json::to_string(&SurfaceType::Ceiling).unwrap(),
        "\"CEILING\""
    );
    assert_eq!(serde_json::to_string(&ShapeClass::Flat).unwrap(), "\"FLAT\"");
    let context: SurfaceContext = serde_json::from_str("\"WALL\"").unwrap();
    assert_eq!(context, SurfaceContext::Wall);
    assert_eq!(SurfaceContext::default(), SurfaceContext::Auto);
}

// =============================================================================
// PROFILE TESTS
// =============================================================================

#[test]
fn test_profile_bands_and_contacts() {
    let b = bump_plate();
    let cog = b.cog();
    let profile = ShapeProfile::new(&b.vertices, &cog).unwrap();

    assert_eq!(profile.interior_slices().len(), cog.slices.len() - 2);
    let (lo, hi) = profile.base_band();
    assert_abs_diff_eq!(lo, 0.0);
    assert_abs_diff_eq!(hi, 0.006, epsilon = 1e-12);

    let base = profile.base_contact();
    assert_abs_diff_eq!(base.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(base.z, 0.0);

    let top = profile.top_contact();
    assert_abs_diff_eq!(top.x, 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(top.z, 0.12);
}

#[test]
fn test_profile_requires_vertices() {
    let b = WireframeBuilder::new();
    let cog = b.cog();
    assert!(ShapeProfile::new(&b.vertices, &cog).is_none());
}

// =============================================================================
// DECISION TESTS
// =============================================================================

#[test]
fn test_bump_plate_is_ground_facing_bump() {
    let result = classify_builder(&bump_plate(), SurfaceContext::Auto);
    assert_eq!(result.shape, ShapeClass::Ground);
    // The stand is on +X, turned to +Y.
    assert_eq!(result.front.turns(), 1);
}

#[test]
fn test_slab_is_wall() {
    let result = classify_builder(&wall_slab(false), SurfaceContext::Auto);
    assert_eq!(result.shape, ShapeClass::Wall);
    assert_eq!(result.front.turns(), 0);
    assert_abs_diff_eq!(result.contact.y, 0.02);
    assert_abs_diff_eq!(result.contact.z, 0.75, epsilon = 1e-12);
}

#[test]
fn test_turned_slab_is_wall_with_one_turn() {
    let result = classify_builder(&wall_slab(true), SurfaceContext::Auto);
    assert_eq!(result.shape, ShapeClass::Wall);
    assert_eq!(result.front.turns(), 1);
}

#[test]
fn test_bracket_is_flat() {
    let result = classify_builder(&l_bracket(), SurfaceContext::Auto);
    assert_eq!(result.shape, ShapeClass::Flat);
    assert_eq!(result.shape.surface(), SurfaceType::Ground);
}

#[test]
fn test_inverted_pyramid_is_ceiling() {
    let result = classify_builder(&inverted_pyramid(), SurfaceContext::Auto);
    assert_eq!(result.shape, ShapeClass::Ceiling);
    assert_eq!(result.front.turns(), 0);
    assert_abs_diff_eq!(result.contact.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(result.contact.z, 0.5);
}

// =============================================================================
// FORCED CONTEXT TESTS
// =============================================================================

#[test]
fn test_forced_wall_uses_widest_shell() {
    let result = classify_builder(&bump_plate(), SurfaceContext::Wall);
    assert_eq!(result.shape, ShapeClass::Wall);
    assert_eq!(result.front.turns(), 0);
    assert_abs_diff_eq!(result.contact.y, 0.3);
    assert_abs_diff_eq!(result.contact.z, 0.01, epsilon = 1e-12);
}

#[test]
fn test_forced_ceiling_keeps_front() {
    let result = classify_builder(&bump_plate(), SurfaceContext::Ceiling);
    assert_eq!(result.shape, ShapeClass::Ceiling);
    assert_eq!(result.front.turns(), 0);
    assert_abs_diff_eq!(result.contact.z, 0.12);
}

#[test]
fn test_forced_ground_refines_slab() {
    let result = classify_builder(&wall_slab(false), SurfaceContext::Ground);
    assert_eq!(result.shape, ShapeClass::Ground);
    // Small and symmetric: no dense side, then the half turn.
    assert_eq!(result.front.turns(), 2);
    assert_abs_diff_eq!(result.contact.z, 0.0);
}
