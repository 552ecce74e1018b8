//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the validated engine configuration.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_geometry_epsilon_is_small() {
    assert!(GEOMETRY_EPSILON > 0.0);
    assert!(GEOMETRY_EPSILON < 1e-6, "GEOMETRY_EPSILON should be small");
}

#[test]
fn test_degenerate_area_not_above_edge_tolerance() {
    assert!(DEGENERATE_AREA <= DEGENERATE_EDGE_LENGTH_SQ);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_slice_height_finer_than_voxel() {
    assert!(SLICE_HEIGHT < VOXEL_SIZE);
}

#[test]
fn test_max_slice_count_fits_u8() {
    assert_eq!(MAX_SLICE_COUNT, u8::MAX as usize);
}

// =============================================================================
// CLASSIFICATION TESTS
// =============================================================================

#[test]
fn test_flat_bands_are_ordered() {
    assert!(FLAT_MAX_THIN < FLAT_MIN_LONG);
    assert!(FLAT_MIN_LONG / FLAT_MAX_THIN > FLAT_ASPECT_RATIO);
}

#[test]
fn test_wall_shell_is_thin() {
    assert!(WALL_SHELL_FRACTION > 0.0 && WALL_SHELL_FRACTION < 0.5);
}

// =============================================================================
// ENGINE CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_uses_constants() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.voxel_size, VOXEL_SIZE);
    assert_eq!(cfg.slice_height, SLICE_HEIGHT);
    assert_eq!(cfg.wire_growth_factor, WIRE_GROWTH_FACTOR);
}

#[test]
fn test_config_rejects_invalid_values() {
    assert_eq!(
        EngineConfig::new(-1.0, 0.02, 0.4).unwrap_err(),
        ConfigError::InvalidVoxelSize(-1.0)
    );
    assert!(matches!(
        EngineConfig::new(0.03, f64::NAN, 0.4),
        Err(ConfigError::InvalidSliceHeight(_))
    ));
    assert_eq!(
        EngineConfig::new(0.03, 0.02, 1.5).unwrap_err(),
        ConfigError::InvalidGrowthFactor(1.5)
    );
}

#[test]
fn test_config_error_display() {
    let message = ConfigError::InvalidSliceHeight(0.0).to_string();
    assert!(message.contains("slice_height"));
}
