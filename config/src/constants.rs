//! # Configuration Constants
//!
//! Centralized constants for the pivot engine. All tolerances, grid sizes,
//! and classifier thresholds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sampling**: Voxel and slice resolution
//! - **Wire Detection**: Thresholds for thin appendage detection
//! - **Classification**: Surface decision thresholds
//! - **Runtime Configuration**: Validated [`EngineConfig`]

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for coordinate comparisons against slice planes.
///
/// # Example
///
/// ```rust
/// use config::constants::GEOMETRY_EPSILON;
///
/// let plane: f64 = 0.02;
/// let z = 0.02 + 1e-12;
/// assert!((z - plane).abs() <= GEOMETRY_EPSILON);
/// ```
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Squared length below which an edge or vector is considered degenerate.
///
/// Hull edges shorter than this contribute no candidate direction.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_EDGE_LENGTH_SQ;
///
/// let (dx, dy) = (1e-5, 0.0);
/// assert!(dx * dx + dy * dy <= DEGENERATE_EDGE_LENGTH_SQ);
/// ```
pub const DEGENERATE_EDGE_LENGTH_SQ: f64 = 1e-8;

/// Z rise below which an edge is treated as horizontal and never produces
/// a slice-plane intersection.
pub const MIN_EDGE_RISE: f64 = 1e-8;

/// Polygon area below which a slice polygon is skipped.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA;
///
/// assert!(1e-12 < DEGENERATE_AREA);
/// ```
pub const DEGENERATE_AREA: f64 = 1e-9;

/// Tolerance (radians) when deduplicating candidate hull edge angles.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGLE_DEDUP_TOLERANCE;
///
/// let a = 0.5_f64;
/// let b = a + 1e-5;
/// assert!((a - b).abs() < ANGLE_DEDUP_TOLERANCE);
/// ```
pub const ANGLE_DEDUP_TOLERANCE: f64 = 1e-4;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Edge length of a voxel cell in world units.
///
/// # Example
///
/// ```rust
/// use config::constants::VOXEL_SIZE;
///
/// let key = (0.07_f64 / VOXEL_SIZE).floor() as i32;
/// assert_eq!(key, 2);
/// ```
pub const VOXEL_SIZE: f64 = 0.03;

/// Thickness of one horizontal slice in world units.
///
/// # Example
///
/// ```rust
/// use config::constants::SLICE_HEIGHT;
///
/// let count = (0.1_f64 / SLICE_HEIGHT).ceil() as usize;
/// assert_eq!(count, 5);
/// ```
pub const SLICE_HEIGHT: f64 = 0.02;

/// Upper bound on the number of slices per object.
///
/// Taller objects get a proportionally thicker slice instead.
pub const MAX_SLICE_COUNT: usize = 255;

/// Minimum number of voxel members required before a covariance is computed.
pub const MIN_COVARIANCE_SAMPLES: usize = 3;

// =============================================================================
// WIRE DETECTION CONSTANTS
// =============================================================================

/// Largest average facing magnitude a wire voxel may have.
///
/// Double-sided strands have normals that cancel out.
pub const WIRE_MAX_FACING_LENGTH: f64 = 0.25;

/// Fraction of `λ1 + λ2` the leading eigenvalue must exceed for a voxel to
/// be considered line-like.
///
/// # Example
///
/// ```rust
/// use config::constants::WIRE_ANISOTROPY_RATIO;
///
/// let (l1, l2) = (0.9, 0.05);
/// assert!(l1 > WIRE_ANISOTROPY_RATIO * (l1 + l2));
/// ```
pub const WIRE_ANISOTROPY_RATIO: f64 = 0.85;

/// Maximum number of populated face neighbors for a wire voxel.
pub const WIRE_MAX_NEIGHBORS: usize = 4;

/// Wire detection only runs when guessed vertices are fewer than
/// `vertex_count / WIRE_MAX_GUESS_FRACTION_DIVISOR`.
pub const WIRE_MAX_GUESS_FRACTION_DIVISOR: usize = 6;

/// Flood-fill layer cap as a fraction of the estimated fan-out density.
pub const WIRE_GROWTH_FACTOR: f64 = 0.4;

/// Minimum sample count before IQR outlier filtering is applied.
pub const IQR_MIN_SAMPLES: usize = 4;

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================

/// Fraction of the object height treated as the base (or top) contact band.
pub const BASE_BAND_FACTOR: f64 = 0.05;

/// Maximum ratio of mean cross-section to base footprint for Ground objects.
pub const GROUND_RATIO_MAX: f64 = 4.0;

/// Minimum interior slice area for a Ground object.
pub const GROUND_MIN_CROSS_SECTION: f64 = 15e-5;

/// Maximum height to narrowest footprint extent ratio for Ground objects.
///
/// # Example
///
/// ```rust
/// use config::constants::GROUND_MAX_SLENDERNESS;
///
/// // A 1.5 tall slab that is 2cm deep would tip over.
/// assert!(1.5 / 0.02 > GROUND_MAX_SLENDERNESS);
/// ```
pub const GROUND_MAX_SLENDERNESS: f64 = 10.0;

/// Long to thin extent ratio above which the middle profile counts as flat.
pub const FLAT_ASPECT_RATIO: f64 = 2.5;

/// Thin extent must stay below this for a flat object.
pub const FLAT_MAX_THIN: f64 = 0.08;

/// Long extent must exceed this for a flat object.
pub const FLAT_MIN_LONG: f64 = 0.3;

/// Height fraction above which vertex mass is weighed for flat objects.
///
/// Vertices in the upper 5/8 of the height are counted.
pub const FLAT_UPPER_FRACTION: f64 = 0.375;

/// Thickness of a lateral wall shell as a fraction of the extent.
pub const WALL_SHELL_FRACTION: f64 = 0.01;

/// Maximum ratio of full face area to the largest shell face area.
pub const WALL_RATIO_MAX: f64 = 10.0;

/// Footprint to slice-box area ratio marking a slice as part of a stand.
pub const STAND_AREA_RATIO: f64 = 5.0;

/// Top slice offset, relative to the largest footprint extent, needed to
/// snap toward the high side.
pub const HIGH_OFFSET_FRACTION: f64 = 0.1;

/// Largest footprint extent of a small object.
pub const SMALL_OBJECT_MAX_EXTENT: f64 = 0.5;

/// Long to short footprint ratio below which an object is squarish.
pub const SQUARISH_RATIO: f64 = 1.25;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Tunable engine parameters with validated construction.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// let cfg = EngineConfig::default();
/// assert!(cfg.voxel_size > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Voxel cell edge length used by wire detection.
    pub voxel_size: f64,
    /// Requested slice thickness for the COG profile.
    pub slice_height: f64,
    /// Flood-fill layer cap as a fraction of fan-out density.
    pub wire_growth_factor: f64,
}

impl EngineConfig {
    /// Builds a configuration, rejecting non-positive or non-finite sizes.
    ///
    /// # Examples
    /// ```
    /// use config::constants::EngineConfig;
    /// let cfg = EngineConfig::new(0.05, 0.01, 0.4).expect("valid config");
    /// assert_eq!(cfg.slice_height, 0.01);
    /// assert!(EngineConfig::new(0.0, 0.01, 0.4).is_err());
    /// ```
    pub fn new(
        voxel_size: f64,
        slice_height: f64,
        wire_growth_factor: f64,
    ) -> Result<Self, ConfigError> {
        if !(voxel_size.is_finite() && voxel_size > 0.0) {
            return Err(ConfigError::InvalidVoxelSize(voxel_size));
        }
        if !(slice_height.is_finite() && slice_height > 0.0) {
            return Err(ConfigError::InvalidSliceHeight(slice_height));
        }
        if !(wire_growth_factor > 0.0 && wire_growth_factor <= 1.0) {
            return Err(ConfigError::InvalidGrowthFactor(wire_growth_factor));
        }
        Ok(Self {
            voxel_size,
            slice_height,
            wire_growth_factor,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            voxel_size: VOXEL_SIZE,
            slice_height: SLICE_HEIGHT,
            wire_growth_factor: WIRE_GROWTH_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the voxel size is zero, negative, or not finite.
    InvalidVoxelSize(f64),
    /// Raised when the slice height is zero, negative, or not finite.
    InvalidSliceHeight(f64),
    /// Raised when the growth factor falls outside `(0, 1]`.
    InvalidGrowthFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVoxelSize(value) => {
                write!(f, "voxel_size must be positive and finite: {value}")
            }
            ConfigError::InvalidSliceHeight(value) => {
                write!(f, "slice_height must be positive and finite: {value}")
            }
            ConfigError::InvalidGrowthFactor(value) => {
                write!(f, "wire_growth_factor must be in (0, 1]: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
