//! # Pivot Engine
//!
//! Orientation standardization and surface classification for wireframe
//! meshes given as flat vertex and edge buffers in Z-up world space.
//!
//! ## Architecture
//!
//! ```text
//! mesh (validated) → adjacency + voxels → wire mask
//!                  → hull → orient (forward angle)
//!                  → cog (slice profile) → classify
//!                  → engine (rotation, origin, surface)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pivot_engine::core::Vec3;
//! use pivot_engine::{standardize_object_transform, SurfaceType};
//!
//! // A 1 × 0.6 × 0.2 box lying on the ground.
//! let vertices: Vec<Vec3> = (0..8u32)
//!     .map(|i| Vec3::new(
//!         (i & 1) as f64,
//!         0.6 * ((i >> 1) & 1) as f64,
//!         0.2 * ((i >> 2) & 1) as f64,
//!     ))
//!     .collect();
//! let edges = [
//!     [0, 1], [2, 3], [4, 5], [6, 7], [0, 2], [1, 3],
//!     [4, 6], [5, 7], [0, 4], [1, 5], [2, 6], [3, 7],
//! ];
//! let result = standardize_object_transform(&vertices, &edges).unwrap();
//! assert_eq!(result.surface, SurfaceType::Ground);
//! ```

pub mod adjacency;
pub mod bbox;
pub mod classify;
pub mod cog;
pub mod core;
pub mod engine;
pub mod error;
pub mod hull;
pub mod linalg;
pub mod mesh;
pub mod orient;
pub mod primitives;
pub mod stats;
pub mod voxel;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use classify::{ShapeClass, SurfaceContext, SurfaceType};
pub use config::constants::EngineConfig;
pub use engine::{
    apply_rotation, group_objects, prepare_object_batch, standardize_mesh,
    standardize_object_transform, ObjectTransform, OriginMethod, StandardizeOptions,
    Standardization,
};
pub use error::{EngineError, EngineResult};
pub use mesh::MeshView;
