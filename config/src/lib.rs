//! # Config Crate
//!
//! Centralized configuration constants for the pivot engine.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EngineConfig, SLICE_HEIGHT, VOXEL_SIZE};
//!
//! let cfg = EngineConfig::default();
//! assert_eq!(cfg.voxel_size, VOXEL_SIZE);
//! assert_eq!(cfg.slice_height, SLICE_HEIGHT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Agnostic**: Values are in world units of a Z-up scene
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
