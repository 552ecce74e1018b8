//! Core math types for the pivot engine.
//!
//! Includes vector and quaternion aliases over `glam` plus the small
//! rotation helpers shared by every stage.

pub mod quat;
pub mod vec2;
pub mod vec3;

pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::{Axis, Vec3};
