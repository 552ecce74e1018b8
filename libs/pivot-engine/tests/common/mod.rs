//! Wireframe scenes shared by the integration tests.

#![allow(dead_code)]

pub use pivot_engine::core::Vec3;
pub use pivot_engine::primitives::WireframeBuilder;

#[path = "../../src/fixtures/scenes.rs"]
mod scenes;

pub use scenes::*;
