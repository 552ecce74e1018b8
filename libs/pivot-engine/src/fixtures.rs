//! Unit-test helpers on top of [`WireframeBuilder`] and the shared scenes.

use config::constants::SLICE_HEIGHT;

use crate::cog::{compute_cog, CogResult};
pub use crate::core::Vec3;
use crate::mesh::MeshView;
pub use crate::primitives::WireframeBuilder;

mod scenes;

pub use scenes::*;

impl WireframeBuilder {
    pub fn mesh(&self) -> MeshView<'_> {
        self.view().unwrap()
    }

    /// Slice profile at the default slice height.
    pub fn cog(&self) -> CogResult {
        compute_cog(&self.mesh(), SLICE_HEIGHT)
    }
}
