//! # Wireframe Primitives
//!
//! Builder for flat vertex and edge buffers made of simple parts: box
//! outlines, planar grids, and vertex chains.
//!
//! ```rust
//! use pivot_engine::core::Vec3;
//! use pivot_engine::primitives::WireframeBuilder;
//!
//! let mut b = WireframeBuilder::new();
//! b.add_box(Vec3::ZERO, Vec3::ONE);
//! let wire = b.add_strand(Vec3::new(0.5, 0.5, 1.1), Vec3::Z * 0.1, 4, Some(7));
//! assert_eq!(b.vertices.len(), 12);
//! assert_eq!(wire, 8..12);
//! assert_eq!(b.edges.len(), 12 + 3 + 1);
//! ```

use std::ops::Range;

use crate::core::vec3::rotate_z;
use crate::core::Vec3;
use crate::error::EngineResult;
use crate::mesh::MeshView;

/// Accumulates the vertices and edges of several wireframe parts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WireframeBuilder {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl WireframeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the 8 corners and 12 edges of an axis-aligned box. Returns the
    /// index of its first corner.
    pub fn add_box(&mut self, min: Vec3, max: Vec3) -> u32 {
        let base = self.vertices.len() as u32;
        for i in 0..8u32 {
            self.vertices.push(Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            ));
        }
        for i in 0..8u32 {
            for bit in [1u32, 2, 4] {
                if i & bit == 0 {
                    self.edges.push([base + i, base + (i | bit)]);
                }
            }
        }
        base
    }

    /// Adds an `nx × ny` grid parallel to the XY plane with 4-neighbor
    /// edges, row by row from `origin`.
    pub fn add_grid(&mut self, origin: Vec3, spacing: f64, nx: u32, ny: u32) -> u32 {
        let base = self.vertices.len() as u32;
        for j in 0..ny {
            for i in 0..nx {
                self.vertices.push(
                    origin + Vec3::new(f64::from(i) * spacing, f64::from(j) * spacing, 0.0),
                );
            }
        }
        for j in 0..ny {
            for i in 0..nx {
                let v = base + j * nx + i;
                if i + 1 < nx {
                    self.edges.push([v, v + 1]);
                }
                if j + 1 < ny {
                    self.edges.push([v, v + nx]);
                }
            }
        }
        base
    }

    /// Adds a chain of `count` vertices stepping from `start`, joined to
    /// `anchor` at its first vertex. Returns the chain's index range.
    pub fn add_strand(
        &mut self,
        start: Vec3,
        step: Vec3,
        count: u32,
        anchor: Option<u32>,
    ) -> Range<usize> {
        let base = self.vertices.len() as u32;
        for k in 0..count {
            self.vertices.push(start + step * f64::from(k));
            if k > 0 {
                self.edges.push([base + k - 1, base + k]);
            }
        }
        if let (Some(anchor), true) = (anchor, count > 0) {
            self.edges.push([anchor, base]);
        }
        base as usize..(base + count) as usize
    }

    /// Copy rotated about +Z by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| rotate_z(v, angle)).collect(),
            edges: self.edges.clone(),
        }
    }

    /// Validated view over the accumulated buffers.
    pub fn view(&self) -> EngineResult<MeshView<'_>> {
        MeshView::new(&self.vertices, &self.edges)
    }
}

#[cfg(test)]
mod tests;
