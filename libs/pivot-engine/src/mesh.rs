//! # Mesh View
//!
//! Validated read-only view over a vertex buffer and its wireframe edges.
//!
//! Edge indices are range-checked once at construction and stored as
//! [`VertexId`]s, so every later stage can index vertex buffers directly.

use std::borrow::Cow;

use crate::core::vec3::rotate_z;
use crate::core::Vec3;
use crate::error::{EngineError, EngineResult};

/// Index of a vertex that is known to be in range for its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

impl VertexId {
    /// Returns the index as `usize` for slice access.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw index.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// An undirected edge between two validated vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// First endpoint.
    #[inline]
    pub fn a(self) -> VertexId {
        self.a
    }

    /// Second endpoint.
    #[inline]
    pub fn b(self) -> VertexId {
        self.b
    }

    /// Returns true when both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(self) -> bool {
        self.a == self.b
    }
}

/// Vertices, edges, and optional per-vertex normals of one object.
///
/// # Example
///
/// ```rust
/// use pivot_engine::core::Vec3;
/// use pivot_engine::mesh::MeshView;
///
/// let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let mesh = MeshView::new(&vertices, &[[0, 1], [1, 2]]).unwrap();
/// assert_eq!(mesh.edge_count(), 2);
/// assert!(MeshView::new(&vertices, &[[0, 3]]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MeshView<'a> {
    vertices: Cow<'a, [Vec3]>,
    edges: Vec<Edge>,
    normals: Option<Cow<'a, [Vec3]>>,
}

impl<'a> MeshView<'a> {
    /// Validates raw index pairs against `vertices` and builds a view.
    pub fn new(vertices: &'a [Vec3], edges: &[[u32; 2]]) -> EngineResult<Self> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(EngineError::invalid_geometry(format!(
                "vertex {index} has a non-finite coordinate"
            )));
        }

        let count = vertices.len();
        let checked = |raw: u32, edge: usize| -> EngineResult<VertexId> {
            if (raw as usize) < count {
                Ok(VertexId(raw))
            } else {
                Err(EngineError::invalid_geometry(format!(
                    "edge {edge} references vertex {raw} but the mesh has {count} vertices"
                )))
            }
        };

        let edges = edges
            .iter()
            .enumerate()
            .map(|(i, &[a, b])| {
                Ok(Edge {
                    a: checked(a, i)?,
                    b: checked(b, i)?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            vertices: Cow::Borrowed(vertices),
            edges,
            normals: None,
        })
    }

    /// Attaches per-vertex normals; the buffer must match the vertex count.
    pub fn with_normals(mut self, normals: &'a [Vec3]) -> EngineResult<Self> {
        if normals.len() != self.vertices.len() {
            return Err(EngineError::invalid_geometry(format!(
                "{} normals supplied for {} vertices",
                normals.len(),
                self.vertices.len()
            )));
        }
        if normals.iter().any(|n| !n.is_finite()) {
            return Err(EngineError::invalid_geometry("non-finite vertex normal"));
        }
        self.normals = Some(Cow::Borrowed(normals));
        Ok(self)
    }

    /// Returns an owned copy rotated about +Z by `angle` radians.
    pub fn rotated_about_z(&self, angle: f64) -> MeshView<'static> {
        let rotate_all = |points: &[Vec3]| -> Vec<Vec3> {
            points.iter().map(|&p| rotate_z(p, angle)).collect()
        };
        MeshView {
            vertices: Cow::Owned(rotate_all(&self.vertices)),
            edges: self.edges.clone(),
            normals: self.normals.as_deref().map(|n| Cow::Owned(rotate_all(n))),
        }
    }

    /// Returns an owned copy holding only the vertices for which `keep` is
    /// true, in their original order. Edges with a dropped endpoint are
    /// removed and the rest are reindexed.
    pub fn retain_vertices(&self, keep: impl Fn(usize) -> bool) -> MeshView<'static> {
        let mut remap: Vec<Option<VertexId>> = vec![None; self.vertices.len()];
        let mut vertices = Vec::new();
        for (i, &p) in self.vertices.iter().enumerate() {
            if keep(i) {
                remap[i] = Some(VertexId(vertices.len() as u32));
                vertices.push(p);
            }
        }

        let edges = self
            .edges
            .iter()
            .filter_map(|e| {
                Some(Edge {
                    a: remap[e.a.index()]?,
                    b: remap[e.b.index()]?,
                })
            })
            .collect();
        let normals = self.normals.as_deref().map(|normals| {
            Cow::Owned(
                normals
                    .iter()
                    .zip(&remap)
                    .filter(|(_, id)| id.is_some())
                    .map(|(&n, _)| n)
                    .collect(),
            )
        });

        MeshView {
            vertices: Cow::Owned(vertices),
            edges,
            normals,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the validated edges.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the vertex normals, if supplied.
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    /// Returns the position of a vertex.
    #[inline]
    pub fn position(&self, id: VertexId) -> Vec3 {
        self.vertices[id.index()]
    }
}
