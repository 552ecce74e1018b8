//! # Adjacency
//!
//! Per-vertex neighbor lists built from a wireframe edge list.
//!
//! ## Algorithm Overview
//!
//! 1. Count the degree of every vertex to size each list exactly
//! 2. Push both directions of every edge
//! 3. Sort and deduplicate each list

use crate::mesh::MeshView;

/// Sorted, deduplicated neighbor lists indexed by vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<u32>>,
}

impl Adjacency {
    /// Builds the adjacency of `mesh`. Self-loop edges are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_engine::adjacency::Adjacency;
    /// use pivot_engine::core::Vec3;
    /// use pivot_engine::mesh::MeshView;
    ///
    /// let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
    /// let mesh = MeshView::new(&vertices, &[[0, 1], [1, 0], [1, 2]]).unwrap();
    /// let adjacency = Adjacency::build(&mesh);
    /// assert_eq!(adjacency.neighbors(1), &[0, 2]);
    /// ```
    pub fn build(mesh: &MeshView<'_>) -> Self {
        let mut degree = vec![0usize; mesh.vertex_count()];
        for edge in mesh.edges().iter().filter(|e| !e.is_loop()) {
            degree[edge.a().index()] += 1;
            degree[edge.b().index()] += 1;
        }

        let mut neighbors: Vec<Vec<u32>> =
            degree.into_iter().map(Vec::with_capacity).collect();
        for edge in mesh.edges().iter().filter(|e| !e.is_loop()) {
            neighbors[edge.a().index()].push(edge.b().raw());
            neighbors[edge.b().index()].push(edge.a().raw());
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self { neighbors }
    }

    /// Returns the neighbors of vertex `index`.
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[u32] {
        &self.neighbors[index]
    }

    /// Returns the number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests;
