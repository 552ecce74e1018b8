//! # Voxel Map
//!
//! Buckets vertices into a uniform grid and summarizes each populated cell
//! with its centroid, average facing, and local principal axes.
//!
//! ## Algorithm Overview
//!
//! 1. Key every vertex by `floor(p / voxel_size)`
//! 2. For every cell, average member positions (and normals, if supplied)
//! 3. For cells with enough members, eigen-decompose the member covariance

use std::collections::HashMap;

use config::constants::MIN_COVARIANCE_SAMPLES;
use tracing::debug;

use crate::core::Vec3;
use crate::linalg::{covariance3, principal_axes3, PrincipalAxes3};
use crate::mesh::MeshView;

/// Offsets of the six face-adjacent cells.
pub const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Integer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelKey {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelKey {
    /// Creates a key from integer coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the cell containing `p`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_engine::core::Vec3;
    /// use pivot_engine::voxel::VoxelKey;
    ///
    /// let key = VoxelKey::from_point(Vec3::new(0.05, -0.01, 0.0), 0.03);
    /// assert_eq!(key, VoxelKey::new(1, -1, 0));
    /// ```
    pub fn from_point(p: Vec3, voxel_size: f64) -> Self {
        let cell = (p / voxel_size).floor();
        Self::new(cell.x as i32, cell.y as i32, cell.z as i32)
    }

    /// Returns the key shifted by the given cell offsets.
    pub fn offset(self, (dx, dy, dz): (i32, i32, i32)) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }

    /// Returns the six face-adjacent keys.
    pub fn face_neighbors(self) -> [VoxelKey; 6] {
        FACE_OFFSETS.map(|o| self.offset(o))
    }
}

/// Summary of one populated cell.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelData {
    /// Indices of the member vertices, in input order.
    pub vertices: Vec<u32>,
    /// Mean member position.
    pub centroid: Vec3,
    /// Mean member normal; zero when the mesh carries no normals.
    pub facing: Vec3,
    /// Principal axes of the member covariance.
    pub principal: Option<PrincipalAxes3>,
}

impl VoxelData {
    /// Share of `λ1 + λ2` carried by the leading eigenvalue.
    ///
    /// `None` when the covariance was not computed or is degenerate.
    pub fn anisotropy(&self) -> Option<f64> {
        let [l1, l2, _] = self.principal?.values;
        let sum = l1 + l2;
        (sum > 0.0).then(|| l1 / sum)
    }
}

/// Hash map of populated cells for one object.
#[derive(Debug, Clone)]
pub struct VoxelMap {
    cells: HashMap<VoxelKey, VoxelData>,
}

impl VoxelMap {
    /// Buckets the vertices of `mesh` and computes per-cell statistics.
    pub fn build(mesh: &MeshView<'_>, voxel_size: f64) -> Self {
        let vertices = mesh.vertices();
        let mut members: HashMap<VoxelKey, Vec<u32>> = HashMap::new();
        for (i, &p) in vertices.iter().enumerate() {
            members
                .entry(VoxelKey::from_point(p, voxel_size))
                .or_default()
                .push(i as u32);
        }

        let cells: HashMap<VoxelKey, VoxelData> = members
            .into_iter()
            .map(|(key, indices)| {
                let data = summarize(vertices, mesh.normals(), indices);
                (key, data)
            })
            .collect();

        debug!(
            vertices = vertices.len(),
            cells = cells.len(),
            voxel_size,
            "Built voxel map"
        );

        Self { cells }
    }

    /// Returns the cell at `key`, if populated.
    pub fn get(&self, key: &VoxelKey) -> Option<&VoxelData> {
        self.cells.get(key)
    }

    /// Number of populated face neighbors of `key`.
    pub fn populated_neighbors(&self, key: VoxelKey) -> usize {
        key.face_neighbors()
            .iter()
            .filter(|k| self.cells.contains_key(k))
            .count()
    }

    /// Populated keys in ascending order.
    pub fn sorted_keys(&self) -> Vec<VoxelKey> {
        let mut keys: Vec<VoxelKey> = self.cells.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn summarize(vertices: &[Vec3], normals: Option<&[Vec3]>, indices: Vec<u32>) -> VoxelData {
    let points: Vec<Vec3> = indices.iter().map(|&i| vertices[i as usize]).collect();
    let (centroid, cov) = covariance3(&points);

    let facing = normals
        .map(|n| indices.iter().map(|&i| n[i as usize]).sum::<Vec3>() / indices.len() as f64)
        .unwrap_or(Vec3::ZERO);

    let principal = (points.len() >= MIN_COVARIANCE_SAMPLES).then(|| principal_axes3(&cov));

    VoxelData {
        vertices: indices,
        centroid,
        facing,
        principal,
    }
}
