//! # Wire Detection
//!
//! Finds thin wire-like appendages (rails, cables, strands) so they can be
//! excluded from silhouette and footprint analysis.
//!
//! ## Algorithm Overview
//!
//! 1. Guess wire voxels: low average facing, line-like covariance, and few
//!    populated face neighbors. Guesses without a guessed neighbor are
//!    dropped.
//! 2. Seed the mask with every vertex of a guessed voxel while counting how
//!    many fresh neighbors each voxel touches.
//! 3. The IQR-filtered mean of those counts is the fan-out density.
//! 4. Breadth-first growth from each boundary group of the mask. A layer
//!    larger than `density * growth_factor` stops that group.

use std::collections::{HashSet, VecDeque};

use config::constants::{
    WIRE_ANISOTROPY_RATIO, WIRE_MAX_FACING_LENGTH, WIRE_MAX_GUESS_FRACTION_DIVISOR,
    WIRE_MAX_NEIGHBORS,
};
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::stats::{exclude_outliers_iqr, mean};
use crate::voxel::{VoxelData, VoxelKey, VoxelMap};

/// Per-vertex exclusion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireMask {
    excluded: Vec<bool>,
}

impl WireMask {
    /// A mask that excludes nothing.
    pub fn none(vertex_count: usize) -> Self {
        Self {
            excluded: vec![false; vertex_count],
        }
    }

    /// Wraps caller-provided per-vertex flags.
    pub fn from_flags(excluded: Vec<bool>) -> Self {
        Self { excluded }
    }

    /// Returns true if vertex `index` belongs to a wire. Indices past the
    /// mask are kept.
    #[inline]
    pub fn is_excluded(&self, index: usize) -> bool {
        self.excluded.get(index).copied().unwrap_or(false)
    }

    /// Number of excluded vertices.
    pub fn excluded_count(&self) -> usize {
        self.excluded.iter().filter(|&&e| e).count()
    }

    /// Returns true if no vertex is excluded.
    pub fn is_empty(&self) -> bool {
        !self.excluded.contains(&true)
    }
}

fn is_wire_like(cell: &VoxelData, populated_neighbors: usize) -> bool {
    cell.facing.length_squared() < WIRE_MAX_FACING_LENGTH * WIRE_MAX_FACING_LENGTH
        && cell
            .anisotropy()
            .is_some_and(|ratio| ratio > WIRE_ANISOTROPY_RATIO)
        && populated_neighbors <= WIRE_MAX_NEIGHBORS
}

/// Returns the guessed wire voxels in ascending key order.
pub fn guess_wire_voxels(map: &VoxelMap) -> Vec<VoxelKey> {
    let candidates: Vec<VoxelKey> = map
        .sorted_keys()
        .into_iter()
        .filter(|key| {
            map.get(key)
                .is_some_and(|cell| is_wire_like(cell, map.populated_neighbors(*key)))
        })
        .collect();

    let lookup: HashSet<VoxelKey> = candidates.iter().copied().collect();
    candidates
        .into_iter()
        .filter(|key| key.face_neighbors().iter().any(|n| lookup.contains(n)))
        .collect()
}

/// Computes the wire exclusion mask for one object.
///
/// Returns an empty mask when nothing is guessed, or when the guesses cover
/// too large a share of the mesh to be appendages.
pub fn detect_wires(adjacency: &Adjacency, map: &VoxelMap, growth_factor: f64) -> WireMask {
    let vertex_count = adjacency.len();
    let guesses = guess_wire_voxels(map);
    let cells: Vec<&VoxelData> = guesses.iter().filter_map(|k| map.get(k)).collect();

    let guessed_vertices: usize = cells.iter().map(|c| c.vertices.len()).sum();
    if cells.is_empty() || guessed_vertices >= vertex_count / WIRE_MAX_GUESS_FRACTION_DIVISOR {
        debug!(
            guessed_voxels = cells.len(),
            guessed_vertices, vertex_count, "No wire exclusion"
        );
        return WireMask::none(vertex_count);
    }

    let mut mask = vec![false; vertex_count];
    let mut touched = vec![false; vertex_count];
    let mut fan_out = Vec::with_capacity(cells.len());
    for cell in &cells {
        let mut fresh = 0u32;
        for &v in &cell.vertices {
            mask[v as usize] = true;
            for &n in adjacency.neighbors(v as usize) {
                let n = n as usize;
                if !mask[n] && !touched[n] {
                    touched[n] = true;
                    fresh += 1;
                }
            }
        }
        fan_out.push(fresh);
    }

    let density = mean(&exclude_outliers_iqr(fan_out));
    let limit = density * growth_factor;

    grow(&mut mask, adjacency, limit);

    let excluded = WireMask { excluded: mask };
    debug!(
        guessed_voxels = cells.len(),
        seeded = guessed_vertices,
        density,
        excluded = excluded.excluded_count(),
        "Wire mask computed"
    );
    excluded
}

/// Connected groups of unmasked vertices that touch the mask.
fn boundary_groups(mask: &[bool], adjacency: &Adjacency) -> Vec<Vec<u32>> {
    let n = mask.len();
    let on_boundary: Vec<bool> = (0..n)
        .map(|v| !mask[v] && adjacency.neighbors(v).iter().any(|&nb| mask[nb as usize]))
        .collect();

    let mut grouped = vec![false; n];
    let mut groups = Vec::new();
    let mut queue = VecDeque::new();
    for start in 0..n {
        if !on_boundary[start] || grouped[start] {
            continue;
        }
        grouped[start] = true;
        queue.push_back(start as u32);
        let mut group = Vec::new();
        while let Some(v) = queue.pop_front() {
            group.push(v);
            for &nb in adjacency.neighbors(v as usize) {
                let i = nb as usize;
                if on_boundary[i] && !grouped[i] {
                    grouped[i] = true;
                    queue.push_back(nb);
                }
            }
        }
        groups.push(group);
    }
    groups
}

fn grow(mask: &mut [bool], adjacency: &Adjacency, limit: f64) {
    let n = mask.len();
    let mut seen = vec![false; n];
    let mut queued = vec![false; n];

    for group in boundary_groups(mask, adjacency) {
        if group.len() as f64 > limit {
            continue;
        }
        for &v in &group {
            seen[v as usize] = true;
        }

        let mut frontier = group.clone();
        let mut group_committed = false;
        loop {
            let mut next = Vec::new();
            for &v in &frontier {
                for &nb in adjacency.neighbors(v as usize) {
                    let i = nb as usize;
                    if !mask[i] && !seen[i] && !queued[i] {
                        queued[i] = true;
                        next.push(nb);
                    }
                }
            }
            for &v in &next {
                queued[v as usize] = false;
            }

            if next.len() as f64 > limit {
                break;
            }
            if !group_committed {
                for &v in &group {
                    mask[v as usize] = true;
                }
                group_committed = true;
            }
            if next.is_empty() {
                break;
            }
            for &v in &next {
                mask[v as usize] = true;
                seen[v as usize] = true;
            }
            frontier = next;
        }
    }
}
