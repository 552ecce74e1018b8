//! # Standardization Engine
//!
//! Entry points used by host bridges. Each object is processed on its own:
//!
//! ```text
//! vertices + edges
//!     → adjacency + voxel map → wire mask
//!     → body: the mesh without wire vertices
//!     → silhouette hull of the body → forward angle
//!     → working frame (body rotated by the forward angle)
//!     → slice profile + COG → classification + quarter turns
//!     → rotation, origin, surface
//! ```
//!
//! Batches are split by per-object counts and evaluated in parallel. The
//! in-place helpers [`group_objects`] and [`apply_rotation`] share the same
//! flat buffer layout.

use std::ops::Range;

use config::constants::EngineConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adjacency::Adjacency;
use crate::classify::{classify, ShapeClass, ShapeProfile, SurfaceContext, SurfaceType};
use crate::cog::compute_cog;
use crate::core::quat::{about_z, normalize_or_identity};
use crate::core::vec2::lexicographic;
use crate::core::vec3::{quarter_turns_z, xy};
use crate::core::{Quat, Vec2, Vec3};
use crate::error::{EngineError, EngineResult};
use crate::hull::monotonic_chain;
use crate::mesh::MeshView;
use crate::orient::forward_angle;
use crate::voxel::VoxelMap;
use crate::wire::{detect_wires, WireMask};

// =============================================================================
// OPTIONS AND RESULTS
// =============================================================================

/// Which point of the object becomes its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OriginMethod {
    /// Centre of the surface the object is placed against.
    #[default]
    Base,
    /// Volumetric center of gravity.
    Volume,
}

/// Per-call settings for [`standardize_mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StandardizeOptions {
    pub surface: SurfaceContext,
    pub origin: OriginMethod,
    pub config: EngineConfig,
}

impl StandardizeOptions {
    pub fn with_surface(mut self, surface: SurfaceContext) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_origin(mut self, origin: OriginMethod) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

/// Rotation and origin that put one object in its canonical pose.
///
/// `rotation` is a turn of `angle` radians about +Z. `origin` is given in
/// the rotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standardization {
    pub rotation: Quat,
    pub angle: f64,
    pub origin: Vec3,
    pub surface: SurfaceType,
    pub shape: ShapeClass,
}

impl Standardization {
    /// No rotation, origin at `origin`, resting on the ground.
    pub fn identity(origin: Vec3) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            angle: 0.0,
            origin,
            surface: SurfaceType::Ground,
            shape: ShapeClass::Ground,
        }
    }
}

/// Per-object rigid transform used by [`group_objects`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    pub offset: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

// =============================================================================
// SINGLE OBJECT
// =============================================================================

/// Standardizes one object with default options.
///
/// # Errors
///
/// Returns [`EngineError::InvalidGeometry`] for out-of-range edge indices or
/// non-finite coordinates.
///
/// # Example
///
/// ```rust
/// use pivot_engine::core::Vec3;
/// use pivot_engine::engine::standardize_object_transform;
///
/// let result = standardize_object_transform(&[], &[]).unwrap();
/// assert_eq!(result.angle, 0.0);
/// assert_eq!(result.origin, Vec3::ZERO);
/// ```
pub fn standardize_object_transform(
    vertices: &[Vec3],
    edges: &[[u32; 2]],
) -> EngineResult<Standardization> {
    let mesh = MeshView::new(vertices, edges)?;
    Ok(standardize_mesh(&mesh, &StandardizeOptions::default()))
}

/// Runs the full pipeline on a validated mesh.
///
/// Meshes without edges, and single vertices, have nothing to orient and
/// get the identity.
pub fn standardize_mesh(mesh: &MeshView<'_>, options: &StandardizeOptions) -> Standardization {
    match mesh.vertices() {
        [] => return Standardization::identity(Vec3::ZERO),
        [only] => return Standardization::identity(*only),
        _ if mesh.edge_count() == 0 => return Standardization::identity(Vec3::ZERO),
        _ => {}
    }
    let config = &options.config;

    let adjacency = Adjacency::build(mesh);
    let voxels = VoxelMap::build(mesh, config.voxel_size);
    let mask = detect_wires(&adjacency, &voxels, config.wire_growth_factor);

    let stripped = strip_wires(mesh, &mask);
    let body: &MeshView<'_> = match &stripped {
        Some(body) => body,
        None => mesh,
    };

    let hull = silhouette_hull(body.vertices());
    let forward = forward_angle(&hull);
    debug!(
        excluded = mask.excluded_count(),
        kept = body.vertex_count(),
        hull = hull.len(),
        forward,
        "Found forward angle"
    );

    let working = body.rotated_about_z(forward);
    let cog = compute_cog(&working, config.slice_height);
    let Some(profile) = ShapeProfile::new(working.vertices(), &cog) else {
        return Standardization::identity(Vec3::ZERO);
    };
    let class = classify(&profile, options.surface);

    let angle = forward + class.front.angle();
    let origin = match options.origin {
        OriginMethod::Volume => cog.overall,
        OriginMethod::Base => class.contact,
    };

    let result = Standardization {
        rotation: about_z(angle),
        angle,
        origin: quarter_turns_z(origin, class.front.turns()),
        surface: class.shape.surface(),
        shape: class.shape,
    };
    info!(
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        shape = ?result.shape,
        angle,
        "Standardized object"
    );
    result
}

/// The mesh without its wire vertices. `None` when the mask excludes
/// nothing, or everything, in which case the whole mesh is analyzed.
fn strip_wires(mesh: &MeshView<'_>, mask: &WireMask) -> Option<MeshView<'static>> {
    let excluded = mask.excluded_count();
    (excluded > 0 && excluded < mesh.vertex_count())
        .then(|| mesh.retain_vertices(|i| !mask.is_excluded(i)))
}

/// XY convex hull of `vertices`.
fn silhouette_hull(vertices: &[Vec3]) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = vertices.iter().map(|&v| xy(v)).collect();
    points.sort_by(lexicographic);
    points.dedup();
    monotonic_chain(&points)
}

// =============================================================================
// BATCHES
// =============================================================================

/// Vertex and edge ranges of each object in flat buffers.
fn object_ranges(
    vertex_total: usize,
    edge_total: usize,
    vert_counts: &[u32],
    edge_counts: &[u32],
) -> EngineResult<Vec<(Range<usize>, Range<usize>)>> {
    if vert_counts.len() != edge_counts.len() {
        return Err(EngineError::buffer_mismatch(format!(
            "{} vertex counts but {} edge counts",
            vert_counts.len(),
            edge_counts.len()
        )));
    }

    let (mut v, mut e) = (0usize, 0usize);
    let ranges: Vec<_> = vert_counts
        .iter()
        .zip(edge_counts)
        .map(|(&vc, &ec)| {
            let range = (v..v + vc as usize, e..e + ec as usize);
            v += vc as usize;
            e += ec as usize;
            range
        })
        .collect();

    if v != vertex_total || e != edge_total {
        return Err(EngineError::buffer_mismatch(format!(
            "counts cover {v} vertices and {e} edges, buffers hold {vertex_total} and {edge_total}"
        )));
    }
    Ok(ranges)
}

/// Standardizes every object of a flat batch, in parallel.
///
/// Edges index into their own object's vertices. Results are in object
/// order and equal to standardizing each object separately.
///
/// # Errors
///
/// [`EngineError::BufferMismatch`] when the counts do not match each other
/// or the buffers. [`EngineError::InvalidGeometry`] when any object has a
/// bad edge or coordinate.
pub fn prepare_object_batch(
    vertices: &[Vec3],
    edges: &[[u32; 2]],
    vert_counts: &[u32],
    edge_counts: &[u32],
    options: &StandardizeOptions,
) -> EngineResult<Vec<Standardization>> {
    let ranges = object_ranges(vertices.len(), edges.len(), vert_counts, edge_counts)?;

    let results = ranges
        .into_par_iter()
        .map(|(v, e)| -> EngineResult<Standardization> {
            let mesh = MeshView::new(&vertices[v], &edges[e])?;
            Ok(standardize_mesh(&mesh, options))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    info!(objects = results.len(), "Standardized batch");
    Ok(results)
}

/// Merges consecutive objects into groups in place.
///
/// Each object is scaled, rotated, then offset by its transform. Its edges
/// are rebased onto the group's vertex range, and the count vectors are
/// replaced by per-group totals. `group_sizes` lists how many consecutive
/// objects form each group.
///
/// Inputs are validated before anything is written.
///
/// # Errors
///
/// [`EngineError::BufferMismatch`] when counts, group sizes, and transforms
/// disagree. [`EngineError::InvalidGeometry`] when an edge indexes outside
/// its object.
pub fn group_objects(
    vertices: &mut [Vec3],
    edges: &mut [[u32; 2]],
    vert_counts: &mut Vec<u32>,
    edge_counts: &mut Vec<u32>,
    group_sizes: &[u32],
    transforms: &[ObjectTransform],
) -> EngineResult<()> {
    let ranges = object_ranges(vertices.len(), edges.len(), vert_counts, edge_counts)?;
    if transforms.len() != ranges.len() {
        return Err(EngineError::buffer_mismatch(format!(
            "{} transforms for {} objects",
            transforms.len(),
            ranges.len()
        )));
    }
    let grouped: usize = group_sizes.iter().map(|&s| s as usize).sum();
    if grouped != ranges.len() {
        return Err(EngineError::buffer_mismatch(format!(
            "groups cover {grouped} objects, counts describe {}",
            ranges.len()
        )));
    }
    for (object, (_, e)) in ranges.iter().enumerate() {
        let count = vert_counts[object];
        if let Some(edge) = edges[e.clone()].iter().find(|[a, b]| *a >= count || *b >= count) {
            return Err(EngineError::invalid_geometry(format!(
                "object {object} edge {edge:?} exceeds its {count} vertices"
            )));
        }
    }

    let mut group_vertices = Vec::with_capacity(group_sizes.len());
    let mut group_edges = Vec::with_capacity(group_sizes.len());
    let mut objects = ranges
        .iter()
        .zip(transforms)
        .zip(vert_counts.iter().zip(edge_counts.iter()));
    for &size in group_sizes {
        let (mut base, mut edge_total) = (0u32, 0u32);
        for (((v, e), transform), (&vc, &ec)) in objects.by_ref().take(size as usize) {
            let rotation = normalize_or_identity(transform.rotation);
            for p in &mut vertices[v.clone()] {
                *p = rotation * (*p * transform.scale) + transform.offset;
            }
            for edge in &mut edges[e.clone()] {
                edge[0] += base;
                edge[1] += base;
            }
            base += vc;
            edge_total += ec;
        }
        group_vertices.push(base);
        group_edges.push(edge_total);
    }

    debug!(
        objects = ranges.len(),
        groups = group_sizes.len(),
        "Grouped objects"
    );
    *vert_counts = group_vertices;
    *edge_counts = group_edges;
    Ok(())
}

/// Rotates every vertex in place. The quaternion is normalized first; a
/// zero quaternion leaves the vertices unchanged.
pub fn apply_rotation(vertices: &mut [Vec3], rotation: Quat) {
    let rotation = normalize_or_identity(rotation);
    vertices.par_iter_mut().for_each(|v| *v = rotation * *v);
}
