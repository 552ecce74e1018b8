//! # Volumetric Center of Gravity
//!
//! Slices a wireframe mesh into horizontal bands, rebuilds each band's
//! cross-section from edge-plane intersections, and aggregates the
//! per-slice areas into a center of gravity and a slice profile.
//!
//! ## Algorithm Overview
//!
//! 1. Split the Z extent into bands of the requested thickness
//! 2. Bucket every edge into each band its Z range overlaps
//! 3. Group vertices into connected islands once, with union-find
//! 4. Per band, collect the vertices inside it and every point where an
//!    edge strictly crosses one of its planes, split by island
//! 5. Hull each island's points and accumulate area and centroid
//! 6. Weight band centroids and mid-heights by area for the overall COG
//!
//! Polygons whose area is below [`DEGENERATE_AREA`] are skipped.

use config::constants::{DEGENERATE_AREA, GEOMETRY_EPSILON, MAX_SLICE_COUNT, MIN_EDGE_RISE};
use tracing::debug;

use crate::bbox::BoundingBox2D;
use crate::core::vec2::lexicographic;
use crate::core::vec3::xy;
use crate::core::{Vec2, Vec3};
use crate::hull::{area_centroid, monotonic_chain};
use crate::mesh::MeshView;

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Cross-section summary of one horizontal band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceData {
    /// Total absolute area of the band's island polygons.
    pub area: f64,
    /// Bounds of all polygon vertices in the band.
    pub bounds: Option<BoundingBox2D>,
    /// Area-weighted centroid of the band's polygons.
    pub centroid: Vec2,
    /// Height halfway through the band.
    pub mid_z: f64,
}

impl SliceData {
    fn empty(mid_z: f64) -> Self {
        Self {
            area: 0.0,
            bounds: None,
            centroid: Vec2::ZERO,
            mid_z,
        }
    }

    /// Area of the band's bounding box, zero when it has none.
    pub fn bounds_area(&self) -> f64 {
        self.bounds.map_or(0.0, |b| b.area)
    }
}

/// Center of gravity plus the bottom-to-top slice profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CogResult {
    pub overall: Vec3,
    pub slices: Vec<SliceData>,
    /// Band thickness actually used.
    pub slice_height: f64,
}

// =============================================================================
// SLICE PLAN
// =============================================================================

/// Band layout over a Z range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlan {
    pub z0: f64,
    pub z_max: f64,
    pub thickness: f64,
    pub count: usize,
}

impl SlicePlan {
    /// Lays out bands of `requested` thickness over `[z0, z_max]`.
    ///
    /// Always at least one band. When more than [`MAX_SLICE_COUNT`] bands
    /// would be needed, the thickness grows to fit that many.
    pub fn new(z0: f64, z_max: f64, requested: f64) -> Self {
        let height = (z_max - z0).max(0.0);
        let needed = (height / requested - GEOMETRY_EPSILON).ceil().max(1.0) as usize;
        let (count, thickness) = if needed > MAX_SLICE_COUNT {
            (MAX_SLICE_COUNT, height / MAX_SLICE_COUNT as f64)
        } else {
            (needed, requested)
        };
        Self {
            z0,
            z_max,
            thickness,
            count,
        }
    }

    /// Lower and upper plane of band `i`.
    pub fn planes(&self, i: usize) -> (f64, f64) {
        let lower = self.z0 + i as f64 * self.thickness;
        let upper = if i + 1 == self.count {
            self.z_max.max(lower)
        } else {
            (lower + self.thickness).min(self.z_max.max(lower))
        };
        (lower, upper)
    }

    /// Bands touched by the closed Z interval `[lo, hi]`.
    pub fn band_range(&self, lo: f64, hi: f64) -> std::ops::RangeInclusive<usize> {
        let last = self.count - 1;
        let index = |z: f64| -> usize {
            let i = ((z - self.z0) / self.thickness).floor();
            if i <= 0.0 {
                0
            } else {
                (i as usize).min(last)
            }
        };
        index(lo)..=index(hi)
    }
}

// =============================================================================
// UNION-FIND
// =============================================================================

/// Disjoint sets with path halving and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    pub fn union(&mut self, a: u32, b: u32) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        let (ra_rank, rb_rank) = (self.rank[ra as usize], self.rank[rb as usize]);
        if ra_rank < rb_rank {
            self.parent[ra as usize] = rb;
        } else if ra_rank > rb_rank {
            self.parent[rb as usize] = ra;
        } else {
            self.parent[rb as usize] = ra;
            self.rank[ra as usize] = ra_rank.saturating_add(1);
        }
    }

    /// Dense component id per element (`0..count`) and the component count.
    pub fn components(&mut self) -> (Vec<u32>, usize) {
        let n = self.parent.len();
        let mut remap = vec![u32::MAX; n];
        let mut ids = Vec::with_capacity(n);
        let mut count = 0u32;
        for x in 0..n as u32 {
            let root = self.find(x) as usize;
            if remap[root] == u32::MAX {
                remap[root] = count;
                count += 1;
            }
            ids.push(remap[root]);
        }
        (ids, count as usize)
    }
}

// =============================================================================
// PER-CALL SCRATCH
// =============================================================================

/// Point buckets per component, reused across the bands of one call.
///
/// A bucket is logically cleared when its stamp differs from the current
/// generation, so a band only touches the components it actually uses.
struct ComponentBuckets {
    points: Vec<Vec<Vec2>>,
    stamp: Vec<u32>,
    generation: u32,
    active: Vec<usize>,
}

impl ComponentBuckets {
    fn new(components: usize) -> Self {
        Self {
            points: vec![Vec::new(); components],
            stamp: vec![0; components],
            generation: 0,
            active: Vec::new(),
        }
    }

    fn begin_band(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamp.fill(0);
            self.generation = 1;
        }
        self.active.clear();
    }

    fn push(&mut self, component: usize, p: Vec2) {
        if self.stamp[component] != self.generation {
            self.stamp[component] = self.generation;
            self.points[component].clear();
            self.active.push(component);
        }
        self.points[component].push(p);
    }
}

// =============================================================================
// SLICING
// =============================================================================

/// Computes the center of gravity and slice profile of `mesh`.
///
/// # Example
///
/// ```rust
/// use pivot_engine::cog::compute_cog;
/// use pivot_engine::core::Vec3;
/// use pivot_engine::mesh::MeshView;
///
/// // Unit-footprint box, 0.1 tall, as a 12-edge wireframe.
/// let vertices: Vec<Vec3> = (0..8u32)
///     .map(|i| Vec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, 0.1 * ((i >> 2) & 1) as f64))
///     .collect();
/// let edges = [
///     [0, 1], [2, 3], [4, 5], [6, 7], [0, 2], [1, 3],
///     [4, 6], [5, 7], [0, 4], [1, 5], [2, 6], [3, 7],
/// ];
/// let mesh = MeshView::new(&vertices, &edges).unwrap();
/// let cog = compute_cog(&mesh, 0.02);
/// assert_eq!(cog.slices.len(), 5);
/// assert!((cog.overall - Vec3::new(0.5, 0.5, 0.05)).length() < 1e-9);
/// ```
pub fn compute_cog(mesh: &MeshView<'_>, slice_height: f64) -> CogResult {
    let vertices = mesh.vertices();
    if vertices.is_empty() {
        return CogResult {
            overall: Vec3::ZERO,
            slices: Vec::new(),
            slice_height,
        };
    }

    let (z_min, z_max) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.z), hi.max(v.z))
        });
    let plan = SlicePlan::new(z_min, z_max, slice_height);

    let mut band_edges: Vec<Vec<usize>> = vec![Vec::new(); plan.count];
    for (e, edge) in mesh.edges().iter().enumerate() {
        let (za, zb) = (mesh.position(edge.a()).z, mesh.position(edge.b()).z);
        for band in plan.band_range(za.min(zb), za.max(zb)) {
            band_edges[band].push(e);
        }
    }

    let mut band_vertices: Vec<Vec<u32>> = vec![Vec::new(); plan.count];
    for (i, v) in vertices.iter().enumerate() {
        for band in plan.band_range(v.z - GEOMETRY_EPSILON, v.z + GEOMETRY_EPSILON) {
            band_vertices[band].push(i as u32);
        }
    }

    let mut islands = UnionFind::new(vertices.len());
    for edge in mesh.edges() {
        islands.union(edge.a().raw(), edge.b().raw());
    }
    let (component, component_count) = islands.components();
    let mut buckets = ComponentBuckets::new(component_count);

    let slices: Vec<SliceData> = (0..plan.count)
        .map(|band| {
            let (lower, upper) = plan.planes(band);
            let mid_z = (lower + upper) * 0.5;
            if band_edges[band].is_empty() {
                return SliceData::empty(mid_z);
            }

            buckets.begin_band();
            for &v in &band_vertices[band] {
                buckets.push(component[v as usize] as usize, xy(vertices[v as usize]));
            }
            for &e in &band_edges[band] {
                let edge = mesh.edges()[e];
                let (a, b) = (mesh.position(edge.a()), mesh.position(edge.b()));
                let dz = b.z - a.z;
                if dz.abs() < MIN_EDGE_RISE {
                    continue;
                }
                for plane in [lower, upper] {
                    if (a.z - plane) * (b.z - plane) < 0.0 {
                        let t = (plane - a.z) / dz;
                        buckets.push(component[edge.a().index()] as usize, xy(a.lerp(b, t)));
                    }
                }
            }

            band_profile(&mut buckets, mid_z)
        })
        .collect();

    let total_area: f64 = slices.iter().map(|s| s.area).sum();
    let overall = if total_area > 0.0 {
        slices
            .iter()
            .map(|s| s.centroid.extend(s.mid_z) * s.area)
            .sum::<Vec3>()
            / total_area
    } else {
        vertices.iter().copied().sum::<Vec3>() / vertices.len() as f64
    };

    debug!(
        slices = plan.count,
        slice_height = plan.thickness,
        islands = component_count,
        total_area,
        "Sliced mesh"
    );

    CogResult {
        overall,
        slices,
        slice_height: plan.thickness,
    }
}

fn band_profile(buckets: &mut ComponentBuckets, mid_z: f64) -> SliceData {
    let mut slice = SliceData::empty(mid_z);
    let mut weighted = Vec2::ZERO;

    for &component in &buckets.active {
        let points = &mut buckets.points[component];
        if points.len() < 3 {
            continue;
        }
        points.sort_by(lexicographic);
        points.dedup();

        let hull = monotonic_chain(points);
        let Some((signed_area, centroid)) = area_centroid(&hull) else {
            continue;
        };
        let area = signed_area.abs();
        if area < DEGENERATE_AREA {
            continue;
        }

        slice.area += area;
        weighted += centroid * area;
        slice.bounds = hull.iter().fold(slice.bounds, |bounds, &p| match bounds {
            Some(b) => Some(b.include(p)),
            None => Some(BoundingBox2D::new(p, p)),
        });
    }

    if slice.area > 0.0 {
        slice.centroid = weighted / slice.area;
    }
    slice
}
