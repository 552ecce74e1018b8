//! # Bounding Boxes
//!
//! Axis-aligned 2D and 3D bounding boxes with optional band filters.
//! Empty inputs produce `None` rather than an inverted box.

use crate::core::vec3::xy;
use crate::core::{Axis, Vec2, Vec3};

/// Axis-aligned rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    pub min: Vec2,
    pub max: Vec2,
    pub area: f64,
    /// Rotation (radians about Z) the points were in when measured.
    pub rotation: f64,
}

impl BoundingBox2D {
    /// Creates a box from its corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        let size = max - min;
        Self {
            min,
            max,
            area: size.x * size.y,
            rotation: 0.0,
        }
    }

    /// Bounds of `points`; `None` if empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_engine::bbox::BoundingBox2D;
    /// use pivot_engine::core::Vec2;
    ///
    /// let b = BoundingBox2D::from_points([Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0)]).unwrap();
    /// assert_eq!(b.area, 6.0);
    /// assert!(BoundingBox2D::from_points(Vec::<Vec2>::new()).is_none());
    /// ```
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min, max))
    }

    /// XY bounds of the points whose `axis` coordinate lies in `[lo, hi]`.
    pub fn from_points_in_band(points: &[Vec3], axis: Axis, lo: f64, hi: f64) -> Option<Self> {
        Self::from_points(
            points
                .iter()
                .filter(|&&p| (lo..=hi).contains(&axis.component(p)))
                .map(|&p| xy(p)),
        )
    }

    /// Records the rotation the box was measured under.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Width and depth.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Grows the box to include `p`.
    pub fn include(&self, p: Vec2) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }
}

/// Axis-aligned box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    pub min: Vec3,
    pub max: Vec3,
    pub volume: f64,
}

impl BoundingBox3D {
    /// Creates a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        let size = max - min;
        Self {
            min,
            max,
            volume: size.x * size.y * size.z,
        }
    }

    /// Bounds of `points`; `None` if empty.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min, max))
    }

    /// Bounds of the points whose `axis` coordinate lies in `[lo, hi]`.
    pub fn from_points_in_band(points: &[Vec3], axis: Axis, lo: f64, hi: f64) -> Option<Self> {
        Self::from_points(
            points
                .iter()
                .copied()
                .filter(|&p| (lo..=hi).contains(&axis.component(p))),
        )
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along Z.
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Coordinate at fraction `factor` of the extent along `axis`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_engine::bbox::BoundingBox3D;
    /// use pivot_engine::core::{Axis, Vec3};
    ///
    /// let b = BoundingBox3D::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 4.0));
    /// assert_eq!(b.factor_to_coord(Axis::Z, 0.25), 1.0);
    /// ```
    pub fn factor_to_coord(&self, axis: Axis, factor: f64) -> f64 {
        let lo = axis.component(self.min);
        lo + factor * (axis.component(self.max) - lo)
    }

    /// The XY rectangle under the box.
    pub fn footprint(&self) -> BoundingBox2D {
        BoundingBox2D::new(xy(self.min), xy(self.max))
    }
}
