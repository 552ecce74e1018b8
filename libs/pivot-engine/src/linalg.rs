//! # Principal Axes
//!
//! Covariance and symmetric eigen-decomposition helpers for 2D and 3D
//! point samples. Eigenpairs are returned sorted by descending eigenvalue.

use nalgebra::{Matrix2, Matrix3};

use crate::core::{Vec2, Vec3};

/// Eigenpairs of a 3×3 covariance, strongest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxes3 {
    /// Eigenvalues in descending order, clamped at zero.
    pub values: [f64; 3],
    /// Unit eigenvectors matching `values`.
    pub vectors: [Vec3; 3],
}

/// Eigenpairs of a 2×2 covariance, strongest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxes2 {
    /// Eigenvalues in descending order, clamped at zero.
    pub values: [f64; 2],
    /// Unit eigenvectors matching `values`.
    pub vectors: [Vec2; 2],
}

/// Returns the mean and population covariance of `points`.
///
/// An empty slice yields a zero mean and zero matrix.
pub fn covariance3(points: &[Vec3]) -> (Vec3, Matrix3<f64>) {
    if points.is_empty() {
        return (Vec3::ZERO, Matrix3::zeros());
    }
    let n = points.len() as f64;
    let mean = points.iter().copied().sum::<Vec3>() / n;

    let mut cov = Matrix3::zeros();
    for p in points {
        let d = *p - mean;
        let d = [d.x, d.y, d.z];
        for row in 0..3 {
            for col in 0..3 {
                cov[(row, col)] += d[row] * d[col];
            }
        }
    }
    (mean, cov / n)
}

/// Returns the mean and population covariance of 2D `points`.
pub fn covariance2(points: &[Vec2]) -> (Vec2, Matrix2<f64>) {
    if points.is_empty() {
        return (Vec2::ZERO, Matrix2::zeros());
    }
    let n = points.len() as f64;
    let mean = points.iter().copied().sum::<Vec2>() / n;

    let mut cov = Matrix2::zeros();
    for p in points {
        let d = *p - mean;
        cov[(0, 0)] += d.x * d.x;
        cov[(0, 1)] += d.x * d.y;
        cov[(1, 0)] += d.y * d.x;
        cov[(1, 1)] += d.y * d.y;
    }
    (mean, cov / n)
}

/// Eigen-decomposes a symmetric 3×3 matrix.
///
/// # Example
///
/// ```rust
/// use nalgebra::{Matrix2, Matrix3};
/// use pivot_engine::linalg::principal_axes3;
///
/// let axes = principal_axes3(&Matrix3::new(1.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 2.0));
/// assert!((axes.values[0] - 4.0).abs() < 1e-12);
/// assert!(axes.vectors[0].y.abs() > 0.999);
/// ```
pub fn principal_axes3(cov: &Matrix3<f64>) -> PrincipalAxes3 {
    let eigen = cov.symmetric_eigen();
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let column = |i: usize| {
        let c = eigen.eigenvectors.column(i);
        Vec3::new(c[0], c[1], c[2]).normalize_or_zero()
    };
    PrincipalAxes3 {
        values: order.map(|i| eigen.eigenvalues[i].max(0.0)),
        vectors: order.map(column),
    }
}

/// Eigen-decomposes a symmetric 2×2 matrix.
pub fn principal_axes2(cov: &Matrix2<f64>) -> PrincipalAxes2 {
    let eigen = cov.symmetric_eigen();
    let mut order = [0usize, 1];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let column = |i: usize| {
        let c = eigen.eigenvectors.column(i);
        Vec2::new(c[0], c[1]).normalize_or_zero()
    };
    PrincipalAxes2 {
        values: order.map(|i| eigen.eigenvalues[i].max(0.0)),
        vectors: order.map(column),
    }
}
