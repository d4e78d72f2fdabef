//! Bezier curves with three interchangeable evaluation methods.

use curva_math::{bernstein_basis, lerp, Point2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// How a [`BezierCurve`] evaluates its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BezierMethod {
    /// Iterative pairwise interpolation in a reused buffer.
    DeCasteljau,
    /// Direct Bernstein polynomial sum.
    Bernstein,
    /// Pairwise interpolation expressed as recursion.
    RecursiveLerp,
}

/// A Bezier curve of degree `control_points.len() - 1` over `t` in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    pub control_points: Vec<Point2>,
    pub method: BezierMethod,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>, method: BezierMethod) -> Self {
        Self {
            control_points,
            method,
        }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point2 {
        match self.method {
            BezierMethod::DeCasteljau => de_casteljau_point(&self.control_points, t),
            BezierMethod::Bernstein => bernstein_point(&self.control_points, t),
            BezierMethod::RecursiveLerp => recursive_lerp_point(&self.control_points, t),
        }
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// De Casteljau reduction: interpolate neighbouring points level by level
/// until one point remains. O(n^2) per evaluation.
///
/// An empty slice evaluates to the origin.
pub fn de_casteljau_point(control_points: &[Point2], t: f64) -> Point2 {
    let mut work = control_points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    work.first().copied().unwrap_or(Point2::ZERO)
}

/// Sum of `b(n, i, t) * P[i]` over the control points.
pub fn bernstein_point(control_points: &[Point2], t: f64) -> Point2 {
    let n = control_points.len().saturating_sub(1);
    control_points
        .iter()
        .enumerate()
        .fold(Point2::ZERO, |acc, (i, &cp)| acc + bernstein_basis(n, i, t) * cp)
}

/// Recursive pairwise interpolation; stops when a single point remains.
pub fn recursive_lerp_point(control_points: &[Point2], t: f64) -> Point2 {
    match control_points {
        [] => Point2::ZERO,
        [p] => *p,
        _ => {
            let reduced: Vec<Point2> = control_points
                .windows(2)
                .map(|pair| lerp(pair[0], pair[1], t))
                .collect();
            recursive_lerp_point(&reduced, t)
        }
    }
}
