//! Knot vector construction.

use curva_core::Tolerance;
use curva_math::Point2;
use serde::{Deserialize, Serialize};

/// A non-decreasing sequence of knots.
///
/// Built fresh for every curve computation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector(Vec<f64>);

impl KnotVector {
    /// Uniform knot vector `0, 1, ..., n + p + 1` for `point_count = n + 1`
    /// control points and degree `p`.
    pub fn uniform(point_count: usize, degree: usize) -> Self {
        let last = point_count + degree;
        Self((0..=last).map(|k| k as f64).collect())
    }

    /// Clamped knot vector with centripetal spacing.
    ///
    /// Each control point gets a parameter from the cumulative fourth root of
    /// the chord length to its predecessor, normalized to `[0, 1]`. Interior
    /// knots average `degree` consecutive parameters and are rescaled into
    /// `[0, n - p + 1]`; the first and last `degree + 1` knots are clamped to
    /// the ends of that range.
    pub fn centripetal(points: &[Point2], degree: usize) -> Self {
        let count = points.len();
        if count < 2 || degree == 0 || degree >= count {
            return Self::uniform(count, degree);
        }

        let n = count - 1;
        let span = (n - degree + 1) as f64;
        let params = centripetal_parameters(points);

        let mut knots = Vec::with_capacity(n + degree + 2);
        knots.extend(std::iter::repeat(0.0).take(degree + 1));
        for j in 1..=(n - degree) {
            let sum: f64 = params[j..j + degree].iter().sum();
            knots.push(sum / degree as f64 * span);
        }
        knots.extend(std::iter::repeat(span).take(degree + 1));

        Self(knots)
    }

    pub fn from_vec(knots: Vec<f64>) -> Self {
        Self(knots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Valid parameter range `(knots[p], knots[n + 1])` for a curve of the
    /// given degree over this knot vector.
    ///
    /// Panics if the vector holds fewer than `degree + 1` knots.
    pub fn domain(&self, degree: usize) -> (f64, f64) {
        let upper = self.0.len().saturating_sub(degree + 1);
        (self.0[degree], self.0[upper])
    }
}

/// Centripetal parameters in `[0, 1]`, one per control point.
///
/// Coincident control points give a zero total length, and points near the
/// ends of the `f64` range overflow it to infinity. The parameters then fall
/// back to uniform spacing.
fn centripetal_parameters(points: &[Point2]) -> Vec<f64> {
    let n = points.len() - 1;
    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    for pair in points.windows(2) {
        let step = pair[0].distance(pair[1]).sqrt();
        let prev = cumulative.last().copied().unwrap_or(0.0);
        cumulative.push(prev + step);
    }

    let total = cumulative[n];
    if !total.is_finite() || Tolerance::default().is_zero(total) {
        log::debug!(
            "centripetal parameterization degenerate for {} points (total {}), using uniform spacing",
            points.len(),
            total
        );
        return (0..=n).map(|i| i as f64 / n as f64).collect();
    }

    cumulative.iter().map(|d| d / total).collect()
}
