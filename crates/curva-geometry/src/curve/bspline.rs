//! B-spline and NURBS curve implementations.

use curva_math::Point2;
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::nurbs::{b_spline_basis_closed, KnotVector};

/// A B-spline curve defined by degree, knot vector, and control points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BSplineCurve {
    pub degree: usize,
    pub knots: KnotVector,
    pub control_points: Vec<Point2>,
}

impl BSplineCurve {
    pub fn new(degree: usize, knots: KnotVector, control_points: Vec<Point2>) -> Self {
        debug_assert!(
            knots.len() == control_points.len() + degree + 1,
            "Knot vector length must be n + p + 2, got {} knots for {} CPs with degree {}",
            knots.len(),
            control_points.len(),
            degree
        );
        Self {
            degree,
            knots,
            control_points,
        }
    }
}

impl Curve for BSplineCurve {
    /// Sum of `N(i, p, t) * P[i]` over every control point.
    fn point_at(&self, t: f64) -> Point2 {
        let knots = self.knots.as_slice();
        self.control_points
            .iter()
            .enumerate()
            .fold(Point2::ZERO, |acc, (i, &cp)| {
                acc + b_spline_basis_closed(i, self.degree, t, knots) * cp
            })
    }

    fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree)
    }
}

/// A NURBS (Non-Uniform Rational B-Spline) curve.
///
/// Extends `BSplineCurve` with one positive weight per control point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NurbsCurve {
    pub degree: usize,
    pub knots: KnotVector,
    pub control_points: Vec<Point2>,
    pub weights: Vec<f64>,
}

impl NurbsCurve {
    pub fn new(
        degree: usize,
        knots: KnotVector,
        control_points: Vec<Point2>,
        weights: Vec<f64>,
    ) -> Self {
        debug_assert!(
            knots.len() == control_points.len() + degree + 1,
            "Knot vector length must be n + p + 2"
        );
        debug_assert!(
            control_points.len() == weights.len(),
            "Must have same number of weights as control points"
        );
        Self {
            degree,
            knots,
            control_points,
            weights,
        }
    }

    /// NURBS curve with every weight set to 1.0.
    pub fn unweighted(degree: usize, knots: KnotVector, control_points: Vec<Point2>) -> Self {
        let weights = vec![1.0; control_points.len()];
        Self::new(degree, knots, control_points, weights)
    }
}

impl Curve for NurbsCurve {
    fn point_at(&self, t: f64) -> Point2 {
        let knots = self.knots.as_slice();
        let mut point = Point2::ZERO;
        let mut w = 0.0;

        for (i, (&cp, &weight)) in self.control_points.iter().zip(&self.weights).enumerate() {
            let bw = b_spline_basis_closed(i, self.degree, t, knots) * weight;
            point += bw * cp;
            w += bw;
        }

        // Outside every basis support the sum is exactly zero.
        if w == 0.0 {
            w = 1.0;
        }
        point / w
    }

    fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree)
    }
}
