//! Curve sampling strategies and their descriptors.
//!
//! Every strategy is a pure function `(points, degree, resolution) -> points`
//! that validates its own input before sampling. Bezier strategies ignore
//! the degree.

use curva_core::{CurveFamily, Result, Validate};
use curva_math::Point2;
use serde::Serialize;

use crate::curve::{BSplineCurve, BezierCurve, BezierMethod, NurbsCurve};
use crate::nurbs::KnotVector;
use crate::sample::{sample_curve, CurveSample};
use crate::validate::{validate_weights, CurveRequest};

/// Signature shared by every registered strategy.
pub type CurveFn = fn(&[Point2], usize, usize) -> Result<CurveSample>;

/// Static name, description and family of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub family: CurveFamily,
}

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    UniformBSpline,
    NonUniformBSpline,
    Nurbs,
    DeCasteljau,
    Bernstein,
    RecursiveLerp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::UniformBSpline,
        Algorithm::NonUniformBSpline,
        Algorithm::Nurbs,
        Algorithm::DeCasteljau,
        Algorithm::Bernstein,
        Algorithm::RecursiveLerp,
    ];

    /// Built-in strategies of `family`, in registration order.
    pub fn for_family(family: CurveFamily) -> impl Iterator<Item = Algorithm> {
        Self::ALL.into_iter().filter(move |a| a.family() == family)
    }

    pub fn family(self) -> CurveFamily {
        match self {
            Self::UniformBSpline | Self::NonUniformBSpline | Self::Nurbs => CurveFamily::BSpline,
            Self::DeCasteljau | Self::Bernstein | Self::RecursiveLerp => CurveFamily::Bezier,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UniformBSpline => "Uniform B-Spline",
            Self::NonUniformBSpline => "Non-Uniform B-Spline",
            Self::Nurbs => "NURBS",
            Self::DeCasteljau => "De Casteljau",
            Self::Bernstein => "Bernstein Polynomials",
            Self::RecursiveLerp => "Linear Interpolation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UniformBSpline => "Uniform B-Spline - evaluation over an integer-spaced knot vector",
            Self::NonUniformBSpline => {
                "Non-Uniform B-Spline - clamped knot vector with centripetal spacing"
            }
            Self::Nurbs => "NURBS - rational B-Spline with per-point weights",
            Self::DeCasteljau => "De Casteljau - repeated interpolation of intermediate points",
            Self::Bernstein => "Bernstein Polynomials - direct evaluation of the closed formula",
            Self::RecursiveLerp => "Linear Interpolation - recursive pairwise interpolation",
        }
    }

    pub fn descriptor(self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            name: self.name(),
            description: self.description(),
            family: self.family(),
        }
    }

    pub fn compute_fn(self) -> CurveFn {
        match self {
            Self::UniformBSpline => uniform_bspline,
            Self::NonUniformBSpline => non_uniform_bspline,
            Self::Nurbs => nurbs,
            Self::DeCasteljau => de_casteljau,
            Self::Bernstein => bernstein,
            Self::RecursiveLerp => recursive_lerp,
        }
    }

    pub fn compute(
        self,
        points: &[Point2],
        degree: usize,
        resolution: usize,
    ) -> Result<CurveSample> {
        (self.compute_fn())(points, degree, resolution)
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// B-spline over the uniform knot vector `0..=n+p+1`, sampled on `[p, n+1]`.
pub fn uniform_bspline(points: &[Point2], degree: usize, resolution: usize) -> Result<CurveSample> {
    CurveRequest::bspline(points, degree, resolution).validate()?;
    let knots = KnotVector::uniform(points.len(), degree);
    let curve = BSplineCurve::new(degree, knots, points.to_vec());
    Ok(sample_curve(&curve, resolution))
}

/// B-spline over a clamped centripetal knot vector.
pub fn non_uniform_bspline(
    points: &[Point2],
    degree: usize,
    resolution: usize,
) -> Result<CurveSample> {
    CurveRequest::bspline(points, degree, resolution).validate()?;
    let knots = KnotVector::centripetal(points, degree);
    let curve = BSplineCurve::new(degree, knots, points.to_vec());
    Ok(sample_curve(&curve, resolution))
}

/// NURBS over the uniform knot vector with every weight at 1.0.
pub fn nurbs(points: &[Point2], degree: usize, resolution: usize) -> Result<CurveSample> {
    CurveRequest::bspline(points, degree, resolution).validate()?;
    let knots = KnotVector::uniform(points.len(), degree);
    let curve = NurbsCurve::unweighted(degree, knots, points.to_vec());
    Ok(sample_curve(&curve, resolution))
}

/// NURBS over the uniform knot vector with caller-supplied weights.
pub fn nurbs_weighted(
    points: &[Point2],
    weights: &[f64],
    degree: usize,
    resolution: usize,
) -> Result<CurveSample> {
    CurveRequest::bspline(points, degree, resolution).validate()?;
    validate_weights(weights, points.len())?;
    let knots = KnotVector::uniform(points.len(), degree);
    let curve = NurbsCurve::new(degree, knots, points.to_vec(), weights.to_vec());
    Ok(sample_curve(&curve, resolution))
}

pub fn de_casteljau(points: &[Point2], _degree: usize, resolution: usize) -> Result<CurveSample> {
    bezier(points, resolution, BezierMethod::DeCasteljau)
}

pub fn bernstein(points: &[Point2], _degree: usize, resolution: usize) -> Result<CurveSample> {
    bezier(points, resolution, BezierMethod::Bernstein)
}

pub fn recursive_lerp(points: &[Point2], _degree: usize, resolution: usize) -> Result<CurveSample> {
    bezier(points, resolution, BezierMethod::RecursiveLerp)
}

fn bezier(points: &[Point2], resolution: usize, method: BezierMethod) -> Result<CurveSample> {
    CurveRequest::bezier(points, resolution).validate()?;
    let curve = BezierCurve::new(points.to_vec(), method);
    Ok(sample_curve(&curve, resolution))
}
