//! Curve traits and implementations.

mod bezier;
mod bspline;

use curva_math::Point2;

pub use bezier::{
    bernstein_point, de_casteljau_point, recursive_lerp_point, BezierCurve, BezierMethod,
};
pub use bspline::{BSplineCurve, NurbsCurve};

/// Trait for parametric curves in the plane.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
