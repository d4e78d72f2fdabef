//! Curva geometry: knot vectors, B-spline/NURBS/Bezier curves, and sampling strategies.

pub mod algorithm;
pub mod curve;
pub mod nurbs;
pub mod sample;
pub mod validate;

pub use algorithm::{Algorithm, AlgorithmDescriptor, CurveFn};
pub use curve::Curve;
pub use sample::{sample_curve, CurveSample};
pub use validate::CurveRequest;
