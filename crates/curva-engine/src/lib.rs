//! Curva engine: per-family algorithm registry with a validated `compute_curve` entry point.

pub mod engine;
pub mod error;

pub use engine::Engine;
pub use error::{EngineError, Result};

pub use curva_core::{CurveError, CurveFamily, CurveParams, Limits};
pub use curva_geometry::{Algorithm, AlgorithmDescriptor, CurveFn, CurveSample};
pub use curva_math::Point2;
