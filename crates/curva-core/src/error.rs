use thiserror::Error;

use crate::family::CurveFamily;

/// Input-contract violations detected before any curve is sampled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("at least {min} control points are required, got {actual}")]
    TooFewPoints { min: usize, actual: usize },

    #[error("at most {max} control points are allowed for {family} curves, got {actual}")]
    TooManyPoints {
        family: CurveFamily,
        max: usize,
        actual: usize,
    },

    #[error("control point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    #[error("degree must be at least {min}, got {actual}")]
    DegreeTooLow { min: usize, actual: usize },

    #[error("degree {degree} must be less than the number of control points ({points})")]
    DegreeNotBelowPointCount { degree: usize, points: usize },

    #[error("degree must be at most {max}, got {actual}")]
    DegreeTooHigh { max: usize, actual: usize },

    #[error("resolution must be at least {min}, got {actual}")]
    ResolutionTooLow { min: usize, actual: usize },

    #[error("resolution must be at most {max}, got {actual}")]
    ResolutionTooHigh { max: usize, actual: usize },

    #[error("expected {expected} weights (one per control point), got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("weight {index} must be finite and positive, got {value}")]
    InvalidWeight { index: usize, value: f64 },
}

impl CurveError {
    /// Index of the offending element, when the violation concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NonFinitePoint { index, .. } | Self::InvalidWeight { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
