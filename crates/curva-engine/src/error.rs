use curva_core::{CurveError, CurveFamily};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Validation or computation failed; `source` holds the violated contract.
    #[error("curve computation with {algorithm} failed: {source}")]
    ComputeFailed {
        algorithm: String,
        #[source]
        source: CurveError,
    },

    #[error("an algorithm named {0:?} is already registered")]
    DuplicateAlgorithm(String),

    #[error("{name:?} is a {actual} algorithm, this engine serves {expected} curves")]
    FamilyMismatch {
        name: String,
        expected: CurveFamily,
        actual: CurveFamily,
    },
}

impl EngineError {
    /// The underlying input-contract violation of a failed computation.
    pub fn curve_error(&self) -> Option<&CurveError> {
        match self {
            Self::ComputeFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
