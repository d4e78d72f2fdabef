use serde::{Deserialize, Serialize};

use crate::limits::Limits;

/// Curve families with their own algorithm set and input caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveFamily {
    /// Uniform/non-uniform B-splines and NURBS; takes a degree.
    BSpline,
    /// Bezier curves; the degree follows from the point count.
    Bezier,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 2] = [CurveFamily::BSpline, CurveFamily::Bezier];

    /// Input caps enforced for this family.
    pub fn limits(self) -> Limits {
        match self {
            Self::BSpline => Limits::bspline(),
            Self::Bezier => Limits::bezier(),
        }
    }

    /// Whether curves of this family take an explicit degree.
    pub fn uses_degree(self) -> bool {
        self.limits().max_degree.is_some()
    }
}

impl std::fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BSpline => f.write_str("B-Spline"),
            Self::Bezier => f.write_str("Bezier"),
        }
    }
}
