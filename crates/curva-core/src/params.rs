use serde::{Deserialize, Serialize};

use crate::limits::Limits;

/// Shape parameters supplied alongside the control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Polynomial degree; ignored by the Bezier family.
    pub degree: usize,
    /// Number of parameter steps; the output has `resolution + 1` points.
    pub resolution: usize,
}

impl CurveParams {
    pub const DEFAULT_DEGREE: usize = 3;
    pub const DEFAULT_RESOLUTION: usize = 100;

    pub fn new(degree: usize, resolution: usize) -> Self {
        Self { degree, resolution }
    }

    /// Lower the degree to the largest one the B-Spline family accepts for
    /// `point_count` points. The degree never drops below 1.
    pub fn fitted_to(self, point_count: usize) -> Self {
        let ceiling = Limits::bspline()
            .max_degree_for(point_count)
            .unwrap_or(self.degree)
            .max(1);
        Self {
            degree: self.degree.min(ceiling),
            ..self
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            degree: Self::DEFAULT_DEGREE,
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }
}
