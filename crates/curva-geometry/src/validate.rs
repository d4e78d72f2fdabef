//! Shared input-contract checks, parameterized by curve family.

use curva_core::{CurveError, CurveFamily, Limits, Result, Validate};
use curva_math::{is_finite_point, Point2};

/// One curve computation request: the inputs every algorithm validates.
#[derive(Debug, Clone, Copy)]
pub struct CurveRequest<'a> {
    pub family: CurveFamily,
    pub points: &'a [Point2],
    /// Ignored for families without a degree.
    pub degree: usize,
    pub resolution: usize,
}

impl<'a> CurveRequest<'a> {
    pub fn new(
        family: CurveFamily,
        points: &'a [Point2],
        degree: usize,
        resolution: usize,
    ) -> Self {
        Self {
            family,
            points,
            degree,
            resolution,
        }
    }

    pub fn bspline(points: &'a [Point2], degree: usize, resolution: usize) -> Self {
        Self::new(CurveFamily::BSpline, points, degree, resolution)
    }

    pub fn bezier(points: &'a [Point2], resolution: usize) -> Self {
        Self::new(CurveFamily::Bezier, points, 0, resolution)
    }
}

impl Validate for CurveRequest<'_> {
    fn validate(&self) -> Result<()> {
        let limits = self.family.limits();
        validate_points(self.points, self.family, &limits)?;
        if self.family.uses_degree() {
            validate_degree(self.degree, self.points.len(), &limits)?;
        }
        validate_resolution(self.resolution, &limits)
    }
}

/// Point count within the family caps and every coordinate finite.
pub fn validate_points(points: &[Point2], family: CurveFamily, limits: &Limits) -> Result<()> {
    if points.len() < limits.min_points {
        return Err(CurveError::TooFewPoints {
            min: limits.min_points,
            actual: points.len(),
        });
    }
    if points.len() > limits.max_points {
        return Err(CurveError::TooManyPoints {
            family,
            max: limits.max_points,
            actual: points.len(),
        });
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !is_finite_point(**p)) {
        return Err(CurveError::NonFinitePoint {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

/// Degree at least the family minimum, below the point count, and within
/// the family maximum.
pub fn validate_degree(degree: usize, point_count: usize, limits: &Limits) -> Result<()> {
    if degree < limits.min_degree {
        return Err(CurveError::DegreeTooLow {
            min: limits.min_degree,
            actual: degree,
        });
    }
    if degree >= point_count {
        return Err(CurveError::DegreeNotBelowPointCount {
            degree,
            points: point_count,
        });
    }
    if let Some(max) = limits.max_degree {
        if degree > max {
            return Err(CurveError::DegreeTooHigh { max, actual: degree });
        }
    }
    Ok(())
}

pub fn validate_resolution(resolution: usize, limits: &Limits) -> Result<()> {
    if resolution < limits.min_resolution {
        return Err(CurveError::ResolutionTooLow {
            min: limits.min_resolution,
            actual: resolution,
        });
    }
    if resolution > limits.max_resolution {
        return Err(CurveError::ResolutionTooHigh {
            max: limits.max_resolution,
            actual: resolution,
        });
    }
    Ok(())
}

/// One finite, strictly positive weight per control point.
pub fn validate_weights(weights: &[f64], point_count: usize) -> Result<()> {
    if weights.len() != point_count {
        return Err(CurveError::WeightCountMismatch {
            expected: point_count,
            actual: weights.len(),
        });
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(CurveError::InvalidWeight { index, value });
    }
    Ok(())
}
