//! Point and polyline helpers shared by the curve algorithms.

use crate::Point2;

/// Linear interpolation `(1 - t) a + t b`.
///
/// Written in weighted form so `t = 0` and `t = 1` reproduce the endpoints
/// exactly.
#[inline]
pub fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a * (1.0 - t) + b * t
}

/// Whether both coordinates are finite (neither NaN nor infinite).
#[inline]
pub fn is_finite_point(p: Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Largest pointwise distance between two polylines of equal length.
///
/// Returns `None` when the lengths differ.
pub fn max_deviation(a: &[Point2], b: &[Point2]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .map(|(p, q)| p.distance(*q))
            .fold(0.0, f64::max),
    )
}
