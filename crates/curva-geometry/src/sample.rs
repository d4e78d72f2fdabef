//! Fixed-resolution sampling of curves into polylines.

use curva_math::Point2;

use crate::curve::Curve;

/// Ordered output points; consecutive points form the polyline.
pub type CurveSample = Vec<Point2>;

/// Evaluate `curve` at `resolution + 1` evenly spaced parameters spanning
/// its domain.
///
/// The last parameter is pinned to the domain end rather than computed, so
/// rounding never lands it just inside or outside the final knot.
pub fn sample_curve(curve: &dyn Curve, resolution: usize) -> CurveSample {
    let (t_min, t_max) = curve.domain();
    if resolution == 0 {
        return vec![curve.point_at(t_min)];
    }

    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let t = t_min + (t_max - t_min) * (i as f64 / resolution as f64);
        points.push(curve.point_at(t));
    }
    points.push(curve.point_at(t_max));
    points
}
