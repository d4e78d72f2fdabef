//! Cox-de Boor recursive basis functions.

/// B-spline basis function `N(i, degree)` at parameter `t`.
///
/// The degree-0 case is the half-open interval `knots[i] <= t < knots[i + 1]`,
/// so a `t` equal to the final knot evaluates to 0 everywhere; use
/// [`b_spline_basis_closed`] when sampling up to the end of a clamped knot
/// vector. Zero-length knot spans contribute 0 instead of dividing by zero.
///
/// `knots` must hold at least `i + degree + 2` values.
pub fn b_spline_basis(i: usize, degree: usize, t: f64, knots: &[f64]) -> f64 {
    cox_de_boor(i, degree, t, knots, false)
}

/// Like [`b_spline_basis`], but the last non-empty knot span is closed on the
/// right when `t` equals the final knot value.
pub fn b_spline_basis_closed(i: usize, degree: usize, t: f64, knots: &[f64]) -> f64 {
    cox_de_boor(i, degree, t, knots, true)
}

fn cox_de_boor(i: usize, degree: usize, t: f64, knots: &[f64], close_end: bool) -> f64 {
    if degree == 0 {
        let (lo, hi) = (knots[i], knots[i + 1]);
        if lo <= t && t < hi {
            return 1.0;
        }
        let closes_at_end = close_end
            && lo < hi
            && knots.last().is_some_and(|&last| hi == last && t == last);
        return if closes_at_end { 1.0 } else { 0.0 };
    }

    let mut left = 0.0;
    let den_left = knots[i + degree] - knots[i];
    if den_left != 0.0 {
        left = (t - knots[i]) / den_left * cox_de_boor(i, degree - 1, t, knots, close_end);
    }

    let mut right = 0.0;
    let den_right = knots[i + degree + 1] - knots[i + 1];
    if den_right != 0.0 {
        right = (knots[i + degree + 1] - t) / den_right
            * cox_de_boor(i + 1, degree - 1, t, knots, close_end);
    }

    left + right
}
