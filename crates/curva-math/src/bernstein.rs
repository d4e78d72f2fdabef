//! Binomial coefficients and Bernstein basis polynomials.

/// Binomial coefficient `C(n, k)`.
///
/// Uses the multiplicative form so intermediate values stay close to the
/// result instead of growing like `n!`. Returns 0 when `k > n`.
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// Bernstein basis polynomial `b(n, i, t) = C(n, i) (1 - t)^(n - i) t^i`.
///
/// Meant for `t` in `[0, 1]`; the range is not checked.
pub fn bernstein_basis(n: usize, i: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial_coefficient(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32)
}
