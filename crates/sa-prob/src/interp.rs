//! Piecewise-linear interpolation over a monotone ordered table.
//!
//! Ported from the R-style `approx` routine used throughout assessment
//! models. The boundary policy is part of the fitted-model numerics and is
//! reproduced exactly: values below the first knot clamp to `min(y)`, and
//! the out-of-domain comparison on the right is made against the
//! *second-to-last* knot, so anything beyond `x[n-2]` clamps to `max(y)`.
//! Do not "fix" this comparison; every downstream model depends on it.

use sa_ad::Scalar;

#[inline]
fn vec_min<S: Scalar>(y: &[S]) -> S {
    y.iter().copied().fold(y[0], |a, b| a.min_s(b))
}

#[inline]
fn vec_max<S: Scalar>(y: &[S]) -> S {
    y.iter().copied().fold(y[0], |a, b| a.max_s(b))
}

/// Approximate `y(v)` given knots `(x[i], y[i])`, `i = 0..n-1`.
///
/// `x` must be sorted ascending with `n >= 2` and `y.len() == x.len()`;
/// this is the caller's contract and is not re-validated (a violation
/// yields wrong results, not an error). Generic over the `y` scalar, so
/// the knot values may carry derivatives while the abscissae stay plain.
///
/// O(log n), no allocation.
pub fn approx1<S: Scalar>(v: f64, x: &[f64], y: &[S]) -> S {
    debug_assert!(x.len() >= 2 && x.len() == y.len());

    let mut i = 0usize;
    let mut j = x.len() - 2;

    // Out-of-domain points clamp to the extreme knot values.
    if v < x[i] {
        return vec_min(y);
    }
    if v > x[j] {
        return vec_max(y);
    }

    // Bisection, maintaining x[i] <= v <= x[j].
    while i + 1 < j {
        let ij = (i + j) / 2;
        if v < x[ij] {
            j = ij;
        } else {
            i = ij;
        }
    }

    // Exact-knot short circuits also guard coincident adjacent knots.
    if v == x[j] {
        return y[j];
    }
    if v == x[i] {
        return y[i];
    }

    y[i] + (y[j] - y[i]) * S::from_f64((v - x[i]) / (x[j] - x[i]))
}

/// Piecewise-linear approximation of each entry of `xout`, independently.
pub fn linapprox<S: Scalar>(x: &[f64], y: &[S], xout: &[f64]) -> Vec<S> {
    xout.iter().map(|&v| approx1(v, x, y)).collect()
}
