//! [`Scalar`] trait: abstraction over `f64` and [`Dual`](crate::dual::Dual)
//! that enables writing every likelihood/selectivity/recruitment formula
//! once, then reusing it for both plain evaluation **and** forward-mode
//! gradient computation.

use crate::dual::Dual;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use statrs::function::gamma::ln_gamma;

/// A scalar type suitable for likelihood computation.
///
/// Implemented for `f64` (plain evaluation) and [`Dual`] (forward-mode AD);
/// an external optimizer can implement it for its own differentiable type.
///
/// Generic code must branch only on structural inputs (indices, lengths,
/// configuration flags) or on [`value`](Scalar::value) snapshots — never in
/// a way that applies a different formula to the differentiated argument
/// between the two instantiations, or gradients are silently wrong.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
    + PartialOrd
    + Sized
{
    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Extract the primal (function) value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Power with f64 exponent.
    fn powf(self, n: f64) -> Self;

    /// Integer power.
    fn powi(self, n: i32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Log-gamma function.
    fn ln_gamma(self) -> Self;

    /// Maximum of two values (non-smooth; passes derivative of the winner).
    fn max_s(self, other: Self) -> Self;

    /// Minimum of two values (non-smooth; passes derivative of the winner).
    fn min_s(self, other: Self) -> Self;

    /// Clamp to `[min, max]`; outside the interval the derivative is zero.
    fn clamp_s(self, min: f64, max: f64) -> Self;

    /// Exponential with the argument clamped to ±700.
    ///
    /// `exp` overflows to infinity near 710 and that infinity turns steep
    /// logistic joins into NaN tangents; clamping keeps line-search trial
    /// points finite, the same service ADMB's `mfexp` provides.
    #[inline]
    fn exp_b(self) -> Self {
        self.clamp_s(-700.0, 700.0).exp()
    }
}

// --- f64 implementation ---

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        f64::powf(self, n)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        ln_gamma(self)
    }

    #[inline]
    fn max_s(self, other: Self) -> Self {
        f64::max(self, other)
    }

    #[inline]
    fn min_s(self, other: Self) -> Self {
        f64::min(self, other)
    }

    #[inline]
    fn clamp_s(self, min: f64, max: f64) -> Self {
        f64::clamp(self, min, max)
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        Dual::powf(self, n)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        Dual::powi(self, n)
    }

    #[inline]
    fn abs(self) -> Self {
        Dual::abs(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        Dual::ln_gamma(self)
    }

    #[inline]
    fn max_s(self, other: Self) -> Self {
        Dual::max(self, other)
    }

    #[inline]
    fn min_s(self, other: Self) -> Self {
        Dual::min(self, other)
    }

    #[inline]
    fn clamp_s(self, min: f64, max: f64) -> Self {
        Dual::clamp(self, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Generic logistic, evaluated through the trait only.
    fn plogis<S: Scalar>(x: f64, mean: S, sd: S) -> S {
        S::from_f64(1.0) / (S::from_f64(1.0) + (-(S::from_f64(x) - mean) / sd).exp())
    }

    #[test]
    fn test_scalar_f64_logistic() {
        let s = plogis::<f64>(5.0, 5.0, 1.0);
        assert_relative_eq!(s, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_dual_logistic_gradient() {
        // d/dmean logistic(x; mean, sd) = -s(1-s)/sd
        let s = plogis(5.0, Dual::var(4.0), Dual::constant(2.0));
        let v = s.val;
        assert_relative_eq!(s.dot, -v * (1.0 - v) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_generic_code_agrees_across_instantiations() {
        fn kernel<S: Scalar>(x: S) -> S {
            (x * x).ln_gamma() + x.sqrt() - x.powi(2) * S::from_f64(0.25)
        }

        let plain = kernel(1.7_f64);
        let dual = kernel(Dual::var(1.7));
        assert_relative_eq!(dual.val, plain, epsilon = 1e-12);

        // Tangent against central finite difference.
        let h = 1e-6;
        let fd = (kernel(1.7 + h) - kernel(1.7 - h)) / (2.0 * h);
        assert_relative_eq!(dual.dot, fd, epsilon = 1e-5);
    }
}
