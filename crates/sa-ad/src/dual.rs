//! Forward-mode automatic differentiation via dual numbers.
//!
//! A [`Dual`] carries a primal value and a tangent; arithmetic propagates
//! both, so any formula written against it yields the directional
//! derivative along whichever input was seeded with [`Dual::var`].

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use statrs::function::gamma::{digamma, ln_gamma};

/// A dual number for forward-mode AD.
///
/// `val` holds the primal value, `dot` holds the derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value.
    pub val: f64,
    /// Tangent (derivative) value.
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0).
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Self {
        Self { val: self.val.ln(), dot: self.dot / self.val }
    }

    /// Exponential: d/dx exp(x) = exp(x).
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.val.exp();
        Self { val: e, dot: self.dot * e }
    }

    /// Square root: d/dx sqrt(x) = 1/(2*sqrt(x)).
    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.val.sqrt();
        Self { val: s, dot: self.dot / (2.0 * s) }
    }

    /// Power with f64 exponent: d/dx x^n = n * x^(n-1).
    #[inline]
    pub fn powf(self, n: f64) -> Self {
        Self { val: self.val.powf(n), dot: self.dot * n * self.val.powf(n - 1.0) }
    }

    /// Integer power: d/dx x^n = n * x^(n-1).
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        Self { val: self.val.powi(n), dot: self.dot * (n as f64) * self.val.powi(n - 1) }
    }

    /// Absolute value: d/dx |x| = sign(x).
    #[inline]
    pub fn abs(self) -> Self {
        Self { val: self.val.abs(), dot: self.dot * self.val.signum() }
    }

    /// Log-gamma: d/dx lnGamma(x) = digamma(x).
    #[inline]
    pub fn ln_gamma(self) -> Self {
        Self { val: ln_gamma(self.val), dot: self.dot * digamma(self.val) }
    }

    /// Maximum of two duals. Derivative follows the larger operand.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.val >= other.val { self } else { other }
    }

    /// Minimum of two duals. Derivative follows the smaller operand.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.val <= other.val { self } else { other }
    }

    /// Clamp value to [min, max], propagating derivative correctly.
    #[inline]
    pub fn clamp(self, min: f64, max: f64) -> Self {
        if self.val < min {
            Self::constant(min)
        } else if self.val > max {
            Self::constant(max)
        } else {
            self
        }
    }
}

// --- Arithmetic: Dual op Dual ---

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

// --- Sum ---

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

// --- From ---

impl From<f64> for Dual {
    fn from(val: f64) -> Self {
        Self::constant(val)
    }
}

// --- PartialOrd ---

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_has_zero_derivative() {
        let c = Dual::constant(5.0);
        assert_eq!(c.val, 5.0);
        assert_eq!(c.dot, 0.0);
    }

    #[test]
    fn test_var_has_unit_derivative() {
        let x = Dual::var(3.0);
        assert_eq!(x.val, 3.0);
        assert_eq!(x.dot, 1.0);
    }

    #[test]
    fn test_ln_derivative() {
        // d/dx ln(x) = 1/x
        let y = Dual::var(2.0).ln();
        assert_relative_eq!(y.val, 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(y.dot, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_derivative() {
        // d/dx exp(x) = exp(x)
        let y = Dual::var(1.0).exp();
        assert_relative_eq!(y.val, 1.0_f64.exp(), epsilon = 1e-12);
        assert_relative_eq!(y.dot, 1.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_div_quotient_rule() {
        // d/dx (x / (x+1)) = 1/(x+1)^2
        let x = Dual::var(3.0);
        let y = x / (x + Dual::constant(1.0));
        assert_relative_eq!(y.val, 0.75, epsilon = 1e-12);
        assert_relative_eq!(y.dot, 1.0 / 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sqrt_derivative() {
        let y = Dual::var(4.0).sqrt();
        assert_relative_eq!(y.val, 2.0, epsilon = 1e-12);
        assert_relative_eq!(y.dot, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_ln_gamma_derivative_matches_digamma() {
        let y = Dual::var(3.7).ln_gamma();
        assert_relative_eq!(y.val, ln_gamma(3.7), epsilon = 1e-12);
        assert_relative_eq!(y.dot, digamma(3.7), epsilon = 1e-12);
    }

    #[test]
    fn test_ln_gamma_finite_difference() {
        let x = 2.3;
        let h = 1e-6;
        let fd = (ln_gamma(x + h) - ln_gamma(x - h)) / (2.0 * h);
        let y = Dual::var(x).ln_gamma();
        assert_relative_eq!(y.dot, fd, epsilon = 1e-6);
    }

    #[test]
    fn test_max_follows_winner() {
        let a = Dual::new(1.0, 5.0);
        let b = Dual::new(2.0, 7.0);
        assert_eq!(a.max(b).dot, 7.0);
        assert_eq!(a.min(b).dot, 5.0);
    }

    #[test]
    fn test_clamp_kills_derivative_outside() {
        let x = Dual::var(10.0);
        let y = x.clamp(0.0, 5.0);
        assert_eq!(y.val, 5.0);
        assert_eq!(y.dot, 0.0);
        let z = Dual::var(3.0).clamp(0.0, 5.0);
        assert_eq!(z.dot, 1.0);
    }
}
