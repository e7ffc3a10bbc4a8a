//! Smooth penalized-positive transform.
//!
//! `posfun` keeps model quantities away from zero/negative values without a
//! hard clamp: a clamp has zero derivative below the floor and stalls the
//! optimizer, whereas the rational substitute stays smooth through the
//! boundary. Every element below the floor also accumulates a quadratic
//! penalty that the host adds to the total objective, which is what pushes
//! the optimizer back into the admissible region.

use sa_ad::Scalar;

/// Explicit penalty accumulator threaded through `posfun` call sites.
///
/// The host creates one per objective evaluation, passes it to every
/// `posfun` call, and adds [`total`](Penalty::total) to the objective at
/// the end of the pass. The accumulated value is differentiable.
#[derive(Debug, Clone, Copy)]
pub struct Penalty<S: Scalar> {
    total: S,
}

impl<S: Scalar> Penalty<S> {
    /// Fresh accumulator at zero.
    pub fn new() -> Self {
        Self { total: S::from_f64(0.0) }
    }

    /// Add a penalty contribution.
    #[inline]
    pub fn add(&mut self, amount: S) {
        self.total = self.total + amount;
    }

    /// Accumulated penalty.
    pub fn total(&self) -> S {
        self.total
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: Penalty<S>) {
        self.total = self.total + other.total;
    }
}

impl<S: Scalar> Default for Penalty<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Penalized-positive transform of `x` with floor `eps`.
///
/// Elements at or above `eps` pass through unchanged with no penalty.
/// Elements below it are replaced by the smooth substitute
/// `eps / (2 - x/eps)` (continuous and differentiable at the boundary,
/// strictly positive for all `x`) and contribute `0.01 (x - eps)^2` to the
/// accumulator.
pub fn posfun<S: Scalar>(x: &[S], eps: f64, pen: &mut Penalty<S>) -> Vec<S> {
    let eps_s = S::from_f64(eps);
    x.iter()
        .map(|&xi| {
            if xi.value() >= eps {
                xi
            } else {
                let d = xi - eps_s;
                pen.add(S::from_f64(0.01) * d * d);
                eps_s / (S::from_f64(2.0) - xi / eps_s)
            }
        })
        .collect()
}
