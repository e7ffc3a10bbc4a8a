//! Age/size selectivity curve family.
//!
//! Each curve implements the [`Selex`] capability trait so heterogeneous
//! parametric forms can be swapped without changing call sites. Curves are
//! generic over [`Scalar`], so the same object evaluates with plain or
//! derivative-propagating parameters from one formula.

use sa_ad::Scalar;
use sa_core::{Error, Result};

/// Two-parameter logistic: `1 / (1 + exp(-(x - mean) / sd))`.
///
/// The exponential is bounded so far-from-inflection classes stay finite
/// under dual evaluation.
pub fn plogis<S: Scalar>(x: f64, mean: S, sd: S) -> S {
    let one = S::from_f64(1.0);
    one / (one + (-(S::from_f64(x) - mean) / sd).exp_b())
}

/// Capability contract for selectivity curves.
///
/// The independent variable is a vector of ages or sizes; the parameters
/// live inside the implementing curve object.
pub trait Selex<S: Scalar> {
    /// Selectivity at each age/size class.
    fn selectivity(&self, x: &[f64]) -> Vec<S>;

    /// Log-selectivity at each age/size class.
    fn log_selectivity(&self, x: &[f64]) -> Vec<S> {
        self.selectivity(x).into_iter().map(|s| s.ln()).collect()
    }

    /// Log-selectivity rescaled so its mean on the natural scale is 1.
    ///
    /// Subtracting `ln(mean(exp(y)))` removes the overall scale, which is
    /// confounded with catchability and must be fixed for identifiability.
    fn log_selex_mean_one(&self, x: &[f64]) -> Vec<S> {
        let mut y = self.log_selectivity(x);
        let n = S::from_f64(y.len() as f64);
        let mean = y.iter().map(|v| v.exp()).sum::<S>() / n;
        let ln_mean = mean.ln();
        for v in &mut y {
            *v = *v - ln_mean;
        }
        y
    }
}

/// Logistic selectivity with inflection `mean` and scale `std`.
#[derive(Debug, Clone, Copy)]
pub struct LogisticCurve<S: Scalar> {
    mean: S,
    std: S,
}

impl<S: Scalar> LogisticCurve<S> {
    /// New logistic curve.
    pub fn new(mean: S, std: S) -> Self {
        Self { mean, std }
    }

    /// Inflection point.
    pub fn mean(&self) -> S {
        self.mean
    }

    /// Scale (spread) parameter.
    pub fn std(&self) -> S {
        self.std
    }

    /// Replace the parameters (between outer optimizer iterations only).
    pub fn set_params(&mut self, mean: S, std: S) {
        self.mean = mean;
        self.std = std;
    }
}

impl<S: Scalar> Selex<S> for LogisticCurve<S> {
    fn selectivity(&self, x: &[f64]) -> Vec<S> {
        x.iter().map(|&xi| plogis(xi, self.mean, self.std)).collect()
    }
}

/// Dome-shaped exponential-logistic selectivity (Thompson 1994, CJFAS).
///
/// `x1` and `x2` are the inflection points of the ascending and descending
/// limbs; `gamma` controls the descending limb. `gamma -> 0` approaches the
/// logistic shape; `gamma = 1` is mathematically undefined, and `gamma = 0`
/// makes the derived slope constant infinite, so the constructor requires
/// `0 < gamma < 1`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialLogistic<S: Scalar> {
    x1: S,
    x2: S,
    gamma: S,
}

impl<S: Scalar> ExponentialLogistic<S> {
    /// New exponential-logistic curve; rejects `gamma` outside `(0, 1)`.
    pub fn new(x1: S, x2: S, gamma: S) -> Result<Self> {
        let g = gamma.value();
        if !(0.0..1.0).contains(&g) || g == 0.0 {
            return Err(Error::Validation(format!(
                "exponential-logistic gamma must lie in (0, 1), got {g}"
            )));
        }
        Ok(Self { x1, x2, gamma })
    }

    /// Ascending-limb inflection point.
    pub fn x1(&self) -> S {
        self.x1
    }

    /// Descending-limb inflection point.
    pub fn x2(&self) -> S {
        self.x2
    }

    /// Descending-limb shape parameter.
    pub fn gamma(&self) -> S {
        self.gamma
    }
}

impl<S: Scalar> Selex<S> for ExponentialLogistic<S> {
    fn selectivity(&self, x: &[f64]) -> Vec<S> {
        let one = S::from_f64(1.0);
        let g = self.gamma;

        // Closed-form constants from the shape parameter.
        let t1 = S::from_f64(2.0) - S::from_f64(4.0) * g + S::from_f64(2.0) * g * g;
        let t3 = one + S::from_f64(2.0) * g - S::from_f64(2.0) * g * g;
        let t5 = (one + S::from_f64(4.0) * g - S::from_f64(4.0) * g * g).sqrt();

        let k1 = (t1 / (t3 + t5)).ln();
        let k2 = (t1 / (t3 - t5)).ln();
        let beta = (k1 * self.x2 - self.x1 * k2) / (k1 - k2);
        let alpha = k2 / (self.x2 - beta);

        // (1/(1-g)) * ((1-g)/g)^g, with the power taken through exp/ln so
        // the dual exponent differentiates.
        let scale = (one / (one - g)) * (g * ((one - g) / g).ln()).exp();

        x.iter()
            .map(|&xi| {
                let d = beta - S::from_f64(xi);
                scale * (alpha * g * d).exp() / (one + (alpha * d).exp())
            })
            .collect()
    }
}

/// Nonparametric per-class selectivity coefficients.
///
/// The last coefficient is held for every class beyond the estimated
/// range, so the curve is flat across the oldest/largest classes.
#[derive(Debug, Clone)]
pub struct SelectivityCoefficients<S: Scalar> {
    coeffs: Vec<S>,
}

impl<S: Scalar> SelectivityCoefficients<S> {
    /// New coefficient curve; `coeffs` must be non-empty.
    pub fn new(coeffs: Vec<S>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::Validation(
                "selectivity coefficients must be non-empty".into(),
            ));
        }
        Ok(Self { coeffs })
    }

    /// The coefficient vector.
    pub fn coeffs(&self) -> &[S] {
        &self.coeffs
    }
}

impl<S: Scalar> Selex<S> for SelectivityCoefficients<S> {
    /// Only the number of classes in `x` matters; the coefficients are
    /// indexed by class, not by the age/size values themselves.
    fn selectivity(&self, x: &[f64]) -> Vec<S> {
        let last = self.coeffs.len() - 1;
        (0..x.len()).map(|i| self.coeffs[i.min(last)]).collect()
    }
}
