//! Poisson negative log-likelihood kernel.

use sa_ad::Scalar;
use statrs::function::gamma::ln_gamma;

/// Negative log-likelihood of counts `k` under Poisson rates `lambda`.
///
/// `nll = sum_i (lambda_i - k_i * ln(lambda_i) + lnGamma(k_i + 1))`,
/// minimized elementwise at `lambda_i = k_i`.
///
/// Strict positivity of `lambda` is the caller's contract and is not
/// checked. The `lnGamma(k+1)` term depends only on the data and stays
/// plain.
pub fn dpois<S: Scalar>(k: &[f64], lambda: &[S]) -> S {
    debug_assert_eq!(k.len(), lambda.len());
    let mut nll = S::from_f64(0.0);
    for (&ki, &li) in k.iter().zip(lambda.iter()) {
        nll = nll + li - S::from_f64(ki) * li.ln() + S::from_f64(ln_gamma(ki + 1.0));
    }
    nll
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sa_ad::Dual;

    #[test]
    fn test_single_observation_value() {
        // k=3, lambda=2: nll = 2 - 3 ln 2 + ln(3!)
        let nll = dpois(&[3.0], &[2.0]);
        let expected = 2.0 - 3.0 * 2.0_f64.ln() + 6.0_f64.ln();
        assert_relative_eq!(nll, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_gradient_sign_flips_at_lambda_equals_k() {
        // d nll/d lambda = 1 - k/lambda: negative below k, positive above.
        let below = dpois(&[10.0], &[Dual::var(9.0)]);
        let above = dpois(&[10.0], &[Dual::var(11.0)]);
        assert!(below.dot < 0.0);
        assert!(above.dot > 0.0);
        let at = dpois(&[10.0], &[Dual::var(10.0)]);
        assert_relative_eq!(at.dot, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dual_value_matches_plain() {
        let k = [1.0, 4.0, 0.0, 7.0];
        let lam = [2.0, 3.5, 0.5, 6.0];
        let plain = dpois(&k, &lam);
        let dual = dpois(&k, &lam.map(Dual::var));
        assert_relative_eq!(dual.val, plain, epsilon = 1e-12);
    }

    #[test]
    fn test_gradient_matches_finite_difference() {
        let k = [5.0];
        let h = 1e-6;
        let fd = (dpois(&k, &[3.0 + h]) - dpois(&k, &[3.0 - h])) / (2.0 * h);
        let grad = dpois(&k, &[Dual::var(3.0)]).dot;
        assert_relative_eq!(grad, fd, epsilon = 1e-6);
    }
}
