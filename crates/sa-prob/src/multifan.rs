//! Multifan-style robustified composition likelihood.
//!
//! The robust normal-mixture likelihood for proportions-at-length data of
//! Fournier et al. (1990), as used in MULTIFAN-CL. The `0.1/I` variance
//! floor keeps the binomial variance term away from zero at proportions of
//! exactly 0 or 1, and the `+0.01` mixture constant fattens the tails so a
//! few aberrant classes do not dominate the objective.

use sa_ad::Scalar;

/// Negative log-likelihood of observed counts `o` against predicted
/// proportions `p`, with minimum effective sample size `s`.
///
/// Both vectors are normalized internally; `o` are raw counts, `p` need not
/// sum to one. If `min(sum(o), s) <= 0` the sample carries no information
/// and the contribution is exactly zero.
pub fn dmultifan<S: Scalar>(o: &[f64], p: &[S], s: f64) -> S {
    debug_assert_eq!(o.len(), p.len());
    let classes = o.len() as f64;
    let n: f64 = o.iter().sum();
    if n.min(s) <= 0.0 {
        return S::from_f64(0.0);
    }
    let tau = 1.0 / n.min(s);
    let floor = S::from_f64(0.1 / classes);
    let half = S::from_f64(0.5);
    let one = S::from_f64(1.0);
    let two_pi = S::from_f64(2.0 * std::f64::consts::PI);

    let p_sum: S = p.iter().copied().sum();

    let mut t1 = S::from_f64(0.0);
    let mut t3 = S::from_f64(0.0);
    for (&oi, &pi_raw) in o.iter().zip(p.iter()) {
        let obs = S::from_f64(oi / n);
        let pred = pi_raw / p_sum;
        let eps = (one - pred) * pred + floor;
        t1 = t1 - half * (two_pi * eps).ln();
        let resid = obs - pred;
        let z = -(resid * resid) / (S::from_f64(2.0 * tau) * eps);
        t3 = t3 + (z.exp() + S::from_f64(0.01)).ln();
    }
    let t2 = S::from_f64(-0.5 * classes * tau.ln());

    -(t1 + t2 + t3)
}
