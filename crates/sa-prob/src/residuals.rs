//! Mean/variance diagnostics for composition and length data.
//!
//! These are reporting statistics, not likelihood terms: each one snapshots
//! plain values out of possibly-differentiable predictions, so none of them
//! contribute derivatives to the objective.

use sa_ad::Scalar;

/// Small constant added to proportions before standardizing, so classes at
/// exactly 0 or 1 do not produce a zero-variance blowup.
const PROP_EPS: f64 = 1e-4;

/// Weighted mean length `sum_i p_i * mlen_i`, from the plain value of `p`.
pub fn mn_length<S: Scalar>(pobs: &[S], mlen: &[f64]) -> f64 {
    debug_assert_eq!(pobs.len(), mlen.len());
    pobs.iter().zip(mlen.iter()).map(|(p, &l)| p.value() * l).sum()
}

/// Standard deviation of length: `sqrt(sum_i p_i * mlen_i^2 - mean^2)`
/// with `mean = sum_i p_i * len_i`.
///
/// The radicand is deliberately not clamped: floating-point cancellation
/// with inconsistent `len`/`mlen` tables can make it negative, in which
/// case this returns NaN. Guarding it would silently change fitted-model
/// diagnostics, so the caller owns the consistency of the two tables.
pub fn sd_length(pobs: &[f64], len: &[f64], mlen: &[f64]) -> f64 {
    debug_assert!(pobs.len() == len.len() && pobs.len() == mlen.len());
    let mobs: f64 = pobs.iter().zip(len.iter()).map(|(&p, &l)| p * l).sum();
    let msq: f64 = pobs.iter().zip(mlen.iter()).map(|(&p, &l)| p * l * l).sum();
    (msq - mobs * mobs).sqrt()
}

/// Normalized residuals of composition data given sample size `m`:
/// `(obs - pred) / sqrt(pred (1 - pred) / m)` after the 1e-4 stabilization
/// of both vectors.
pub fn norm_res(pred: &[f64], obs: &[f64], m: f64) -> Vec<f64> {
    debug_assert_eq!(pred.len(), obs.len());
    pred.iter()
        .zip(obs.iter())
        .map(|(&p, &o)| {
            let p = p + PROP_EPS;
            let o = o + PROP_EPS;
            (o - p) / (p * (1.0 - p) / m).sqrt()
        })
        .collect()
}

/// Population standard deviation.
fn std_dev(v: &[f64]) -> f64 {
    let n = v.len() as f64;
    let mean: f64 = v.iter().sum::<f64>() / n;
    (v.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n).sqrt()
}

/// Standard deviation of the normalized residuals of a possibly
/// differentiable prediction, from its plain-value snapshot.
///
/// Matches the original routine exactly, including its double
/// stabilization: the snapshot adds 1e-4 to `pred` and [`norm_res`] adds
/// another 1e-4 to both vectors.
pub fn sd_norm_res<S: Scalar>(pred: &[S], obs: &[f64], m: f64) -> f64 {
    let pp: Vec<f64> = pred.iter().map(|p| p.value() + PROP_EPS).collect();
    std_dev(&norm_res(&pp, obs, m))
}

/// Effective sample size of composition data:
/// `1 / mean( (pobs - phat)^2 / (phat (1 - phat)) )` after stabilization.
///
/// Larger is tighter agreement between observed and predicted proportions.
pub fn eff_n<S: Scalar>(pobs: &[f64], phat: &[S]) -> f64 {
    debug_assert_eq!(pobs.len(), phat.len());
    let n = pobs.len() as f64;
    let ss: f64 = pobs
        .iter()
        .zip(phat.iter())
        .map(|(&o, p)| {
            let o = o + PROP_EPS;
            let p = p.value() + PROP_EPS;
            let r = (o - p) / (p * (1.0 - p)).sqrt();
            r * r
        })
        .sum();
    1.0 / (ss / n)
}
