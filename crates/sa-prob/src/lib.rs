//! # sa-prob
//!
//! Likelihood building blocks for stock-assessment models:
//! - negative log-likelihood kernels (Poisson, Gamma, Negative-Binomial,
//!   Multifan-style composition likelihood)
//! - residual/diagnostic statistics for composition data
//! - the smooth penalized-positive transform (`posfun`)
//! - piecewise-linear interpolation over ordered tables
//! - first-match integer lookup
//!
//! Every kernel is generic over [`sa_ad::Scalar`], so the same formula
//! evaluates plainly or propagates derivatives. All functions are pure; the
//! only out-parameter is the explicit [`posfun::Penalty`] accumulator.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gamma;
pub mod interp;
pub mod lookup;
pub mod multifan;
pub mod neg_binomial;
pub mod poisson;
pub mod posfun;
pub mod residuals;
