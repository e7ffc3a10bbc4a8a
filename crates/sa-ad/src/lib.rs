//! # sa-ad
//!
//! Automatic differentiation (AD) primitives for the stock-assessment
//! likelihood kernels.
//!
//! Provides:
//! - **Forward-mode AD** via [`dual::Dual`] numbers
//! - The [`Scalar`] trait for writing every likelihood formula once and
//!   instantiating it for plain `f64` evaluation and for gradient
//!   propagation
//!
//! An external optimizer that supplies its own differentiable scalar can
//! implement [`Scalar`] for it and reuse every kernel unchanged.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dual;
pub mod scalar;

pub use dual::Dual;
pub use scalar::Scalar;
