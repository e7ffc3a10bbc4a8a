//! # sa-core
//!
//! Shared error types for the stock-assessment model-building primitives.
//!
//! Fallible operations across the workspace (curve configuration,
//! parameter validation) return [`Result`]; the host model program decides
//! what to do with the error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};
