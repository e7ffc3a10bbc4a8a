//! # sa-curves
//!
//! The strategy/variant families a model author selects at configuration
//! time:
//! - age/size selectivity curves behind the [`Selex`] capability trait
//! - stock-recruitment curves behind the [`RecruitmentCurve`] tagged
//!   variant
//!
//! Curve objects are built once per model configuration and evaluated many
//! times per optimizer iteration; parameters mutate only between outer
//! iterations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod recruitment;
pub mod selectivity;

pub use recruitment::{RecruitmentCurve, RecruitmentKind};
pub use selectivity::{ExponentialLogistic, LogisticCurve, Selex, SelectivityCoefficients};
