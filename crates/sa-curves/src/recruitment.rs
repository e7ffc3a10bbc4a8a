//! Stock-recruitment curve family.
//!
//! A curve is selected once at model-configuration time via
//! [`RecruitmentKind`] and evaluated per spawning-biomass input inside the
//! optimizer loop. Every variant adds `0.1` to the current spawning
//! biomass before any division, which keeps the formulas away from the
//! zero-biomass singularity during line searches.

use sa_ad::Scalar;
use sa_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Additive robustification of the current spawning biomass.
const SPB_ROBUST: f64 = 0.1;

/// Steep logistic blend stitching two regimes together smoothly.
///
/// `join = 1 / (1 + exp(1000 (x - inflection) / (max_poss - min_poss)))`,
/// returning `y1 * join + y2 * (1 - join)`. The slope constant 1000 makes
/// the transition sharp while keeping the result differentiable, unlike a
/// piecewise switch at the inflection.
pub fn join_fxn<S: Scalar>(min_poss: S, max_poss: S, inflection: S, x: S, y1: S, y2: S) -> S {
    let one = S::from_f64(1.0);
    let join =
        one / (one + (S::from_f64(1000.0) * (x - inflection) / (max_poss - min_poss)).exp_b());
    y1 * join + y2 * (one - join)
}

/// Stock-recruitment curve discriminator, as selected in host model
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecruitmentKind {
    /// No recruitment dynamics; passes the (robustified) biomass through.
    None,
    /// Ricker curve.
    Ricker,
    /// Steepness-parameterized Beverton-Holt curve.
    BevertonHolt,
    /// Beverton-Holt with biomass clamped at the virgin level.
    BevertonHoltConstrained,
    /// Linear decline below a breakpoint, blended into the virgin plateau.
    HockeyStick,
    /// Survival-based recruitment; declared but not implemented.
    Survival,
    /// Removed option kept only to produce a pointed configuration error.
    PreviousPlacement,
}

/// A configured stock-recruitment curve.
///
/// Built once per model configuration; read-only during evaluation, so it
/// may be shared across call sites while the host externally synchronizes
/// parameter updates between outer optimizer iterations.
#[derive(Debug, Clone, Copy)]
pub struct RecruitmentCurve<S: Scalar> {
    kind: RecruitmentKind,
    recr_virgin: S,
    spb_virgin: S,
    steepness: S,
    sr_parm: Option<S>,
}

impl<S: Scalar> RecruitmentCurve<S> {
    /// Configure a recruitment curve.
    ///
    /// `sr_parm` is the hockey-stick breakpoint fraction and is required
    /// for that variant only. Selecting [`RecruitmentKind::PreviousPlacement`]
    /// is a fatal configuration error: the option was removed and its
    /// behavior now lives under the Beverton-Holt-constrained variant.
    pub fn new(
        kind: RecruitmentKind,
        recr_virgin: S,
        spb_virgin: S,
        steepness: S,
        sr_parm: Option<S>,
    ) -> Result<Self> {
        match kind {
            RecruitmentKind::PreviousPlacement => {
                tracing::error!(
                    "recruitment option 'previous placement' was removed; \
                     the B-H constrained curve is now Spawn-Recr option 6"
                );
                Err(Error::Config(
                    "recruitment option 'previous placement' was removed; \
                     use the Beverton-Holt constrained curve (Spawn-Recr option 6)"
                        .into(),
                ))
            }
            RecruitmentKind::HockeyStick if sr_parm.is_none() => Err(Error::Config(
                "hockey-stick recruitment requires the breakpoint parameter".into(),
            )),
            _ => Ok(Self { kind, recr_virgin, spb_virgin, steepness, sr_parm }),
        }
    }

    /// The configured curve variant.
    pub fn kind(&self) -> RecruitmentKind {
        self.kind
    }

    /// Recruitment at the current spawning biomass.
    ///
    /// [`RecruitmentKind::Survival`] fails with
    /// [`Error::NotImplemented`] rather than returning a placeholder a
    /// caller might mistake for a real value.
    pub fn recruit(&self, spb_current: S) -> Result<S> {
        let one = S::from_f64(1.0);
        let spb = spb_current + S::from_f64(SPB_ROBUST);
        let r0 = self.recr_virgin;
        let s0 = self.spb_virgin;
        let h = self.steepness;

        match self.kind {
            RecruitmentKind::None => Ok(spb),
            RecruitmentKind::Ricker => Ok(r0 * spb / s0 * (h * (one - spb / s0)).exp()),
            RecruitmentKind::BevertonHolt => Ok(self.beverton_holt(spb)),
            RecruitmentKind::BevertonHoltConstrained => Ok(self.beverton_holt(spb.min_s(s0))),
            RecruitmentKind::HockeyStick => {
                // Linear decrease below steepness * SPB_virgin, joined to
                // the virgin-recruitment plateau above it.
                let p = self.sr_parm.ok_or_else(|| {
                    Error::Config(
                        "hockey-stick recruitment requires the breakpoint parameter".into(),
                    )
                })?;
                let low = p * r0 + spb / (h * s0) * (r0 - p * r0);
                Ok(join_fxn(S::from_f64(0.0) * s0, s0, h * s0, spb, low, r0))
            }
            RecruitmentKind::Survival => {
                tracing::error!("survival-based recruitment is not yet implemented");
                Err(Error::NotImplemented("survival-based recruitment".into()))
            }
            // Unreachable through the constructor; kept as a hard error
            // rather than a panic for robustness.
            RecruitmentKind::PreviousPlacement => Err(Error::Config(
                "recruitment option 'previous placement' was removed".into(),
            )),
        }
    }

    /// Steepness-parameterized Beverton-Holt:
    /// `4 h R0 S / (S0 (1 - h) + (5h - 1) S)`.
    fn beverton_holt(&self, spb: S) -> S {
        let one = S::from_f64(1.0);
        let r0 = self.recr_virgin;
        let s0 = self.spb_virgin;
        let h = self.steepness;
        (S::from_f64(4.0) * h * r0 * spb)
            / (s0 * (one - h) + (S::from_f64(5.0) * h - one) * spb)
    }
}
