use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use tracing::debug;

use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    IntoStaticStr,
)]
pub enum AccuracyTier {
    #[default]
    #[strum(serialize = "BAD")]
    Bad,
    #[strum(serialize = "GOOD")]
    Good,
    #[strum(serialize = "PERFECT")]
    Perfect,
}

impl AccuracyTier {
    /// Good and Perfect both keep the combo alive
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::Bad)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// How the middle band between `perfect` and `bad` is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TierPolicy {
    /// `[perfect, good)` is Good, anything at or past `good` is Bad.
    #[default]
    Strict,
    /// `[perfect, bad)` is Good, only `bad` and beyond is Bad.
    Lenient,
}

/// Distance cut-offs for the accuracy bands, `perfect < good < bad`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    bad: f64,
    good: f64,
    perfect: f64,
}

impl Thresholds {
    pub fn new(bad: f64, good: f64, perfect: f64) -> Result<Self> {
        let ordered = perfect >= 0.0 && perfect < good && good < bad;
        if !ordered || !bad.is_finite() {
            return Err(Error::InvalidThresholds { bad, good, perfect });
        }
        Ok(Self { bad, good, perfect })
    }

    /// Apply accuracy upgrade bonuses. Both bands grow, `bad` stays put.
    ///
    /// A band never grows past the one above it: `good` stops just short of
    /// `bad` and `perfect` just short of the widened `good`, so the result is
    /// always ordered.
    pub fn widened(&self, good_bonus: f64, perfect_bonus: f64) -> Self {
        let good = (self.good + good_bonus.max(0.0)).min(just_below(self.bad));
        let perfect = (self.perfect + perfect_bonus.max(0.0)).min(just_below(good));
        if good < self.good + good_bonus || perfect < self.perfect + perfect_bonus {
            debug!(
                "Accuracy bonus capped: good {:.4}, perfect {:.4} (bad {:.4})",
                good, perfect, self.bad
            );
        }
        Self {
            bad: self.bad,
            good,
            perfect,
        }
    }

    pub fn bad(&self) -> f64 {
        self.bad
    }

    pub fn good(&self) -> f64 {
        self.good
    }

    pub fn perfect(&self) -> f64 {
        self.perfect
    }
}

/// Largest `f64` strictly below a positive finite `x`
fn just_below(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

/// Classify a pour distance into an accuracy tier.
///
/// Boundary values belong to the less accurate band: a distance exactly on
/// `perfect` is Good, exactly on the Bad cut-off is Bad. Every band is the
/// half-open interval `[lower, upper)`, so a distance on a boundary is never
/// promoted to the higher-accuracy tier.
pub fn classify(distance: f64, thresholds: &Thresholds, policy: TierPolicy) -> AccuracyTier {
    let bad_from = match policy {
        TierPolicy::Strict => thresholds.good,
        TierPolicy::Lenient => thresholds.bad,
    };

    if distance >= bad_from {
        AccuracyTier::Bad
    } else if distance >= thresholds.perfect {
        AccuracyTier::Good
    } else {
        AccuracyTier::Perfect
    }
}
