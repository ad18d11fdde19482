use serde::{Deserialize, Serialize};

use super::tier::{AccuracyTier, Thresholds, TierPolicy, classify};

/// Everything the score formula needs for one pour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    pub distance: f64,
    pub jar_base_points: u32,
    pub jar_value_multiplier: f64,
    pub combo_count: u32,
    pub combo_multiplier: f64,
    /// Active beer value, percent of score paid out as currency
    pub beer_base_value: u32,
}

/// Outcome of a single pour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PourResult {
    pub distance: f64,
    pub tier: AccuracyTier,
    pub raw_score: i64,
    pub combo_score: i64,
    pub currency: i64,
}

/// `100 - distance * 100`. Not clamped, a miss further than 1.0 goes negative.
pub fn accuracy_percent(distance: f64) -> f64 {
    100.0 - distance * 100.0
}

/// Score multiplier for a given combo: `1 + count * multiplier / 10`
pub fn combo_factor(combo_count: u32, combo_multiplier: f64) -> f64 {
    1.0 + (combo_count as f64 * combo_multiplier / 10.0)
}

/// Run the score formula.
///
/// All rounding is half away from zero; the raw score truncates toward zero.
pub fn compute_score(
    input: &ScoreInput,
    thresholds: &Thresholds,
    policy: TierPolicy,
) -> PourResult {
    let tier = classify(input.distance, thresholds, policy);

    let accuracy = accuracy_percent(input.distance);
    let base_points = (input.jar_base_points as f64 * input.jar_value_multiplier).round();
    let raw_score = (base_points * accuracy / 100.0).trunc() as i64;
    let combo_score =
        (raw_score as f64 * combo_factor(input.combo_count, input.combo_multiplier)).round() as i64;
    let currency = (combo_score as f64 * input.beer_base_value as f64 / 100.0).round() as i64;

    PourResult {
        distance: input.distance,
        tier,
        raw_score,
        combo_score,
        currency,
    }
}
