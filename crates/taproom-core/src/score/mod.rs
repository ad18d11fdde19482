//! Pour scoring.
//!
//! This module contains the accuracy classifier and the score formula:
//! - `AccuracyTier`, `Thresholds`, `TierPolicy` - distance to tier
//! - `ScoreInput`, `PourResult` - distance to score and currency

mod calc;
mod tier;

pub use calc::*;
pub use tier::*;
