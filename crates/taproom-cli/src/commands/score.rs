//! Score a hypothetical pour with the current upgrades and beer.

use anyhow::{Result, bail};
use taproom_core::{ScoreInput, compute_score};

use super::{Context, parse_jar};

pub fn run(ctx: &Context, distance: f64, jar: &str, combo: u32) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        bail!("Distance must be a non-negative number, got {}", distance);
    }
    let jar = parse_jar(jar)?;
    let taproom = ctx.open()?;
    let effects = taproom.effects();

    let thresholds = ctx
        .config
        .base_thresholds()?
        .widened(effects.good_range_bonus, effects.perfect_range_bonus);
    let input = ScoreInput {
        distance,
        jar_base_points: ctx.config.jars.points(jar),
        jar_value_multiplier: effects.jar_value_multiplier,
        combo_count: combo,
        combo_multiplier: effects.combo_multiplier,
        beer_base_value: taproom.selected_beer().base_value,
    };
    let result = compute_score(&input, &thresholds, ctx.config.accuracy.policy);

    println!("Tier     : {}", result.tier);
    println!("Raw      : {}", result.raw_score);
    println!("Combo x{} : {}", combo, result.combo_score);
    println!("Currency : ${} ({})", result.currency, taproom.selected_beer().name);
    Ok(())
}
