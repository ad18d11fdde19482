//! Status command implementation.

use anyhow::Result;
use serde_json::json;
use taproom_core::export::format_status;

use super::Context;

/// Run the status command
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let taproom = ctx.open()?;
    let (speed_min, speed_max) = taproom
        .effects()
        .pour_speed_range(ctx.config.speed_spread());

    if json {
        let status = json!({
            "money": taproom.wallet().money(),
            "max_score": taproom.wallet().max_score(),
            "selected_beer": taproom.selected_beer().name,
            "effects": taproom.effects(),
            "pour_speed_range": [speed_min, speed_max],
            "upgrades": taproom.upgrades(),
            "beers": taproom.beers(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    print!(
        "{}",
        format_status(
            taproom.wallet(),
            taproom.upgrades(),
            taproom.beers(),
            taproom.selected_beer_index(),
        )
    );
    println!(
        "\nPour speed {:.1}-{:.1}, {} lives per run",
        speed_min,
        speed_max,
        taproom.effects().max_lives
    );
    Ok(())
}
