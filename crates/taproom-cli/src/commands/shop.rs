//! Shop commands: upgrades and beers.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use taproom_core::UpgradeKind;

use super::Context;

/// Buy the next level of an upgrade
pub fn buy(ctx: &Context, upgrade: &str) -> Result<()> {
    let kind =
        UpgradeKind::from_str(upgrade.trim()).map_err(|_| anyhow!("Unknown upgrade: {}", upgrade))?;
    let mut taproom = ctx.open()?;
    let paid = taproom.purchase_upgrade(kind)?;

    if let Some(bought) = taproom.upgrades().iter().find(|u| u.kind == kind) {
        println!(
            "{} is now level {}/{} (paid ${})",
            bought.name, bought.current_level, bought.max_level, paid
        );
    }
    println!("Money left: ${}", taproom.wallet().money());
    Ok(())
}

/// Unlock a beer and start pouring it
pub fn unlock(ctx: &Context, beer: &str) -> Result<()> {
    let mut taproom = ctx.open()?;
    let paid = taproom.unlock_beer(beer)?;

    println!(
        "Unlocked {} for ${}, now pouring it",
        taproom.selected_beer().name,
        paid
    );
    println!("Money left: ${}", taproom.wallet().money());
    Ok(())
}

/// Switch to an already unlocked beer
pub fn select(ctx: &Context, beer: &str) -> Result<()> {
    let mut taproom = ctx.open()?;
    taproom.select_beer(beer)?;

    println!("Now pouring {}", taproom.selected_beer().name);
    Ok(())
}
