//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::economy::{BeerType, Upgrade, Wallet};
use crate::play::PourEvent;
use crate::score::AccuracyTier;
use crate::storage::RunRecord;
use crate::taproom::PourReport;

/// One line per pour: tier, score, money and anything notable
pub fn format_pour_line(report: &PourReport) -> String {
    let result = &report.result;
    let mut line = format!(
        "{:<5} d={:.3}  {:>8}  {:>5} pts  {:>6}  combo {}  lives {}",
        report.jar.short_name(),
        result.distance,
        format_colored_tier(&result.tier),
        result.combo_score,
        format_currency_delta(result.currency),
        report.combo,
        report.lives,
    );

    for event in &report.events {
        match event {
            PourEvent::GraceUsed => {
                let _ = write!(line, "  {}", "(warm-up)".dimmed());
            }
            PourEvent::NewHighScore(score) => {
                let _ = write!(line, "  {}", format!("NEW BEST {}", score).yellow());
            }
            PourEvent::RunEnded { final_score } => {
                let _ = write!(line, "  {}", format!("RUN OVER {}", final_score).red().bold());
            }
            _ => {}
        }
    }

    line
}

/// Boxed summary of a finished run
pub fn format_run_summary(record: &RunRecord) -> String {
    let mut output = String::new();
    let border = "━".repeat(40);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}", "LAST CALL".bold());
    let _ = writeln!(output, "{}", border_dim);
    if record.new_high_score {
        let _ = writeln!(
            output,
            "  SCORE  : {} {}",
            record.score,
            "(new best)".yellow()
        );
    } else {
        let _ = writeln!(output, "  SCORE  : {}", record.score);
    }
    let _ = writeln!(
        output,
        "  POURS  : {} ({}/{}/{})",
        record.pours,
        record.perfect.cyan(),
        record.good.green(),
        record.bad.red(),
    );
    let _ = writeln!(output, "  COMBO  : {}", record.best_combo);
    let _ = writeln!(output, "  EARNED : {}", format_currency_delta(record.earned));
    let _ = write!(output, "{}", border_dim);

    output
}

/// Wallet, upgrades and beers as a plain listing
pub fn format_status(
    wallet: &Wallet,
    upgrades: &[Upgrade],
    beers: &[BeerType],
    selected_beer: usize,
) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Money: {}   Best score: {}",
        format!("${}", wallet.money()).green(),
        wallet.max_score()
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", "Upgrades".bold());
    for upgrade in upgrades {
        let cost = if upgrade.is_maxed() {
            "MAX".dimmed().to_string()
        } else {
            format!("${}", upgrade.next_cost())
        };
        let _ = writeln!(
            output,
            "  {:<20} {:<22} Lv {}/{}  {}",
            upgrade.name,
            upgrade.kind.short_name(),
            upgrade.current_level,
            upgrade.max_level,
            cost
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", "Beers".bold());
    for (index, beer) in beers.iter().enumerate() {
        let marker = if index == selected_beer { "*" } else { " " };
        let state = if beer.is_unlocked {
            format!("{}% payout", beer.base_value)
        } else {
            format!("locked, ${}", beer.unlock_cost).dimmed().to_string()
        };
        let _ = writeln!(output, " {} {} {:<12} {}", marker, index, beer.name, state);
    }

    output
}

/// Format tier with color
fn format_colored_tier(tier: &AccuracyTier) -> String {
    match tier {
        AccuracyTier::Perfect => tier.short_name().cyan().bold().to_string(),
        AccuracyTier::Good => tier.short_name().green().to_string(),
        AccuracyTier::Bad => tier.short_name().red().to_string(),
    }
}

fn format_currency_delta(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", amount.unsigned_abs()).red().to_string()
    } else {
        format!("+${}", amount).green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{default_beers, default_upgrades};
    use crate::play::JarType;
    use crate::score::PourResult;

    fn report(events: Vec<PourEvent>) -> PourReport {
        PourReport {
            jar: JarType::Boot,
            result: PourResult {
                distance: 0.02,
                tier: AccuracyTier::Perfect,
                raw_score: 147,
                combo_score: 162,
                currency: 16,
            },
            events,
            combo: 1,
            lives: 3,
            total_score: 162,
            money: 16,
            persisted: true,
        }
    }

    #[test]
    fn test_pour_line_contents() {
        let line = format_pour_line(&report(vec![PourEvent::ComboIncremented(1)]));
        assert!(line.contains("boot"));
        assert!(line.contains("PERFECT"));
        assert!(line.contains("162"));
        assert!(line.contains("+$16"));
    }

    #[test]
    fn test_pour_line_run_over() {
        let line = format_pour_line(&report(vec![PourEvent::RunEnded { final_score: 900 }]));
        assert!(line.contains("RUN OVER 900"));
    }

    #[test]
    fn test_status_lists_catalog() {
        let mut upgrades = default_upgrades();
        upgrades[3].current_level = upgrades[3].max_level;
        let status = format_status(&Wallet::new(75, 300), &upgrades, &default_beers(), 0);

        assert!(status.contains("$75"));
        assert!(status.contains("Steady Hand"));
        assert!(status.contains("MAX"));
        assert!(status.contains("locked, $100"));
    }

    #[test]
    fn test_negative_delta() {
        assert!(format_currency_delta(-13).contains("-$13"));
    }
}
