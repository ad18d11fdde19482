//! CLI argument definitions for taproom.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taproom")]
#[command(about = "Pour, score and shop from the terminal", version)]
pub struct Args {
    /// Save file
    #[arg(long, env = "TAPROOM_SAVE", default_value = "taproom-save.json")]
    pub save: String,

    /// Game tuning file (TOML); defaults are used if it is missing
    #[arg(long, env = "TAPROOM_CONFIG", default_value = "taproom.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show money, high score, upgrades and beers
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a single pour without touching the save
    Score {
        /// Distance from the goal line
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Jar shape (mug, cup, boot, long)
        #[arg(long, default_value = "mug")]
        jar: String,
        /// Combo count to score with
        #[arg(long, default_value = "0")]
        combo: u32,
    },
    /// Buy the next level of an upgrade
    Buy {
        /// Upgrade kind (pour-speed, jar-value-multiplier, accuracy-bonus, combo-multiplier, extra-life)
        upgrade: String,
    },
    /// Unlock a beer by name or index
    Unlock {
        beer: String,
    },
    /// Switch to an unlocked beer by name or index
    Select {
        beer: String,
    },
    /// Play a run from a list of pour distances (stdin if none given)
    Play {
        /// Jar shape for every pour
        #[arg(long, default_value = "mug")]
        jar: String,
        /// Directory for session run logs
        #[arg(long, default_value = "sessions")]
        log_dir: String,
        /// Skip the run log
        #[arg(long)]
        no_log: bool,
        /// Pour distances
        #[arg(allow_negative_numbers = true)]
        distances: Vec<f64>,
    },
}
