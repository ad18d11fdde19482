mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taproom_cli=warn,taproom_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ctx = commands::Context::new(&args.save, &args.config);

    match args.command {
        Command::Status { json } => commands::status::run(&ctx, json),
        Command::Score {
            distance,
            jar,
            combo,
        } => commands::score::run(&ctx, distance, &jar, combo),
        Command::Buy { upgrade } => commands::shop::buy(&ctx, &upgrade),
        Command::Unlock { beer } => commands::shop::unlock(&ctx, &beer),
        Command::Select { beer } => commands::shop::select(&ctx, &beer),
        Command::Play {
            jar,
            log_dir,
            no_log,
            distances,
        } => commands::play::run(&ctx, &jar, (!no_log).then_some(log_dir.as_str()), distances),
    }
}
