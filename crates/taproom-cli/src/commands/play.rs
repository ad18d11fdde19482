//! Play a run from pour distances.

use std::io::{self, BufRead};

use anyhow::{Context as _, Result};
use taproom_core::RunLog;
use taproom_core::export::{format_pour_line, format_run_summary};
use tracing::warn;

use super::{Context, parse_jar};

/// Pour each distance in order until the input runs out or the run ends
pub fn run(ctx: &Context, jar: &str, log_dir: Option<&str>, distances: Vec<f64>) -> Result<()> {
    let jar = parse_jar(jar)?;
    let distances = if distances.is_empty() {
        read_distances(io::stdin().lock())?
    } else {
        distances
    };

    let mut log = log_dir.map(RunLog::new);
    if let Some(log) = log.as_mut() {
        if let Err(e) = log.start_session() {
            warn!("Failed to start run log: {}", e);
        }
    }

    let mut taproom = ctx.open()?;
    taproom.start_run()?;

    for distance in distances {
        let report = match taproom.pour(jar, distance) {
            Ok(report) => report,
            Err(e) => {
                warn!("Skipping pour {}: {}", distance, e);
                continue;
            }
        };
        println!("{}", format_pour_line(&report));
        if report.run_ended() {
            break;
        }
    }

    if let Some(record) = taproom.finish_run() {
        println!("{}", format_run_summary(&record));
        if let Some(log) = log.as_ref() {
            log.append(&record)?;
        }
    }
    Ok(())
}

/// One distance per line; blank lines and `#` comments are skipped
fn read_distances<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut distances = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let distance = line
            .parse::<f64>()
            .with_context(|| format!("Line {}: not a distance: {:?}", number + 1, line))?;
        distances.push(distance);
    }
    Ok(distances)
}
