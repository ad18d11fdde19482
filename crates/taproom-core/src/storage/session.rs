use crate::error::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub finished_at: DateTime<Local>,
    pub score: u64,
    pub pours: u32,
    pub perfect: u32,
    pub good: u32,
    pub bad: u32,
    pub best_combo: u32,
    pub earned: i64,
    pub new_high_score: bool,
}

pub fn format_run_tsv_header() -> String {
    [
        "Timestamp",
        "Score",
        "Pours",
        "Perfect",
        "Good",
        "Bad",
        "BestCombo",
        "Earned",
        "HighScore",
    ]
    .join("\t")
}

pub fn format_run_tsv_row(record: &RunRecord) -> String {
    [
        record.finished_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.score.to_string(),
        record.pours.to_string(),
        record.perfect.to_string(),
        record.good.to_string(),
        record.bad.to_string(),
        record.best_combo.to_string(),
        record.earned.to_string(),
        if record.new_high_score { "yes" } else { "no" }.to_string(),
    ]
    .join("\t")
}

/// Per-session TSV log of finished runs
pub struct RunLog {
    base_dir: PathBuf,
    current_session: Option<PathBuf>,
}

impl RunLog {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            current_session: None,
        }
    }

    /// Start a session file with the header written
    pub fn start_session(&mut self) -> Result<PathBuf> {
        let now: DateTime<Local> = Local::now();
        fs::create_dir_all(&self.base_dir)?;

        let file = self
            .base_dir
            .join(format!("Session_{}.tsv", now.format("%Y_%m_%d_%H_%M_%S")));
        fs::write(&file, format!("{}\n", format_run_tsv_header()))?;

        self.current_session = Some(file.clone());
        Ok(file)
    }

    /// Append a run. Does nothing without an active session.
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        if let Some(ref path) = self.current_session {
            let mut file = fs::OpenOptions::new().append(true).open(path)?;
            writeln!(file, "{}", format_run_tsv_row(record))?;
        }
        Ok(())
    }

    pub fn current_session_path(&self) -> Option<&Path> {
        self.current_session.as_deref()
    }
}
