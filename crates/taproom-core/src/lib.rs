//! # taproom-core
//!
//! Scoring and progression engine for the Taproom pouring game.
//!
//! This crate provides:
//! - Accuracy tiers and the pour score formula (`score`)
//! - Combo and life tracking for a run (`play`)
//! - Money, upgrades and beers (`economy`)
//! - Save files and run logs (`storage`)
//! - The `Taproom` orchestrator that ties them together
//!
//! The crate does no rendering, input or timing. A host feeds it pour
//! distances and shows what comes back.

pub mod config;
pub mod economy;
pub mod error;
pub mod export;
pub mod play;
pub mod score;
pub mod storage;
pub mod taproom;

pub use config::GameConfig;
pub use economy::{BeerType, Effects, Upgrade, UpgradeEffect, UpgradeKind, Wallet};
pub use error::{Error, Result};
pub use play::{ComboEvent, ComboTracker, JarType, LifeEvent, LifeTracker, PourEvent, apply_pour};
pub use score::{
    AccuracyTier, PourResult, ScoreInput, Thresholds, TierPolicy, classify, compute_score,
};
pub use storage::{JsonFileStore, MemoryStore, RunLog, RunRecord, SaveData, SaveStore};
pub use taproom::{PourReport, Run, RunStats, Taproom};
