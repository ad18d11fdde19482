//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod play;
pub mod score;
pub mod shop;
pub mod status;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result, anyhow};
use taproom_core::{GameConfig, JarType, JsonFileStore, Taproom};

/// Paths and tuning shared by every command
pub struct Context {
    pub save_path: PathBuf,
    pub config: GameConfig,
}

impl Context {
    pub fn new(save: &str, config: &str) -> Self {
        Self {
            save_path: PathBuf::from(save),
            config: GameConfig::load_or_default(config),
        }
    }

    /// Load the save behind this context
    pub fn open(&self) -> Result<Taproom<JsonFileStore>> {
        Taproom::open(self.config.clone(), JsonFileStore::new(&self.save_path))
            .with_context(|| format!("Failed to open save {:?}", self.save_path))
    }
}

pub fn parse_jar(name: &str) -> Result<JarType> {
    JarType::from_str(name.trim()).map_err(|_| anyhow!("Unknown jar: {}", name))
}
