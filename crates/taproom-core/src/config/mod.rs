//! Game tuning.
//!
//! `GameConfig` holds the values a designer tweaks without touching code:
//! accuracy thresholds, tier policy, jar points. It is read from a TOML file;
//! every field is optional and falls back to the constants below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::play::JarType;
use crate::score::{Thresholds, TierPolicy};

/// Default accuracy thresholds (distance from the goal line).
pub mod accuracy {
    pub const BAD: f64 = 0.3;
    pub const GOOD: f64 = 0.15;
    pub const PERFECT: f64 = 0.05;
}

/// Default base points per jar.
pub mod jars {
    pub const MUG: u32 = 100;
    pub const CUP: u32 = 75;
    pub const BOOT: u32 = 150;
    pub const LONG: u32 = 125;
}

/// Pour speed is drawn from `base ± SPREAD` for each jar.
pub mod pour {
    pub const SPEED_SPREAD: f64 = 2.0;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    pub bad: f64,
    pub good: f64,
    pub perfect: f64,
    pub policy: TierPolicy,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            bad: accuracy::BAD,
            good: accuracy::GOOD,
            perfect: accuracy::PERFECT,
            policy: TierPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JarConfig {
    pub mug: u32,
    pub cup: u32,
    pub boot: u32,
    pub long: u32,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            mug: jars::MUG,
            cup: jars::CUP,
            boot: jars::BOOT,
            long: jars::LONG,
        }
    }
}

impl JarConfig {
    pub fn points(&self, jar: JarType) -> u32 {
        match jar {
            JarType::Mug => self.mug,
            JarType::Cup => self.cup,
            JarType::Boot => self.boot,
            JarType::Long => self.long,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub accuracy: AccuracyConfig,
    pub jars: JarConfig,
    pub pour_speed_spread: Option<f64>,
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.base_thresholds()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Thresholds before any accuracy upgrade
    pub fn base_thresholds(&self) -> Result<Thresholds> {
        Thresholds::new(self.accuracy.bad, self.accuracy.good, self.accuracy.perfect)
    }

    pub fn speed_spread(&self) -> f64 {
        self.pour_speed_spread.unwrap_or(pour::SPEED_SPREAD)
    }
}
