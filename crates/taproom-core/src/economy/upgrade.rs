use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::info;

use super::Wallet;
use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum UpgradeKind {
    PourSpeed,
    JarValueMultiplier,
    AccuracyBonus,
    ComboMultiplier,
    ExtraLife,
}

impl UpgradeKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Derived parameter produced by an upgrade at its current level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    PourSpeedBase(f64),
    JarValueMultiplier(f64),
    AccuracyBonus { good: f64, perfect: f64 },
    ComboMultiplier(f64),
    MaxLives(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    pub name: String,
    pub description: String,
    pub base_cost: u64,
    pub cost_increase_per_level: u64,
    pub current_level: u32,
    pub max_level: u32,
    pub base_value: f64,
    pub value_increase_per_level: f64,
}

impl Upgrade {
    /// `base_cost + cost_increase_per_level * current_level`
    pub fn next_cost(&self) -> u64 {
        self.base_cost + self.cost_increase_per_level * self.current_level as u64
    }

    pub fn is_maxed(&self) -> bool {
        self.current_level >= self.max_level
    }

    /// Buy the next level. Returns the amount paid.
    pub fn purchase(&mut self, wallet: &mut Wallet) -> Result<u64> {
        if self.is_maxed() {
            return Err(Error::MaxLevelReached {
                name: self.name.clone(),
                max: self.max_level,
            });
        }

        let cost = self.next_cost();
        wallet.spend(cost)?;
        self.current_level += 1;

        info!(
            "Purchased {} level {}/{} for ${}",
            self.name, self.current_level, self.max_level, cost
        );
        Ok(cost)
    }

    /// Set the level from saved data, clamped to `max_level`
    pub fn restore_level(&mut self, level: u32) {
        self.current_level = level.min(self.max_level);
    }

    /// Effect at the current level. Depends on the level only, never on
    /// how the level was reached.
    pub fn effect(&self) -> UpgradeEffect {
        let level = self.current_level as f64;
        let step = self.value_increase_per_level * level;

        match self.kind {
            UpgradeKind::PourSpeed => UpgradeEffect::PourSpeedBase(self.base_value + step),
            UpgradeKind::JarValueMultiplier => UpgradeEffect::JarValueMultiplier(1.0 + step),
            UpgradeKind::AccuracyBonus => UpgradeEffect::AccuracyBonus {
                good: step,
                perfect: self.value_increase_per_level / 2.0 * level,
            },
            UpgradeKind::ComboMultiplier => UpgradeEffect::ComboMultiplier(1.0 + step),
            UpgradeKind::ExtraLife => {
                UpgradeEffect::MaxLives((self.base_value + step).round().max(1.0) as u32)
            }
        }
    }
}

/// The upgrades on sale in the shop, in shop order
pub fn default_upgrades() -> Vec<Upgrade> {
    vec![
        Upgrade {
            kind: UpgradeKind::PourSpeed,
            name: "Steady Hand".to_string(),
            description: "Increases pouring speed for faster filling".to_string(),
            base_cost: 50,
            cost_increase_per_level: 100,
            current_level: 0,
            max_level: 5,
            base_value: 6.0,
            value_increase_per_level: 0.5,
        },
        Upgrade {
            kind: UpgradeKind::JarValueMultiplier,
            name: "Premium Glassware".to_string(),
            description: "Increases the value of all pours by 10% per level".to_string(),
            base_cost: 200,
            cost_increase_per_level: 250,
            current_level: 0,
            max_level: 5,
            base_value: 1.0,
            value_increase_per_level: 0.1,
        },
        Upgrade {
            kind: UpgradeKind::AccuracyBonus,
            name: "Pouring Precision".to_string(),
            description: "Makes it easier to hit 'Good' and 'Perfect' ranges".to_string(),
            base_cost: 100,
            cost_increase_per_level: 200,
            current_level: 0,
            max_level: 5,
            base_value: 0.0,
            value_increase_per_level: 0.025,
        },
        Upgrade {
            kind: UpgradeKind::ComboMultiplier,
            name: "Combo Master".to_string(),
            description: "Increases the bonus for combos by 10% per level".to_string(),
            base_cost: 150,
            cost_increase_per_level: 300,
            current_level: 0,
            max_level: 3,
            base_value: 1.0,
            value_increase_per_level: 0.1,
        },
        Upgrade {
            kind: UpgradeKind::ExtraLife,
            name: "Extra Pint".to_string(),
            description: "Adds one life per level".to_string(),
            base_cost: 500,
            cost_increase_per_level: 500,
            current_level: 0,
            max_level: 2,
            base_value: 3.0,
            value_increase_per_level: 1.0,
        },
    ]
}
