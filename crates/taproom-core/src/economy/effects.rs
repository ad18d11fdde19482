use serde::{Deserialize, Serialize};

use super::{Upgrade, UpgradeEffect};

/// Global gameplay parameters derived from upgrade levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub pour_speed_base: f64,
    pub jar_value_multiplier: f64,
    pub combo_multiplier: f64,
    pub good_range_bonus: f64,
    pub perfect_range_bonus: f64,
    pub max_lives: u32,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            pour_speed_base: 6.0,
            jar_value_multiplier: 1.0,
            combo_multiplier: 1.0,
            good_range_bonus: 0.0,
            perfect_range_bonus: 0.0,
            max_lives: 3,
        }
    }
}

impl Effects {
    /// Recompute from scratch. Same levels always give the same effects.
    pub fn from_upgrades(upgrades: &[Upgrade]) -> Self {
        let mut effects = Self::default();
        for upgrade in upgrades {
            effects.apply(upgrade.effect());
        }
        effects
    }

    pub fn apply(&mut self, effect: UpgradeEffect) {
        match effect {
            UpgradeEffect::PourSpeedBase(v) => self.pour_speed_base = v,
            UpgradeEffect::JarValueMultiplier(v) => self.jar_value_multiplier = v,
            UpgradeEffect::AccuracyBonus { good, perfect } => {
                self.good_range_bonus = good;
                self.perfect_range_bonus = perfect;
            }
            UpgradeEffect::ComboMultiplier(v) => self.combo_multiplier = v,
            UpgradeEffect::MaxLives(v) => self.max_lives = v,
        }
    }

    /// Range the host draws each jar's pour speed from
    pub fn pour_speed_range(&self, spread: f64) -> (f64, f64) {
        (
            (self.pour_speed_base - spread).max(0.0),
            self.pour_speed_base + spread,
        )
    }
}
