use serde::{Deserialize, Serialize};
use tracing::info;

use super::Wallet;
use crate::error::{Error, Result};

/// A pourable beer. `base_value` is the percent of each pour's score paid
/// out as currency while this beer is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerType {
    pub name: String,
    pub base_value: u32,
    pub is_unlocked: bool,
    pub unlock_cost: u64,
}

impl BeerType {
    /// Pay `unlock_cost` and unlock. Returns the amount paid.
    pub fn unlock(&mut self, wallet: &mut Wallet) -> Result<u64> {
        if self.is_unlocked {
            return Err(Error::AlreadyUnlocked(self.name.clone()));
        }

        wallet.spend(self.unlock_cost)?;
        self.is_unlocked = true;

        info!("Unlocked {} for ${}", self.name, self.unlock_cost);
        Ok(self.unlock_cost)
    }
}

/// Beers on tap, in shop order. The first one is always unlocked.
pub fn default_beers() -> Vec<BeerType> {
    vec![
        BeerType {
            name: "Pale Lager".to_string(),
            base_value: 10,
            is_unlocked: true,
            unlock_cost: 0,
        },
        BeerType {
            name: "IPA".to_string(),
            base_value: 25,
            is_unlocked: false,
            unlock_cost: 50,
        },
        BeerType {
            name: "Stout".to_string(),
            base_value: 50,
            is_unlocked: false,
            unlock_cost: 100,
        },
    ]
}

/// Look up a beer by case-insensitive name or by index
pub fn find_beer(beers: &[BeerType], reference: &str) -> Result<usize> {
    let reference = reference.trim();

    if let Ok(index) = reference.parse::<usize>() {
        return if index < beers.len() {
            Ok(index)
        } else {
            Err(Error::InvalidBeerReference(reference.to_string()))
        };
    }

    beers
        .iter()
        .position(|b| b.name.eq_ignore_ascii_case(reference))
        .ok_or_else(|| Error::InvalidBeerReference(reference.to_string()))
}
