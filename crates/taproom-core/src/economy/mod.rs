//! Currency, upgrades and beers.
//!
//! - `Wallet` - money, run score and high score
//! - `Upgrade`, `UpgradeKind` - leveled shop upgrades
//! - `Effects` - gameplay parameters derived from upgrade levels
//! - `BeerType` - unlockable beers that set the currency payout

mod beer;
mod effects;
mod upgrade;
mod wallet;

pub use beer::*;
pub use effects::*;
pub use upgrade::*;
pub use wallet::*;
