use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::economy::{BeerType, Effects, Upgrade};
use crate::error::Result;

/// Everything that survives between sessions.
///
/// Upgrade levels and beer flags are stored by catalog position. The derived
/// `effects` are written for other readers of the save, but are always
/// recomputed from the levels on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    pub money: u64,
    pub max_score: u64,
    pub upgrade_levels: Vec<u32>,
    pub beers_unlocked: Vec<bool>,
    pub selected_beer: usize,
    pub effects: Effects,
}

impl SaveData {
    pub const CURRENT_VERSION: u32 = 1;

    /// Restore catalog state from this save. Missing entries keep catalog
    /// defaults, out-of-range levels are clamped.
    pub fn restore(&self, upgrades: &mut [Upgrade], beers: &mut [BeerType]) {
        for (upgrade, &level) in upgrades.iter_mut().zip(&self.upgrade_levels) {
            upgrade.restore_level(level);
        }
        for (index, (beer, &unlocked)) in beers.iter_mut().zip(&self.beers_unlocked).enumerate() {
            // The house beer can never be locked
            beer.is_unlocked = unlocked || index == 0;
        }
    }

    /// Capture catalog state into a save
    pub fn capture(
        money: u64,
        max_score: u64,
        upgrades: &[Upgrade],
        beers: &[BeerType],
        selected_beer: usize,
    ) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            money,
            max_score,
            upgrade_levels: upgrades.iter().map(|u| u.current_level).collect(),
            beers_unlocked: beers.iter().map(|b| b.is_unlocked).collect(),
            selected_beer,
            effects: Effects::from_upgrades(upgrades),
        }
    }
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            money: 0,
            max_score: 0,
            upgrade_levels: Vec::new(),
            beers_unlocked: Vec::new(),
            selected_beer: 0,
            effects: Effects::default(),
        }
    }
}

/// Where saves live. The game flushes through this after every change.
pub trait SaveStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<SaveData>>;

    fn save(&mut self, data: &SaveData) -> Result<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<SaveData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, data: &SaveData) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts that persist elsewhere
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<SaveData>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: SaveData) -> Self {
        Self {
            data: Some(data),
            writes: 0,
        }
    }

    pub fn data(&self) -> Option<&SaveData> {
        self.data.as_ref()
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<SaveData>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &SaveData) -> Result<()> {
        self.data = Some(data.clone());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{default_beers, default_upgrades};
    use tempfile::TempDir;

    fn sample() -> SaveData {
        let mut upgrades = default_upgrades();
        upgrades[0].current_level = 2;
        upgrades[3].current_level = 1;
        let mut beers = default_beers();
        beers[2].is_unlocked = true;
        SaveData::capture(321, 4500, &upgrades, &beers, 2)
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        let data = sample();

        store.save(&data).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saves").join("slot1.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&SaveData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{not json").unwrap();
        assert!(JsonFileStore::new(&path).load().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let data: SaveData = serde_json::from_str(r#"{"money": 12}"#).unwrap();
        assert_eq!(data.money, 12);
        assert_eq!(data.selected_beer, 0);
        assert_eq!(data.effects, Effects::default());
    }

    #[test]
    fn test_restore_matches_capture() {
        let data = sample();
        let mut upgrades = default_upgrades();
        let mut beers = default_beers();
        data.restore(&mut upgrades, &mut beers);

        assert_eq!(upgrades[0].current_level, 2);
        assert_eq!(upgrades[3].current_level, 1);
        assert!(beers[2].is_unlocked);
        assert!(!beers[1].is_unlocked);
        assert_eq!(Effects::from_upgrades(&upgrades), data.effects);
    }

    #[test]
    fn test_restore_keeps_house_beer_unlocked() {
        let data = SaveData {
            beers_unlocked: vec![false, false, false],
            upgrade_levels: vec![99],
            ..Default::default()
        };
        let mut upgrades = default_upgrades();
        let mut beers = default_beers();
        data.restore(&mut upgrades, &mut beers);

        assert!(beers[0].is_unlocked);
        assert_eq!(upgrades[0].current_level, upgrades[0].max_level);
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&SaveData::default()).unwrap();
        store.save(&SaveData::default()).unwrap();
        assert_eq!(store.writes(), 2);
        assert!(store.data().is_some());
    }
}
