//! Integration tests for taproom-core
//!
//! These tests drive several modules together through the public API.

use taproom_core::economy::{Effects, UpgradeKind};
use taproom_core::play::{JarType, PourEvent};
use taproom_core::score::{AccuracyTier, ScoreInput, Thresholds, TierPolicy, compute_score};
use taproom_core::storage::{JsonFileStore, RunLog, SaveStore};
use taproom_core::{Error, GameConfig, SaveData, Taproom};
use tempfile::TempDir;

/// The worked scoring example
mod scoring_tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let thresholds = Thresholds::new(0.3, 0.15, 0.05).unwrap();
        let result = compute_score(
            &ScoreInput {
                distance: 0.1,
                jar_base_points: 100,
                jar_value_multiplier: 1.0,
                combo_count: 4,
                combo_multiplier: 1.0,
                beer_base_value: 25,
            },
            &thresholds,
            TierPolicy::Strict,
        );

        assert_eq!(result.raw_score, 90);
        assert_eq!(result.combo_score, 126);
        assert_eq!(result.currency, 32);
    }

    #[test]
    fn test_tier_properties_hold_for_both_policies() {
        let t = Thresholds::new(0.3, 0.15, 0.05).unwrap();
        for policy in [TierPolicy::Strict, TierPolicy::Lenient] {
            for step in 0..=400 {
                let d = step as f64 * 0.001;
                let tier = taproom_core::classify(d, &t, policy);
                if d >= t.bad() {
                    assert_eq!(tier, AccuracyTier::Bad, "d={d} {policy:?}");
                } else if d >= t.perfect() && d < t.good() {
                    assert_eq!(tier, AccuracyTier::Good, "d={d} {policy:?}");
                } else if d < t.perfect() {
                    assert_eq!(tier, AccuracyTier::Perfect, "d={d} {policy:?}");
                }
            }
        }
    }
}

/// Progression persisted through a real file
mod persistence_tests {
    use super::*;

    #[test]
    fn test_progress_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");

        let mut seed = JsonFileStore::new(&path);
        seed.save(&SaveData {
            money: 2000,
            ..Default::default()
        })
        .unwrap();

        let effects_before;
        {
            let mut taproom = Taproom::open(GameConfig::default(), JsonFileStore::new(&path)).unwrap();
            taproom.purchase_upgrade(UpgradeKind::JarValueMultiplier).unwrap();
            taproom.purchase_upgrade(UpgradeKind::JarValueMultiplier).unwrap();
            taproom.purchase_upgrade(UpgradeKind::AccuracyBonus).unwrap();
            taproom.unlock_beer("Stout").unwrap();
            effects_before = *taproom.effects();
        }

        let taproom = Taproom::open(GameConfig::default(), JsonFileStore::new(&path)).unwrap();
        // 2000 - 200 - 450 - 100 - 100
        assert_eq!(taproom.wallet().money(), 1150);
        assert_eq!(taproom.selected_beer().name, "Stout");
        assert_eq!(*taproom.effects(), effects_before);

        let levels: Vec<u32> = taproom.upgrades().iter().map(|u| u.current_level).collect();
        assert_eq!(levels, vec![0, 2, 1, 0, 0]);
    }

    #[test]
    fn test_saved_effects_match_recomputed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        let store = JsonFileStore::new(&path);
        let mut taproom = Taproom::open(GameConfig::default(), store).unwrap();
        taproom.start_run().unwrap();
        taproom.pour(JarType::Long, 0.0).unwrap();

        let saved = JsonFileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.effects, Effects::from_upgrades(taproom.upgrades()));
        assert_eq!(saved.max_score, taproom.wallet().max_score());
    }
}

/// Whole runs, start to last call
mod run_tests {
    use super::*;

    #[test]
    fn test_full_run_and_log() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("save.json"));
        let mut taproom = Taproom::open(GameConfig::default(), store).unwrap();
        let mut log = RunLog::new(dir.path().join("sessions"));
        log.start_session().unwrap();

        taproom.start_run().unwrap();
        let distances = [0.0, 0.02, 0.1, 0.2, 0.01, 0.5, 0.6];
        let mut reports = Vec::new();
        for d in distances {
            reports.push(taproom.pour(JarType::Mug, d).unwrap());
        }

        // Combo: 1, 2, 3, reset, 1, reset, reset -> third bad ends the run
        assert_eq!(reports[2].combo, 3);
        assert_eq!(reports[3].combo, 0);
        assert_eq!(reports[4].combo, 1);
        assert!(reports[6].run_ended());
        assert!(reports[..6].iter().all(|r| !r.run_ended()));
        assert!(matches!(
            taproom.pour(JarType::Mug, 0.0),
            Err(Error::RunOver)
        ));

        let record = taproom.finish_run().unwrap();
        assert_eq!(record.best_combo, 3);
        assert_eq!(record.pours, 7);
        log.append(&record).unwrap();

        let content = std::fs::read_to_string(log.current_session_path().unwrap()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_high_score_carries_to_next_run() {
        let mut taproom =
            Taproom::open(GameConfig::default(), taproom_core::MemoryStore::new()).unwrap();

        taproom.start_run().unwrap();
        let first = taproom.pour(JarType::Boot, 0.0).unwrap();
        assert!(first.events.iter().any(|e| matches!(e, PourEvent::NewHighScore(_))));
        let best = taproom.wallet().max_score();

        taproom.start_run().unwrap();
        assert_eq!(taproom.wallet().total_score(), 0);
        let second = taproom.pour(JarType::Cup, 0.1).unwrap();
        assert!(!second.events.iter().any(|e| matches!(e, PourEvent::NewHighScore(_))));
        assert_eq!(taproom.wallet().max_score(), best);
    }

    #[test]
    fn test_lenient_policy_from_config() {
        let config = GameConfig::parse(
            r#"
            [accuracy]
            policy = "lenient"
            "#,
        )
        .unwrap();
        let mut taproom = Taproom::open(config, taproom_core::MemoryStore::new()).unwrap();
        taproom.start_run().unwrap();
        taproom.pour(JarType::Mug, 0.0).unwrap();

        let report = taproom.pour(JarType::Mug, 0.2).unwrap();
        assert_eq!(report.result.tier, AccuracyTier::Good);
        assert_eq!(report.lives, 3);
    }
}
