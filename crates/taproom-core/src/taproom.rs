use std::str::FromStr;

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::economy::{
    BeerType, Effects, Upgrade, UpgradeKind, Wallet, default_beers, default_upgrades, find_beer,
};
use crate::error::{Error, Result};
use crate::play::{ComboTracker, JarType, LifeTracker, PourEvent, apply_pour};
use crate::score::{AccuracyTier, PourResult, ScoreInput, Thresholds, compute_score};
use crate::storage::{RunRecord, SaveData, SaveStore};

/// Tallies for the run in progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub pours: u32,
    pub perfect: u32,
    pub good: u32,
    pub bad: u32,
    pub earned: i64,
    pub new_high_score: bool,
}

impl RunStats {
    fn count(&mut self, result: &PourResult) {
        self.pours += 1;
        self.earned = self.earned.saturating_add(result.currency);
        match result.tier {
            AccuracyTier::Perfect => self.perfect += 1,
            AccuracyTier::Good => self.good += 1,
            AccuracyTier::Bad => self.bad += 1,
        }
    }
}

/// One run, from full lives to the last life lost.
///
/// Thresholds and lives are fixed when the run starts; upgrades bought
/// mid-run widen them from the next run on.
#[derive(Debug, Clone)]
pub struct Run {
    thresholds: Thresholds,
    combo: ComboTracker,
    life: LifeTracker,
    grace: bool,
    stats: RunStats,
}

impl Run {
    fn new(thresholds: Thresholds, max_lives: u32) -> Self {
        Self {
            thresholds,
            combo: ComboTracker::new(),
            life: LifeTracker::new(max_lives),
            grace: true,
            stats: RunStats::default(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn combo(&self) -> &ComboTracker {
        &self.combo
    }

    pub fn life(&self) -> &LifeTracker {
        &self.life
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// True until the first pour has been scored
    pub fn in_grace(&self) -> bool {
        self.grace
    }

    pub fn is_over(&self) -> bool {
        self.life.is_over()
    }
}

/// What the host gets back from a pour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PourReport {
    pub jar: JarType,
    pub result: PourResult,
    pub events: Vec<PourEvent>,
    pub combo: u32,
    pub lives: u32,
    pub total_score: u64,
    pub money: u64,
    /// False when the save after this pour failed
    pub persisted: bool,
}

impl PourReport {
    pub fn run_ended(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PourEvent::RunEnded { .. }))
    }
}

/// The bar: progression state, catalogs and the current run.
///
/// Every change to persistent state is flushed to the store before the
/// call returns.
pub struct Taproom<S: SaveStore> {
    config: GameConfig,
    store: S,
    wallet: Wallet,
    upgrades: Vec<Upgrade>,
    beers: Vec<BeerType>,
    selected_beer: usize,
    effects: Effects,
    run: Option<Run>,
    shop_open: bool,
}

impl<S: SaveStore> Taproom<S> {
    /// Load progression from `store`, or start fresh if it is empty
    pub fn open(config: GameConfig, store: S) -> Result<Self> {
        let save = match store.load()? {
            Some(save) => {
                info!(
                    "Loaded save (money ${}, max score {})",
                    save.money, save.max_score
                );
                save
            }
            None => {
                info!("No save found, starting fresh");
                SaveData::default()
            }
        };

        let mut upgrades = default_upgrades();
        let mut beers = default_beers();
        save.restore(&mut upgrades, &mut beers);

        let selected_beer = match beers.get(save.selected_beer) {
            Some(beer) if beer.is_unlocked => save.selected_beer,
            _ => {
                warn!(
                    "Saved beer #{} is not available, pouring {}",
                    save.selected_beer, beers[0].name
                );
                0
            }
        };

        let effects = Effects::from_upgrades(&upgrades);
        if effects != save.effects {
            debug!("Saved effects were stale, recomputed from upgrade levels");
        }

        Ok(Self {
            config,
            store,
            wallet: Wallet::new(save.money, save.max_score),
            upgrades,
            beers,
            selected_beer,
            effects,
            run: None,
            shop_open: false,
        })
    }

    /// Write the current progression to the store
    pub fn flush(&mut self) -> Result<()> {
        let save = SaveData::capture(
            self.wallet.money(),
            self.wallet.max_score(),
            &self.upgrades,
            &self.beers,
            self.selected_beer,
        );
        self.store.save(&save)
    }

    /// Begin a new run with full lives, dropping any run in progress
    pub fn start_run(&mut self) -> Result<&Run> {
        let thresholds = self
            .config
            .base_thresholds()?
            .widened(self.effects.good_range_bonus, self.effects.perfect_range_bonus);

        self.wallet.start_run();
        self.shop_open = false;

        info!(
            "Run started: {} lives, bands perfect<{:.3} good<{:.3} bad>={:.3}",
            self.effects.max_lives,
            thresholds.perfect(),
            thresholds.good(),
            thresholds.bad()
        );
        Ok(self
            .run
            .insert(Run::new(thresholds, self.effects.max_lives)))
    }

    /// Score one pour into `jar` that stopped `distance` from the goal line.
    ///
    /// An `Err` means nothing changed. Once the pour is scored it is applied
    /// in full and `Ok` is returned even if the save fails; the report's
    /// `persisted` flag says whether it reached the store, and `flush`
    /// retries without scoring the pour again.
    pub fn pour(&mut self, jar: JarType, distance: f64) -> Result<PourReport> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidDistance(distance));
        }
        if self.shop_open {
            return Err(Error::ShopOpen);
        }

        let beer_value = self.selected_beer().base_value;
        let jar_points = self.config.jars.points(jar);
        let policy = self.config.accuracy.policy;
        let effects = self.effects;

        let run = self.run.as_mut().ok_or(Error::NoActiveRun)?;
        if run.is_over() {
            return Err(Error::RunOver);
        }

        let tier = crate::score::classify(distance, &run.thresholds, policy);
        let input = ScoreInput {
            distance,
            jar_base_points: jar_points,
            jar_value_multiplier: effects.jar_value_multiplier,
            combo_count: run.combo.projected(tier, run.grace),
            combo_multiplier: effects.combo_multiplier,
            beer_base_value: beer_value,
        };
        let result = compute_score(&input, &run.thresholds, policy);

        let events = apply_pour(
            &result,
            &mut self.wallet,
            &mut run.combo,
            &mut run.life,
            run.grace,
        );
        run.grace = false;
        run.stats.count(&result);
        if events
            .iter()
            .any(|e| matches!(e, PourEvent::NewHighScore(_)))
        {
            run.stats.new_high_score = true;
        }

        debug!(
            "Pour {} d={:.3} {} score {} (+${})",
            jar, distance, result.tier, result.combo_score, result.currency
        );

        let mut report = PourReport {
            jar,
            result,
            events,
            combo: run.combo.count(),
            lives: run.life.lives(),
            total_score: self.wallet.total_score(),
            money: self.wallet.money(),
            persisted: false,
        };

        if report.run_ended() {
            info!(
                "Run ended: score {} (best {})",
                report.total_score,
                self.wallet.max_score()
            );
        }

        match self.flush() {
            Ok(()) => report.persisted = true,
            Err(e) => warn!("Pour applied but not saved: {}", e),
        }
        Ok(report)
    }

    /// Close out the current run and summarize it
    pub fn finish_run(&mut self) -> Option<RunRecord> {
        let run = self.run.take()?;
        Some(RunRecord {
            finished_at: Local::now(),
            score: self.wallet.total_score(),
            pours: run.stats.pours,
            perfect: run.stats.perfect,
            good: run.stats.good,
            bad: run.stats.bad,
            best_combo: run.combo.best(),
            earned: run.stats.earned,
            new_high_score: run.stats.new_high_score,
        })
    }

    /// Buy the next level of an upgrade. Returns the amount paid.
    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> Result<u64> {
        let upgrade = self
            .upgrades
            .iter_mut()
            .find(|u| u.kind == kind)
            .ok_or_else(|| Error::InvalidUpgradeReference(kind.to_string()))?;

        let paid = match upgrade.purchase(&mut self.wallet) {
            Ok(paid) => paid,
            Err(e) => {
                warn!("Cannot buy {}: {}", upgrade.name, e);
                return Err(e);
            }
        };

        self.effects.apply(upgrade.effect());
        self.flush()?;
        Ok(paid)
    }

    /// Like `purchase_upgrade`, resolving a kind name such as `combo-multiplier`
    pub fn purchase_upgrade_by_name(&mut self, name: &str) -> Result<u64> {
        let kind = UpgradeKind::from_str(name.trim())
            .map_err(|_| Error::InvalidUpgradeReference(name.to_string()))?;
        self.purchase_upgrade(kind)
    }

    /// Unlock a beer by name or index and start pouring it
    pub fn unlock_beer(&mut self, reference: &str) -> Result<u64> {
        let index = find_beer(&self.beers, reference)?;
        let beer = &mut self.beers[index];

        let paid = match beer.unlock(&mut self.wallet) {
            Ok(paid) => paid,
            Err(e) => {
                warn!("Cannot unlock {}: {}", beer.name, e);
                return Err(e);
            }
        };

        self.selected_beer = index;
        self.flush()?;
        Ok(paid)
    }

    /// Switch to an unlocked beer by name or index
    pub fn select_beer(&mut self, reference: &str) -> Result<()> {
        let index = find_beer(&self.beers, reference)?;
        let beer = &self.beers[index];
        if !beer.is_unlocked {
            return Err(Error::BeerLocked(beer.name.clone()));
        }

        info!("Now pouring {}", beer.name);
        self.selected_beer = index;
        self.flush()
    }

    /// Open the shop. Not allowed once the run has ended.
    pub fn open_shop(&mut self) -> Result<()> {
        if self.run.as_ref().is_some_and(Run::is_over) {
            return Err(Error::RunOver);
        }
        self.shop_open = true;
        Ok(())
    }

    pub fn close_shop(&mut self) {
        self.shop_open = false;
    }

    /// Returns whether the shop is open afterwards
    pub fn toggle_shop(&mut self) -> Result<bool> {
        if self.shop_open {
            self.close_shop();
        } else {
            self.open_shop()?;
        }
        Ok(self.shop_open)
    }

    pub fn is_shop_open(&self) -> bool {
        self.shop_open
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn beers(&self) -> &[BeerType] {
        &self.beers
    }

    pub fn selected_beer(&self) -> &BeerType {
        &self.beers[self.selected_beer]
    }

    pub fn selected_beer_index(&self) -> usize {
        self.selected_beer
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
