use serde::{Deserialize, Serialize};

use crate::score::AccuracyTier;

/// What a pour did to the combo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboEvent {
    Incremented(u32),
    Reset,
    /// Bad pour absorbed by the starting grace
    Held,
}

/// Consecutive-success counter for one run
#[derive(Debug, Clone, Default)]
pub struct ComboTracker {
    count: u32,
    best: u32,
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the combo would have after recording `tier`
    pub fn projected(&self, tier: AccuracyTier, grace: bool) -> u32 {
        if tier.is_hit() {
            self.count.saturating_add(1)
        } else if grace {
            self.count
        } else {
            0
        }
    }

    /// Record a pour.
    ///
    /// During the starting grace a Bad pour leaves the combo untouched.
    pub fn record(&mut self, tier: AccuracyTier, grace: bool) -> ComboEvent {
        let next = self.projected(tier, grace);
        let event = if tier.is_hit() {
            ComboEvent::Incremented(next)
        } else if grace {
            ComboEvent::Held
        } else {
            ComboEvent::Reset
        };

        self.count = next;
        self.best = self.best.max(next);
        event
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Highest count reached this run
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_increment() {
        let mut combo = ComboTracker::new();
        assert_eq!(
            combo.record(AccuracyTier::Good, false),
            ComboEvent::Incremented(1)
        );
        assert_eq!(
            combo.record(AccuracyTier::Perfect, false),
            ComboEvent::Incremented(2)
        );
        assert_eq!(combo.count(), 2);
    }

    #[test]
    fn test_bad_resets() {
        let mut combo = ComboTracker::new();
        combo.record(AccuracyTier::Perfect, false);
        combo.record(AccuracyTier::Perfect, false);
        combo.record(AccuracyTier::Perfect, false);

        assert_eq!(combo.record(AccuracyTier::Bad, false), ComboEvent::Reset);
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.best(), 3);
    }

    #[test]
    fn test_grace_holds_combo() {
        let mut combo = ComboTracker::new();
        combo.record(AccuracyTier::Good, true);

        assert_eq!(combo.record(AccuracyTier::Bad, true), ComboEvent::Held);
        assert_eq!(combo.count(), 1);
    }

    #[test]
    fn test_projected_matches_record() {
        let mut combo = ComboTracker::new();
        combo.record(AccuracyTier::Good, false);

        for (tier, grace) in [
            (AccuracyTier::Perfect, false),
            (AccuracyTier::Bad, true),
            (AccuracyTier::Bad, false),
        ] {
            let projected = combo.projected(tier, grace);
            combo.record(tier, grace);
            assert_eq!(combo.count(), projected);
        }
    }

    #[test]
    fn test_reset_clears_best() {
        let mut combo = ComboTracker::new();
        combo.record(AccuracyTier::Good, false);
        combo.reset();
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.best(), 0);
    }
}
