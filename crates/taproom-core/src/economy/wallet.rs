use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Money and score totals.
///
/// `money` and `max_score` persist across sessions, `total_score` is per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    money: u64,
    total_score: u64,
    max_score: u64,
}

impl Wallet {
    pub fn new(money: u64, max_score: u64) -> Self {
        Self {
            money,
            total_score: 0,
            max_score,
        }
    }

    /// Debit `amount`, all or nothing
    pub fn spend(&mut self, amount: u64) -> Result<()> {
        if self.money < amount {
            return Err(Error::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Credit a signed currency delta. Losses stop at zero.
    pub fn earn(&mut self, delta: i64) {
        self.money = self.money.saturating_add_signed(delta);
    }

    /// Add a signed score delta to the run total. Losses stop at zero.
    pub fn add_score(&mut self, delta: i64) {
        self.total_score = self.total_score.saturating_add_signed(delta);
    }

    /// Raise the high-water mark if the run total beats it
    pub fn record_high_score(&mut self) -> bool {
        if self.total_score > self.max_score {
            self.max_score = self.total_score;
            true
        } else {
            false
        }
    }

    pub fn start_run(&mut self) {
        self.total_score = 0;
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn max_score(&self) -> u64 {
        self.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_insufficient_leaves_money() {
        let mut wallet = Wallet::new(40, 0);
        let err = wallet.spend(50).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientFunds {
                needed: 50,
                available: 40
            }
        ));
        assert_eq!(wallet.money(), 40);
    }

    #[test]
    fn test_spend_exact_amount() {
        let mut wallet = Wallet::new(50, 0);
        wallet.spend(50).unwrap();
        assert_eq!(wallet.money(), 0);
    }

    #[test]
    fn test_earn_saturates_at_zero() {
        let mut wallet = Wallet::new(10, 0);
        wallet.earn(-25);
        assert_eq!(wallet.money(), 0);
        wallet.earn(7);
        assert_eq!(wallet.money(), 7);
    }

    #[test]
    fn test_high_score_tracking() {
        let mut wallet = Wallet::new(0, 100);
        wallet.add_score(80);
        assert!(!wallet.record_high_score());
        wallet.add_score(40);
        assert!(wallet.record_high_score());
        assert_eq!(wallet.max_score(), 120);

        wallet.start_run();
        assert_eq!(wallet.total_score(), 0);
        assert_eq!(wallet.max_score(), 120);
    }

    #[test]
    fn test_negative_score_saturates() {
        let mut wallet = Wallet::new(0, 0);
        wallet.add_score(30);
        wallet.add_score(-50);
        assert_eq!(wallet.total_score(), 0);
    }
}
