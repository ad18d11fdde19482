use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeEvent {
    Lost { remaining: u32 },
    /// Last life gone. Emitted once per run.
    RunEnded,
}

/// Remaining lives for one run, bounded by `[0, max_lives]`
#[derive(Debug, Clone)]
pub struct LifeTracker {
    lives: u32,
    max_lives: u32,
}

impl LifeTracker {
    pub fn new(max_lives: u32) -> Self {
        Self {
            lives: max_lives,
            max_lives,
        }
    }

    /// Take one life. Returns `None` once the run has already ended.
    pub fn lose_life(&mut self) -> Option<LifeEvent> {
        if self.lives == 0 {
            return None;
        }

        self.lives -= 1;
        if self.lives == 0 {
            Some(LifeEvent::RunEnded)
        } else {
            Some(LifeEvent::Lost {
                remaining: self.lives,
            })
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }
}
