use serde::{Deserialize, Serialize};

use super::{ComboEvent, ComboTracker, LifeEvent, LifeTracker};
use crate::economy::Wallet;
use crate::score::PourResult;

/// Something the host may want to react to after a pour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PourEvent {
    ComboIncremented(u32),
    ComboReset,
    /// Bad pour forgiven by the starting grace
    GraceUsed,
    LifeLost { remaining: u32 },
    NewHighScore(u64),
    RunEnded { final_score: u64 },
}

/// Apply a scored pour to the run and the wallet.
///
/// `result` must have been computed with `combo.projected(result.tier, grace)`
/// so the score reflects the combo after this pour.
pub fn apply_pour(
    result: &PourResult,
    wallet: &mut Wallet,
    combo: &mut ComboTracker,
    life: &mut LifeTracker,
    grace: bool,
) -> Vec<PourEvent> {
    let mut events = Vec::new();

    let combo_event = combo.record(result.tier, grace);
    events.push(match combo_event {
        ComboEvent::Incremented(count) => PourEvent::ComboIncremented(count),
        ComboEvent::Reset => PourEvent::ComboReset,
        ComboEvent::Held => PourEvent::GraceUsed,
    });

    wallet.earn(result.currency);
    wallet.add_score(result.combo_score);
    if wallet.record_high_score() {
        events.push(PourEvent::NewHighScore(wallet.max_score()));
    }

    if combo_event == ComboEvent::Reset {
        match life.lose_life() {
            Some(LifeEvent::Lost { remaining }) => events.push(PourEvent::LifeLost { remaining }),
            Some(LifeEvent::RunEnded) => {
                events.push(PourEvent::LifeLost { remaining: 0 });
                events.push(PourEvent::RunEnded {
                    final_score: wallet.total_score(),
                });
            }
            None => {}
        }
    }

    events
}
