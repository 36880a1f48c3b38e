//! Low-hand calls and their enforcement.
//!
//! A participant left holding one card must call before the next action
//! or draw `call_penalty` cards. Calls may arrive at any time, from anyone:
//!
//! - the current participant holding two cards may call ahead of playing;
//! - the previous participant holding one card may still call late;
//! - any other call catches an exposed previous participant.

use tracing::{debug, info};

use super::event::GameEvent;
use super::state::Game;
use crate::core::{LifecycleError, ParticipantId, UnoResult};

/// Result of a low-hand call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallOutcome {
    /// The caller's own declaration was accepted.
    pub declared: bool,
    /// The previous participant was caught and penalized.
    pub caught: Option<ParticipantId>,
}

impl Game {
    /// Handle the low-hand exclamation from `caller`.
    ///
    /// Repeating a call has no further effect.
    pub fn call_low_hand(&mut self, caller: ParticipantId) -> UnoResult<CallOutcome> {
        self.ensure_in_progress()?;
        if self.index_of(caller).is_none() {
            return Err(LifecycleError::NotAParticipant(caller).into());
        }

        let mut declared = false;
        if let Some(current) = self.turn_index {
            let p = &mut self.participants[current];
            if p.id() == caller && p.hand_len() == 2 && !p.called_low_hand() {
                p.mark_called();
                declared = true;
            }
        }
        if !declared && self.previous == Some(caller) {
            if let Some(idx) = self.index_of(caller) {
                let p = &mut self.participants[idx];
                if p.hand_len() == 1 && !p.called_low_hand() {
                    p.mark_called();
                    declared = true;
                }
            }
        }
        if declared {
            debug!(participant = %caller, "low hand called");
            self.emit(GameEvent::Called { who: caller });
        }

        let caught = self.enforce_call(Some(caller));
        Ok(CallOutcome { declared, caught })
    }

    /// Penalize the previous participant if they hold one card uncalled.
    ///
    /// This applies even when the previous participant is the one acting
    /// again after a skip.
    pub(super) fn enforce_call(&mut self, caught_by: Option<ParticipantId>) -> Option<ParticipantId> {
        let previous = self.previous?;
        let idx = self.index_of(previous)?;
        if !self.participants[idx].is_exposed() {
            return None;
        }

        let penalty = self.config.call_penalty;
        let drawn = self.draw_into(idx, penalty);
        if drawn == 0 {
            // Nothing left to draw; close the window so the penalty fires once.
            self.participants[idx].mark_called();
        }
        info!(participant = %previous, cards = drawn, "missed low-hand call");
        self.emit(GameEvent::Penalized {
            who: previous,
            count: drawn,
            caught_by,
        });
        Some(previous)
    }
}
