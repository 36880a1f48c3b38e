//! Headless self-play.

use tracing::{debug, warn};

use crate::core::GameRng;
use crate::game::{Game, Outcome};

use super::{take_npc_turn, NpcPolicy};

/// Drive a started game with `policy` acting for every seat.
///
/// Scheduled low-hand calls are declared immediately after the play that
/// scheduled them. Stops after `max_actions` turns; returns the outcome if
/// the game ended by then.
pub fn autoplay(
    game: &mut Game,
    policy: &dyn NpcPolicy,
    rng: &mut GameRng,
    max_actions: usize,
) -> Option<Outcome> {
    for _ in 0..max_actions {
        if game.is_ended() {
            break;
        }
        let me = game.current_id()?;

        match take_npc_turn(game, policy, rng) {
            Ok(Some(_)) if !game.is_ended() => {
                if let Err(err) = game.call_low_hand(me) {
                    warn!(participant = %me, error = %err, "scheduled call rejected");
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!(participant = %me, error = %err, "autoplay stopped");
                break;
            }
        }
    }

    let outcome = game.outcome();
    debug!(?outcome, serial = game.turn_serial(), "autoplay finished");
    outcome
}
