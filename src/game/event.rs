//! Game events and outcomes.
//!
//! Every state change the game makes is recorded as a `GameEvent`. The
//! transport drains them to drive output; the full history stays on the
//! game for the lifetime of the instance.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ParticipantId;
use crate::rules::Direction;

/// Why a game ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbortReason {
    /// Ended by the lobby layer.
    Requested,
    /// Participants left until fewer than two remained.
    NotEnoughPlayers,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won(ParticipantId),
    Aborted(AbortReason),
}

impl Outcome {
    #[must_use]
    pub fn winner(self) -> Option<ParticipantId> {
        match self {
            Outcome::Won(id) => Some(id),
            Outcome::Aborted(_) => None,
        }
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Joined { who: ParticipantId },
    Left { who: ParticipantId },
    Started { top: Card, hand_size: usize },
    TurnStarted { who: ParticipantId, serial: u64 },
    Played { who: ParticipantId, card: Card },
    /// Voluntary draw that ends the turn.
    Drew { who: ParticipantId, count: usize },
    /// Draw forced by a Draw Two or Wild Draw Four.
    ForcedDraw { who: ParticipantId, count: usize },
    Skipped { who: ParticipantId },
    Reversed { direction: Direction },
    Called { who: ParticipantId },
    /// Caught holding one card without calling.
    Penalized {
        who: ParticipantId,
        count: usize,
        caught_by: Option<ParticipantId>,
    },
    /// A draw came up short because every card is in a hand.
    PileExhausted { who: ParticipantId, wanted: usize, got: usize },
    Ended(Outcome),
}
