//! Effect resolution planning.
//!
//! Turns a played card's `Effect` into the concrete turn-advance the game
//! performs next. Pure: the game applies the plan.

use crate::cards::Effect;

/// Rotation of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Step `index` one seat in this direction around a table of `len`.
    #[must_use]
    pub const fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}

/// How the next turn advance behaves after a play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Flip the direction before advancing.
    pub reverse: bool,
    /// The participant the advance lands on loses their turn.
    pub skip: bool,
    /// Cards that participant draws before being skipped.
    pub draw: usize,
}

/// Plan the turn advance for `effect` at a table of `participant_count`.
///
/// With exactly two participants a Reverse behaves as a Skip, so the
/// player who reversed goes again.
#[must_use]
pub fn resolve(effect: Effect, participant_count: usize) -> Resolution {
    match effect {
        Effect::None => Resolution::default(),
        Effect::Skip => Resolution { skip: true, ..Resolution::default() },
        Effect::Reverse => Resolution {
            reverse: true,
            skip: participant_count == 2,
            draw: 0,
        },
        Effect::Draw(n) => Resolution { skip: true, draw: n, reverse: false },
    }
}
