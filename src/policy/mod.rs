//! Decision policies for autonomous seats.
//!
//! A policy sees only what the seat could see at the table (`NpcView`) and
//! returns an `NpcDecision`. The engine validates whatever comes back, so a
//! weak or buggy policy can never corrupt a game:
//!
//! - `NpcPolicy`: the pluggable decision trait
//! - `OldestLegal`: the default heuristic
//! - `take_npc_turn`: apply one decision to the current participant
//! - `autoplay`: drive a whole game headlessly

mod autoplay;
mod oldest_legal;

use std::time::Duration;

use tracing::warn;

use crate::cards::{Card, Color};
use crate::core::{GameRng, LifecycleError, NpcProfile, ParticipantId, UnoResult};
use crate::game::{Game, Participant};

pub use autoplay::autoplay;
pub use oldest_legal::OldestLegal;

// =============================================================================
// Policy interface
// =============================================================================

/// Chooses what an autonomous seat does on its turn.
pub trait NpcPolicy: Send + Sync {
    /// Decide this turn's action.
    ///
    /// The decision is validated by the engine; an illegal play falls back
    /// to drawing a card.
    fn decide(&self, view: &NpcView<'_>, rng: &mut GameRng) -> NpcDecision;
}

/// What an autonomous seat can see on its turn.
#[derive(Clone, Debug)]
pub struct NpcView<'a> {
    pub me: ParticipantId,
    /// Own hand, newest card first.
    pub hand: &'a [Card],
    pub top: Card,
    /// The previous participant holds one card and has not called.
    pub previous_exposed: bool,
    pub profile: NpcProfile,
}

impl<'a> NpcView<'a> {
    /// The view of whoever holds the current turn.
    ///
    /// Human seats get the default profile, so `autoplay` can drive them too.
    #[must_use]
    pub fn of_current(game: &'a Game) -> Option<Self> {
        let current = game.current()?;
        let me = current.id();
        let previous_exposed = game
            .previous()
            .filter(|p| p.id() != me)
            .is_some_and(Participant::is_exposed);

        Some(Self {
            me,
            hand: current.hand(),
            top: game.top_card()?,
            previous_exposed,
            profile: current.seat().npc_profile().cloned().unwrap_or_default(),
        })
    }
}

/// The turn action chosen by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NpcAction {
    Play { card: Card, color: Option<Color> },
    Draw,
}

/// A policy's full decision for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NpcDecision {
    /// Call out the previous participant before acting.
    pub catch_previous: bool,
    pub action: NpcAction,
    /// Declare the low-hand call this long after playing.
    pub call_after: Option<Duration>,
}

impl NpcDecision {
    #[must_use]
    pub fn draw() -> Self {
        Self {
            catch_previous: false,
            action: NpcAction::Draw,
            call_after: None,
        }
    }
}

// =============================================================================
// Applying decisions
// =============================================================================

/// Let `policy` take the current participant's turn.
///
/// Returns the delay after which the participant wants to declare its
/// low-hand call, if it played down towards one card and chose to call.
pub fn take_npc_turn(
    game: &mut Game,
    policy: &dyn NpcPolicy,
    rng: &mut GameRng,
) -> UnoResult<Option<Duration>> {
    let (me, decision) = {
        let view = NpcView::of_current(game).ok_or(LifecycleError::NotStarted)?;
        (view.me, policy.decide(&view, rng))
    };

    if decision.catch_previous {
        game.call_low_hand(me)?;
    }

    match decision.action {
        NpcAction::Play { card, color } => match game.play_card(me, card, color) {
            Ok(()) => Ok(decision.call_after),
            Err(err) => {
                warn!(participant = %me, %card, error = %err, "policy chose an illegal play, drawing instead");
                game.draw_and_skip(me, 1)?;
                Ok(None)
            }
        },
        NpcAction::Draw => {
            game.draw_and_skip(me, 1)?;
            Ok(None)
        }
    }
}
