//! The `Game` aggregate: fields, accessors and lobby operations.
//!
//! `Game` is the sole owner of every hand, the draw pile and the top card.
//! All mutation goes through its methods; turn mechanics live in
//! `turn.rs` and low-hand calls in `call.rs`.

use im::Vector;
use tracing::{debug, info};

use super::event::{AbortReason, GameEvent, Outcome};
use super::participant::Participant;
use crate::cards::{Card, DrawPile};
use crate::core::{GameConfig, GameRng, LifecycleError, ParticipantId, Seat, UnoResult};
use crate::rules::Direction;

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting participants.
    Lobby,
    /// Turns proceeding.
    InProgress,
    /// Terminal.
    Ended(Outcome),
}

/// A single game of Uno.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) creator: ParticipantId,
    pub(super) participants: Vec<Participant>,
    pub(super) phase: Phase,
    /// `None` until the first turn starts.
    pub(super) turn_index: Option<usize>,
    /// The last participant to act; checked by call enforcement.
    pub(super) previous: Option<ParticipantId>,
    pub(super) direction: Direction,
    pub(super) top_card: Option<Card>,
    pub(super) draw_pile: DrawPile,
    pub(super) rng: GameRng,
    pub(super) turn_serial: u64,
    history: Vector<GameEvent>,
    pending: Vec<GameEvent>,
}

impl Game {
    /// Open a lobby with `creator` already seated.
    #[must_use]
    pub fn new(config: GameConfig, creator: ParticipantId, name: impl Into<String>, seat: Seat) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self {
            config,
            creator,
            participants: vec![Participant::new(creator, name, seat)],
            phase: Phase::Lobby,
            turn_index: None,
            previous: None,
            direction: Direction::Forward,
            top_card: None,
            draw_pile: DrawPile::standard(),
            rng,
            turn_serial: 0,
            history: Vector::new(),
            pending: Vec::new(),
        };
        game.emit(GameEvent::Joined { who: creator });
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn creator(&self) -> ParticipantId {
        self.creator
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Lobby
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        self.outcome().and_then(Outcome::winner)
    }

    /// Participants in turn order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn index_of(&self, id: ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn turn_index(&self) -> Option<usize> {
        self.turn_index
    }

    /// The participant whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&Participant> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.turn_index.and_then(|i| self.participants.get(i))
    }

    #[must_use]
    pub fn current_id(&self) -> Option<ParticipantId> {
        self.current().map(Participant::id)
    }

    /// Index of the participant checked by call enforcement on the next action.
    #[must_use]
    pub fn previous_turn_index(&self) -> Option<usize> {
        self.previous.and_then(|id| self.index_of(id))
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Participant> {
        self.previous.and_then(|id| self.participant(id))
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.top_card
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Serial number of the current turn; bumps every time a turn starts.
    #[must_use]
    pub fn turn_serial(&self) -> u64 {
        self.turn_serial
    }

    /// Cards across every hand, the draw pile and the top card.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.participants.iter().map(Participant::hand_len).sum();
        in_hands + self.draw_pile.len() + usize::from(self.top_card.is_some())
    }

    /// Everything that has happened in this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// An independent random stream derived from this game's seed.
    ///
    /// Forking does not advance the game's own stream, so deals stay the
    /// same whether or not anyone forks.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    // === Lobby ===

    /// Seat a new participant. Only allowed before the game starts.
    pub fn join(&mut self, id: ParticipantId, name: impl Into<String>, seat: Seat) -> UnoResult<()> {
        match self.phase {
            Phase::Lobby => {}
            Phase::InProgress => return Err(LifecycleError::AlreadyStarted.into()),
            Phase::Ended(_) => return Err(LifecycleError::GameOver.into()),
        }
        if self.index_of(id).is_some() {
            return Err(LifecycleError::AlreadyJoined(id).into());
        }
        if self.participants.len() >= self.config.max_participants {
            return Err(LifecycleError::TableFull {
                max: self.config.max_participants,
            }
            .into());
        }

        self.participants.push(Participant::new(id, name, seat));
        debug!(participant = %id, seated = self.participants.len(), "participant joined");
        self.emit(GameEvent::Joined { who: id });
        Ok(())
    }

    /// Remove a participant.
    ///
    /// Mid-game their hand returns to the draw pile and, if it was their
    /// turn, the next participant in the current direction starts a turn.
    pub fn leave(&mut self, id: ParticipantId) -> UnoResult<()> {
        if self.is_ended() {
            return Err(LifecycleError::GameOver.into());
        }
        if id == self.creator {
            return Err(LifecycleError::CannotRemoveCreator.into());
        }
        let removed = self.index_of(id).ok_or(LifecycleError::NotAParticipant(id))?;

        let mut leaver = self.participants.remove(removed);
        for card in leaver.take_hand() {
            self.draw_pile.put(card);
        }
        if self.previous == Some(id) {
            self.previous = None;
        }
        info!(participant = %id, remaining = self.participants.len(), "participant left");
        self.emit(GameEvent::Left { who: id });

        if self.phase != Phase::InProgress {
            return Ok(());
        }

        let len = self.participants.len();
        if len < 2 {
            self.finish(Outcome::Aborted(AbortReason::NotEnoughPlayers));
            return Ok(());
        }

        match self.turn_index {
            Some(current) if removed < current => self.turn_index = Some(current - 1),
            Some(current) if removed == current => {
                // The seat at `removed` now holds whoever followed the leaver.
                let next = match self.direction {
                    Direction::Forward => removed % len,
                    Direction::Backward => (removed + len - 1) % len,
                };
                self.begin_turn(next);
            }
            _ => {}
        }
        Ok(())
    }

    /// End the game without a winner.
    pub fn abort(&mut self) -> UnoResult<()> {
        if self.is_ended() {
            return Err(LifecycleError::GameOver.into());
        }
        self.finish(Outcome::Aborted(AbortReason::Requested));
        Ok(())
    }

    // === Internal helpers ===

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.history.push_back(event.clone());
        self.pending.push(event);
    }

    pub(super) fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended(outcome);
        info!(?outcome, "game ended");
        self.emit(GameEvent::Ended(outcome));
    }

    pub(super) fn ensure_in_progress(&self) -> UnoResult<()> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Lobby => Err(LifecycleError::NotStarted.into()),
            Phase::Ended(_) => Err(LifecycleError::GameOver.into()),
        }
    }
}
