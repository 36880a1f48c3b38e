//! Turn mechanics: start, advance, play, draw.

use tracing::{debug, warn};

use super::event::{GameEvent, Outcome};
use super::state::{Game, Phase};
use crate::cards::{Card, Color, STANDARD_DECK_SIZE};
use crate::core::{LifecycleError, ParticipantId, RuleViolation, UnoResult};
use crate::rules::{check_play, resolve, Direction, Resolution};

impl Game {
    /// Deal, turn up the seed card and start the first turn.
    ///
    /// The seed card's effect is not resolved; a wild seed gets a random
    /// color. The starting participant is chosen uniformly at random.
    pub fn start(&mut self) -> UnoResult<()> {
        match self.phase {
            Phase::Lobby => {}
            Phase::InProgress => return Err(LifecycleError::AlreadyStarted.into()),
            Phase::Ended(_) => return Err(LifecycleError::GameOver.into()),
        }
        let players = self.participants.len();
        if players < 2 {
            return Err(LifecycleError::CannotStartAlone.into());
        }
        let hand_size = self.config.hand_size;
        if hand_size * players >= STANDARD_DECK_SIZE {
            return Err(LifecycleError::NotEnoughCards { hand_size, players }.into());
        }

        for _ in 0..hand_size {
            for p in 0..players {
                if let Some(card) = self.draw_pile.draw(&mut self.rng) {
                    self.participants[p].receive(card);
                }
            }
        }

        let Some(mut seed) = self.draw_pile.draw(&mut self.rng) else {
            return Err(LifecycleError::NotEnoughCards { hand_size, players }.into());
        };
        if seed.is_wild() {
            let color = Color::ALL[self.rng.gen_range_usize(0..Color::ALL.len())];
            seed = seed.with_color(color);
        }

        self.top_card = Some(seed);
        self.phase = Phase::InProgress;
        self.turn_index = None;
        self.previous = None;
        self.direction = Direction::Forward;
        debug!(players, %seed, "game started");
        self.emit(GameEvent::Started { top: seed, hand_size });

        self.next_turn(Resolution::default());
        Ok(())
    }

    /// Play `candidate` from the current participant's hand.
    ///
    /// Wild kinds need `color_choice`; it is ignored otherwise. A rejected
    /// play leaves the game untouched.
    pub fn play_card(
        &mut self,
        actor: ParticipantId,
        candidate: Card,
        color_choice: Option<Color>,
    ) -> UnoResult<()> {
        let idx = self.current_index_for(actor)?;
        let candidate = candidate.uncommitted();
        if !self.participants[idx].holds(candidate) {
            return Err(RuleViolation::NoSuchCard(candidate).into());
        }
        let top = self.top_card.ok_or(LifecycleError::NotStarted)?;
        let played = check_play(candidate, color_choice, top)?;

        self.enforce_call(None);

        self.participants[idx].remove(candidate);
        self.draw_pile.put(top);
        self.top_card = Some(played);
        debug!(participant = %actor, card = %played, "card played");
        self.emit(GameEvent::Played { who: actor, card: played });

        if self.participants[idx].hand_len() == 0 {
            self.finish(Outcome::Won(actor));
            return Ok(());
        }

        self.previous = Some(actor);

        let plan = resolve(played.effect(), self.participants.len());
        if plan.reverse {
            self.direction = self.direction.flipped();
            self.emit(GameEvent::Reversed {
                direction: self.direction,
            });
        }
        self.next_turn(plan);
        Ok(())
    }

    /// Draw `count` cards instead of playing and pass the turn.
    ///
    /// Returns how many cards were actually drawn.
    pub fn draw_and_skip(&mut self, actor: ParticipantId, count: usize) -> UnoResult<usize> {
        let idx = self.current_index_for(actor)?;

        self.enforce_call(None);

        let drawn = self.draw_into(idx, count);
        self.emit(GameEvent::Drew { who: actor, count: drawn });
        self.previous = Some(actor);
        self.next_turn(Resolution::default());
        Ok(drawn)
    }

    /// Advance to the next turn according to `plan`.
    ///
    /// The first call after start picks a random participant. Otherwise the
    /// index steps once in the current direction; if the plan skips, the
    /// participant landed on draws `plan.draw` cards and the index steps
    /// once more.
    pub(super) fn next_turn(&mut self, plan: Resolution) {
        let len = self.participants.len();
        let next = match self.turn_index {
            None => self.rng.gen_range_usize(0..len),
            Some(current) => {
                let mut idx = self.direction.step(current, len);
                if plan.draw > 0 {
                    let drawn = self.draw_into(idx, plan.draw);
                    let who = self.participants[idx].id();
                    self.emit(GameEvent::ForcedDraw { who, count: drawn });
                }
                if plan.skip {
                    let who = self.participants[idx].id();
                    self.emit(GameEvent::Skipped { who });
                    idx = self.direction.step(idx, len);
                }
                idx
            }
        };
        self.begin_turn(next);
    }

    pub(super) fn begin_turn(&mut self, idx: usize) {
        self.turn_index = Some(idx);
        self.turn_serial += 1;
        let who = self.participants[idx].id();
        debug!(participant = %who, serial = self.turn_serial, "turn started");
        self.emit(GameEvent::TurnStarted {
            who,
            serial: self.turn_serial,
        });
    }

    /// Move up to `count` cards from the pool into participant `idx`'s hand.
    pub(super) fn draw_into(&mut self, idx: usize, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            let Some(card) = self.draw_pile.draw(&mut self.rng) else {
                break;
            };
            self.participants[idx].receive(card);
            drawn += 1;
        }

        if drawn < count {
            let who = self.participants[idx].id();
            warn!(participant = %who, wanted = count, got = drawn, "draw pile exhausted");
            self.emit(GameEvent::PileExhausted {
                who,
                wanted: count,
                got: drawn,
            });
        }
        drawn
    }

    /// Index of `actor`, provided it is their turn in a running game.
    fn current_index_for(&self, actor: ParticipantId) -> UnoResult<usize> {
        self.ensure_in_progress()?;
        let idx = self
            .index_of(actor)
            .ok_or(LifecycleError::NotAParticipant(actor))?;
        if self.turn_index != Some(idx) {
            return Err(RuleViolation::NotYourTurn.into());
        }
        Ok(idx)
    }
}
