//! One game, one task.
//!
//! `Table` serializes everything that touches its `Game`: chat messages,
//! lobby commands and timer expiries all arrive on the same loop. After each
//! mutation the table re-arms for the new turn:
//!
//! - an NPC's turn gets an `NpcTurn` timer after `think_delay`;
//! - a human's turn gets a `TurnTimeout` timer if the timeout policy asks
//!   for one, otherwise the table waits for input.
//!
//! Every timer carries the `turn_serial` it was armed for, so a timer that
//! outlives its turn is dropped when it fires.
//!
//! `handle` and `fire_due` take `now` explicitly so tests can drive the
//! table without a runtime; `run` feeds them from a tokio loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::core::{GameConfig, GameRng, LifecycleError, ParticipantId, Seat, TableConfig, TurnTimeout, UnoError};
use crate::game::{Game, GameEvent, Participant};
use crate::input::{parse_command, Command};
use crate::policy::{take_npc_turn, NpcPolicy};

use super::directory::ParticipantDirectory;
use super::render::describe;
use super::sink::{OutputSink, Outbound};
use super::timers::{Timer, TimerKind, TimerQueue};

/// How long the loop sleeps when nothing is scheduled.
const IDLE_WAKEUP: Duration = Duration::from_secs(3600);

/// Administrative requests, passed straight through to the game.
#[derive(Clone, Debug, PartialEq)]
pub enum LobbyCommand {
    Join { id: ParticipantId, seat: Seat },
    Leave(ParticipantId),
    Start,
    Abort,
    List,
}

/// Everything the table loop consumes.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    /// A chat message in the table's channel.
    Message { author: ParticipantId, text: String },
    Lobby(LobbyCommand),
}

/// A running table.
pub struct Table<S, D> {
    game: Game,
    config: TableConfig,
    policy: Box<dyn NpcPolicy>,
    sink: S,
    directory: D,
    npc_rng: GameRng,
    timers: TimerQueue,
    armed_serial: Option<u64>,
}

impl<S: OutputSink, D: ParticipantDirectory> Table<S, D> {
    /// Open a lobby with `creator` seated.
    pub fn new(
        game_config: GameConfig,
        config: TableConfig,
        creator: ParticipantId,
        seat: Seat,
        policy: Box<dyn NpcPolicy>,
        sink: S,
        directory: D,
    ) -> Self {
        let name = directory.display_name(creator);
        let mut game = Game::new(game_config, creator, name, seat);
        let npc_rng = game.fork_rng();
        let mut table = Self {
            game,
            config,
            policy,
            sink,
            directory,
            npc_rng,
            timers: TimerQueue::new(),
            armed_serial: None,
        };
        table.flush();
        table
    }

    // === Accessors ===

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    // === Input ===

    /// Apply one inbound item at time `now`.
    pub fn handle(&mut self, inbound: Inbound, now: Instant) {
        match inbound {
            Inbound::Message { author, text } => self.on_message(author, &text),
            Inbound::Lobby(command) => self.on_lobby(command),
        }
        self.flush();
        self.arm(now);
    }

    fn on_message(&mut self, author: ParticipantId, text: &str) {
        if !self.game.is_started() || self.game.is_ended() {
            return;
        }
        let is_current_human = self
            .game
            .current()
            .is_some_and(|p| p.id() == author && !p.is_npc());

        let command = match parse_command(text) {
            Ok(command) => command,
            Err(err) if is_current_human => {
                self.reject(author, &UnoError::from(err));
                return;
            }
            Err(_) => return,
        };

        let result = match command {
            Command::Call => match self.game.call_low_hand(author) {
                Err(UnoError::Lifecycle(LifecycleError::NotAParticipant(_))) => return,
                other => other.map(|_| ()),
            },
            // Plays only count from the current human; everything else is chatter.
            _ if !is_current_human => return,
            Command::Play { card, color_choice } => self.game.play_card(author, card, color_choice),
            Command::Draw => self.game.draw_and_skip(author, 1).map(|_| ()),
        };
        if let Err(err) = result {
            self.reject(author, &err);
        }
    }

    fn on_lobby(&mut self, command: LobbyCommand) {
        let creator = self.game.creator();
        let (requester, result) = match command {
            LobbyCommand::Join { id, seat } => {
                let name = self.directory.display_name(id);
                (id, self.game.join(id, name, seat))
            }
            LobbyCommand::Leave(id) => (id, self.game.leave(id)),
            LobbyCommand::Start => (creator, self.game.start()),
            LobbyCommand::Abort => (creator, self.game.abort()),
            LobbyCommand::List => {
                let names = self
                    .game
                    .participants()
                    .iter()
                    .map(|p| p.name().to_string())
                    .collect();
                self.sink.send(Outbound::Roster { names });
                return;
            }
        };
        if let Err(err) = result {
            self.reject(requester, &err);
        }
    }

    fn reject(&self, to: ParticipantId, err: &UnoError) {
        debug!(participant = %to, error = %err, "rejected");
        self.sink.send(Outbound::Rejected {
            to,
            reason: err.to_string(),
        });
    }

    // === Timers ===

    /// Fire every timer due at `now`.
    pub fn fire_due(&mut self, now: Instant) {
        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(timer, now);
        }
    }

    fn fire(&mut self, timer: Timer, now: Instant) {
        if self.game.is_ended() || !self.game.is_started() {
            return;
        }
        let serial = self.game.turn_serial();
        match timer.kind {
            TimerKind::NpcCall(id) => {
                if let Err(err) = self.game.call_low_hand(id) {
                    debug!(participant = %id, error = %err, "scheduled call dropped");
                }
            }
            _ if timer.serial != serial => {
                debug!(armed = timer.serial, serial, kind = ?timer.kind, "stale timer dropped");
                return;
            }
            TimerKind::NpcTurn => {
                let Some(me) = self.game.current().filter(|p| p.is_npc()).map(Participant::id) else {
                    return;
                };
                match take_npc_turn(&mut self.game, self.policy.as_ref(), &mut self.npc_rng) {
                    Ok(Some(delay)) => {
                        self.timers.schedule(now + delay, serial, TimerKind::NpcCall(me));
                    }
                    Ok(None) => {}
                    Err(err) => warn!(participant = %me, error = %err, "npc turn failed"),
                }
            }
            TimerKind::TurnTimeout => {
                let Some(me) = self.game.current_id() else {
                    return;
                };
                info!(participant = %me, "turn timed out");
                if let Err(err) = self.game.draw_and_skip(me, 1) {
                    warn!(participant = %me, error = %err, "timeout draw failed");
                }
            }
        }
        self.flush();
        self.arm(now);
    }

    /// Schedule the next turn's timer, once per turn.
    fn arm(&mut self, now: Instant) {
        let serial = self.game.turn_serial();
        if self.armed_serial == Some(serial) {
            return;
        }
        let Some(current) = self.game.current() else {
            return;
        };
        self.armed_serial = Some(serial);

        if current.is_npc() {
            self.timers
                .schedule(now + self.config.think_delay, serial, TimerKind::NpcTurn);
        } else if let TurnTimeout::DrawAndSkip(limit) = self.config.turn_timeout {
            self.timers.schedule(now + limit, serial, TimerKind::TurnTimeout);
        }
    }

    // === Output ===

    /// Announce pending events and refresh the hands they touched.
    fn flush(&mut self) {
        let events = self.game.take_events();
        let mut touched: Vec<ParticipantId> = Vec::new();
        for event in events {
            match &event {
                GameEvent::Started { .. } => {
                    touched.extend(self.game.participants().iter().map(Participant::id));
                }
                GameEvent::TurnStarted { who, .. }
                | GameEvent::Played { who, .. }
                | GameEvent::Drew { who, .. }
                | GameEvent::ForcedDraw { who, .. }
                | GameEvent::Penalized { who, .. }
                | GameEvent::PileExhausted { who, .. } => touched.push(*who),
                _ => {}
            }
            let text = describe(&event, &self.directory);
            self.sink.send(Outbound::Event { text, event });
        }

        let mut sent: Vec<ParticipantId> = Vec::with_capacity(touched.len());
        for id in touched {
            if sent.contains(&id) {
                continue;
            }
            sent.push(id);
            if let Some(p) = self.game.participant(id).filter(|p| !p.is_npc()) {
                self.sink.send(Outbound::Hand {
                    to: id,
                    cards: p.hand().to_vec(),
                });
            }
        }
    }

    // === Loop ===

    /// Run until the game ends or every sender is dropped.
    pub async fn run(mut self, mut inbox: mpsc::Receiver<Inbound>) -> Game {
        info!("table open");
        while !self.game.is_ended() {
            let deadline = self
                .timers
                .next_deadline()
                .unwrap_or_else(|| Instant::now() + IDLE_WAKEUP);
            tokio::select! {
                inbound = inbox.recv() => match inbound {
                    Some(inbound) => self.handle(inbound, Instant::now()),
                    None => break,
                },
                () = tokio::time::sleep_until(deadline) => self.fire_due(Instant::now()),
            }
        }
        info!(outcome = ?self.game.outcome(), "table closed");
        self.game
    }
}
