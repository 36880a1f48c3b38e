//! # rust-uno
//!
//! A turn-based Uno engine with autonomous players and a chat-table transport.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `Game` alone holds hands, the draw pile and the top
//!    card. Everything else asks it to mutate.
//!
//! 2. **Rules as pure functions**: legality and effect planning live in
//!    `rules` and never touch state.
//!
//! 3. **Reproducible**: every random choice goes through a seeded
//!    `GameRng`, so a seed replays the same game.
//!
//! ## Architecture
//!
//! - **Event log**: every state change emits a `GameEvent`, kept in a
//!   persistent history and drained by the transport.
//!
//! - **Pluggable NPCs**: autonomous seats decide through the `NpcPolicy`
//!   trait; the engine validates whatever they choose.
//!
//! - **Single-task transport**: a `Table` serializes chat input, lobby
//!   commands and timers on one tokio task.
//!
//! ## Modules
//!
//! - `core`: participant ids, RNG, configuration, errors
//! - `cards`: colors, faces, cards, the standard deck and draw pile
//! - `rules`: legality and effect resolution
//! - `game`: the `Game` state machine
//! - `policy`: NPC decision policies and headless self-play
//! - `input`: chat text to commands
//! - `table`: async turn transport

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod policy;
pub mod input;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    ParticipantId, Seat,
    GameRng,
    GameConfig, NpcProfile, TableConfig, TurnTimeout,
    LifecycleError, ParseError, RuleViolation, UnoError, UnoResult,
};

pub use crate::cards::{Card, Color, Effect, Face, DrawPile, build_standard_deck, STANDARD_DECK_SIZE};

pub use crate::rules::{check_play, is_legal, resolve, Direction, Resolution};

pub use crate::game::{AbortReason, CallOutcome, Game, GameEvent, Outcome, Participant, Phase};

pub use crate::policy::{autoplay, take_npc_turn, NpcAction, NpcDecision, NpcPolicy, NpcView, OldestLegal};

pub use crate::input::{parse_command, Command};

pub use crate::table::{
    ChannelSink, Inbound, LobbyCommand, Outbound, OutputSink,
    ParticipantDirectory, StaticDirectory, Table,
};
