//! Core engine types: participant ids, RNG, configuration, errors.
//!
//! Nothing in here knows about turn order or card effects; the `game`
//! module builds on these.

pub mod config;
pub mod error;
pub mod participant;
pub mod rng;

pub use config::{GameConfig, NpcProfile, TableConfig, TurnTimeout};
pub use error::{LifecycleError, ParseError, RuleViolation, UnoError, UnoResult};
pub use participant::{ParticipantId, Seat};
pub use rng::GameRng;
