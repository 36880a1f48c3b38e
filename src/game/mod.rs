//! The Uno game engine.
//!
//! `Game` is a state machine `Lobby → InProgress → Ended`:
//!
//! - Lobby: `join` / `leave` until `start` deals and picks a starter.
//! - InProgress: the current participant calls `play_card` or
//!   `draw_and_skip`; anyone may `call_low_hand` at any time.
//! - Ended: a hand reached zero cards, or the game was aborted.
//!
//! Every mutation emits `GameEvent`s, drained with `take_events`.

mod call;
mod event;
mod participant;
mod state;
mod turn;

#[cfg(test)]
mod tests_scenarios;

pub use call::CallOutcome;
pub use event::{AbortReason, GameEvent, Outcome};
pub use participant::{Hand, Participant};
pub use state::{Game, Phase};
