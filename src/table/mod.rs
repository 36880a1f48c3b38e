//! Turn transport: connects a `Game` to chat input, timers and output.
//!
//! - `Table`: owns one game and serializes every mutation on one task
//! - `TimerQueue`: NPC thinking delays, scheduled calls, turn timeouts
//! - `OutputSink` / `ChannelSink`: fire-and-forget announcements
//! - `ParticipantDirectory` / `StaticDirectory`: display names

pub mod directory;
pub mod render;
pub mod session;
pub mod sink;
pub mod timers;

pub use directory::{ParticipantDirectory, Profile, StaticDirectory};
pub use render::describe;
pub use session::{Inbound, LobbyCommand, Table};
pub use sink::{ChannelSink, Outbound, OutputSink};
pub use timers::{Timer, TimerKind, TimerQueue};
