//! Participant identity and seat kinds.
//!
//! ## ParticipantId
//!
//! Opaque external identity (a chat user id). The engine never interprets
//! it beyond equality; display names come from the directory.
//!
//! ## Seat
//!
//! Whether a participant's plays arrive as parsed text (`Human`) or are
//! produced by the decision policy (`Npc`).

use serde::{Deserialize, Serialize};

use super::config::NpcProfile;

/// External identity of a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<@{}>", self.0)
    }
}

/// Who drives a participant's turns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Seat {
    /// Plays arrive as chat messages.
    Human,
    /// Plays are produced by the NPC policy.
    Npc(NpcProfile),
}

impl Seat {
    /// NPC seat with the default profile.
    #[must_use]
    pub fn npc() -> Self {
        Seat::Npc(NpcProfile::default())
    }

    #[must_use]
    pub fn is_npc(&self) -> bool {
        matches!(self, Seat::Npc(_))
    }

    /// The NPC profile, if this seat is autonomous.
    #[must_use]
    pub fn npc_profile(&self) -> Option<&NpcProfile> {
        match self {
            Seat::Npc(profile) => Some(profile),
            Seat::Human => None,
        }
    }
}
