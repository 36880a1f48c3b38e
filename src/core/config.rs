//! Configuration for games, NPC seats and tables.
//!
//! All configuration is plain data with `Default` values and `with_*`
//! builder methods, and round-trips through serde.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rules-level configuration for a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum number of participants a lobby accepts.
    pub max_participants: usize,

    /// Cards dealt to each participant on start.
    pub hand_size: usize,

    /// Cards drawn by a participant caught holding one card without calling.
    pub call_penalty: usize,

    /// Seed for dealing and starter selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_participants: 10,
            hand_size: 7,
            call_penalty: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_max_participants(mut self, max: usize) -> Self {
        self.max_participants = max;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_call_penalty(mut self, cards: usize) -> Self {
        self.call_penalty = cards;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Tunables for an autonomous seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    /// Probability of calling (for itself or to catch the previous player).
    pub call_probability: f64,

    /// Delay between playing down to one card and calling.
    pub call_delay: Duration,
}

impl Default for NpcProfile {
    fn default() -> Self {
        Self {
            call_probability: 0.75,
            call_delay: Duration::from_millis(1500),
        }
    }
}

impl NpcProfile {
    pub fn with_call_probability(mut self, p: f64) -> Self {
        self.call_probability = p;
        self
    }

    pub fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = delay;
        self
    }
}

/// What the table does when a human takes too long.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnTimeout {
    /// Wait indefinitely for input.
    #[default]
    Wait,
    /// After the duration, draw one card for the participant and pass.
    DrawAndSkip(Duration),
}

/// Transport-level configuration for a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Simulated thinking time before an NPC takes its turn.
    pub think_delay: Duration,

    /// Human turn timeout policy.
    pub turn_timeout: TurnTimeout,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            think_delay: Duration::from_millis(2000),
            turn_timeout: TurnTimeout::Wait,
        }
    }
}

impl TableConfig {
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn with_turn_timeout(mut self, timeout: TurnTimeout) -> Self {
        self.turn_timeout = timeout;
        self
    }
}
