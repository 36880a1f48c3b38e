//! Display names for participants. Presentation only; rules never look here.

use rustc_hash::FxHashMap;

use crate::core::ParticipantId;

/// How a participant is presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub avatar: Option<String>,
}

/// Resolves external identities to profiles.
pub trait ParticipantDirectory: Send + Sync {
    fn profile(&self, id: ParticipantId) -> Option<Profile>;

    /// The participant's name, or their id if unknown.
    fn display_name(&self, id: ParticipantId) -> String {
        self.profile(id)
            .map_or_else(|| id.to_string(), |p| p.name)
    }
}

/// In-memory directory.
#[derive(Clone, Debug, Default)]
pub struct StaticDirectory {
    entries: FxHashMap<ParticipantId, Profile>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: ParticipantId, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    pub fn insert(&mut self, id: ParticipantId, name: impl Into<String>) {
        self.entries.insert(
            id,
            Profile {
                name: name.into(),
                avatar: None,
            },
        );
    }

    /// Attach an avatar to a known participant.
    pub fn set_avatar(&mut self, id: ParticipantId, avatar: impl Into<String>) -> bool {
        match self.entries.get_mut(&id) {
            Some(profile) => {
                profile.avatar = Some(avatar.into());
                true
            }
            None => false,
        }
    }
}

impl ParticipantDirectory for StaticDirectory {
    fn profile(&self, id: ParticipantId) -> Option<Profile> {
        self.entries.get(&id).cloned()
    }
}
