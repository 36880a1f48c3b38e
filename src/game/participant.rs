//! A seated participant: identity, hand and low-hand call flag.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{ParticipantId, Seat};

/// Cards in a hand, newest first.
pub type Hand = SmallVec<[Card; 16]>;

/// One participant at the table.
///
/// Humans and NPCs share this shape; `seat` says who drives the turns.
#[derive(Clone, Debug)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    seat: Seat,
    hand: Hand,
    called_low_hand: bool,
}

impl Participant {
    #[must_use]
    pub fn new(id: ParticipantId, name: impl Into<String>, seat: Seat) -> Self {
        Self {
            id,
            name: name.into(),
            seat,
            hand: Hand::new(),
            called_low_hand: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> &Seat {
        &self.seat
    }

    #[must_use]
    pub fn is_npc(&self) -> bool {
        self.seat.is_npc()
    }

    /// The hand, most recently acquired card first.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Whether the participant has declared their low hand.
    #[must_use]
    pub fn called_low_hand(&self) -> bool {
        self.called_low_hand
    }

    /// Holding a single card without having called.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.hand.len() == 1 && !self.called_low_hand
    }

    /// Add a drawn card. Drawing voids any earlier call.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.insert(0, card);
        self.called_low_hand = false;
    }

    pub(crate) fn remove(&mut self, card: Card) -> Option<Card> {
        let pos = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(pos))
    }

    pub(crate) fn mark_called(&mut self) {
        self.called_low_hand = true;
    }

    pub(crate) fn take_hand(&mut self) -> Hand {
        self.called_low_hand = false;
        std::mem::take(&mut self.hand)
    }
}
