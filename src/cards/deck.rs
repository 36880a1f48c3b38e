//! Standard deck composition and the circulating draw pile.
//!
//! The draw pile is a single unordered pool: draws remove a uniformly
//! random card, and every card superseded as top card goes straight back
//! into it. There is no separate discard stack to reshuffle.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Face};
use crate::core::GameRng;

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 108;

/// Build the 108-card standard deck.
///
/// Per color: one Zero, two each of One through Nine, two Skip, two
/// Reverse, two Draw Two. Plus four Wild and four Wild Draw Four.
#[must_use]
pub fn build_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(STANDARD_DECK_SIZE);

    for color in Color::ALL {
        deck.push(Card::new(Face::Number(0), color));
        for n in 1..=9 {
            deck.push(Card::new(Face::Number(n), color));
            deck.push(Card::new(Face::Number(n), color));
        }
        for face in [Face::Skip, Face::Reverse, Face::DrawTwo] {
            deck.push(Card::new(face, color));
            deck.push(Card::new(face, color));
        }
    }

    for _ in 0..4 {
        deck.push(Card::wild(Face::Wild));
        deck.push(Card::wild(Face::WildDrawFour));
    }

    deck
}

/// Unordered pool of cards available to draw.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// A pool holding the full standard deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: build_standard_deck(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove a uniformly random card. `None` when exhausted.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    /// Return a card to the pool. Wild kinds lose their committed color.
    pub fn put(&mut self, card: Card) {
        self.cards.push(card.uncommitted());
    }

    /// Remove one specific card, if present.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let pos = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.swap_remove(pos))
    }

    /// Iterate over the pooled cards (no meaningful order).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
