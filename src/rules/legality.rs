//! The matching rule.
//!
//! A non-wild card is legal iff it shares the top card's rank or color.
//! Only number cards have a rank, so specials match by color alone.
//! A wild card is always legal but must be given a color.

use crate::cards::{Card, Color};
use crate::core::RuleViolation;

/// Whether `card` may be played onto `top`.
#[must_use]
pub fn is_legal(card: Card, top: Card) -> bool {
    if card.is_wild() {
        return true;
    }
    let same_rank = card.face.rank().is_some() && card.face.rank() == top.face.rank();
    same_rank || (card.color.is_some() && card.color == top.color)
}

/// Validate a play and return the card as it will sit on the discard.
///
/// Wild kinds come back committed to `color_choice`; the choice is ignored
/// for colored cards.
pub fn check_play(card: Card, color_choice: Option<Color>, top: Card) -> Result<Card, RuleViolation> {
    if card.is_wild() {
        let color = color_choice.ok_or(RuleViolation::ColorRequired(card))?;
        return Ok(card.with_color(color));
    }
    if !is_legal(card, top) {
        return Err(RuleViolation::DoesNotMatch { card, top });
    }
    Ok(card)
}
