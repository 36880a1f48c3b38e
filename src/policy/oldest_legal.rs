//! The default NPC heuristic: play the card held longest that fits.

use crate::cards::{Card, Color};
use crate::core::GameRng;
use crate::rules::is_legal;

use super::{NpcAction, NpcDecision, NpcPolicy, NpcView};

/// Plays the oldest legal card, drawing when nothing fits.
///
/// - Wild colors are drawn weighted by the colors left in hand, uniformly
///   if the rest of the hand is all wild.
/// - An exposed previous participant is caught with the seat's
///   `call_probability`.
/// - When playing from two cards down to one, the seat schedules its own
///   call after `call_delay`, again with `call_probability`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OldestLegal;

impl NpcPolicy for OldestLegal {
    fn decide(&self, view: &NpcView<'_>, rng: &mut GameRng) -> NpcDecision {
        let p = view.profile.call_probability;
        let catch_previous = view.previous_exposed && rng.gen_bool(p);

        // Hands are newest first, so the oldest legal card is the last one.
        let Some(idx) = view.hand.iter().rposition(|&c| is_legal(c, view.top)) else {
            return NpcDecision {
                catch_previous,
                ..NpcDecision::draw()
            };
        };

        let card = view.hand[idx];
        let color = card.is_wild().then(|| pick_color(view.hand, idx, rng));
        let call_after = (view.hand.len() == 2 && rng.gen_bool(p)).then_some(view.profile.call_delay);

        NpcDecision {
            catch_previous,
            action: NpcAction::Play { card, color },
            call_after,
        }
    }
}

/// Color for a wild, weighted by the rest of the hand.
fn pick_color(hand: &[Card], played: usize, rng: &mut GameRng) -> Color {
    let mut weights = [0u32; Color::ALL.len()];
    for (i, card) in hand.iter().enumerate() {
        if i == played {
            continue;
        }
        if let Some(color) = card.color {
            if let Some(slot) = Color::ALL.iter().position(|&c| c == color) {
                weights[slot] += 1;
            }
        }
    }

    let slot = rng
        .choose_weighted(&weights)
        .unwrap_or_else(|| rng.gen_range_usize(0..Color::ALL.len()));
    Color::ALL[slot]
}
