//! Card representation and deck composition.
//!
//! - `Card`: immutable face + color value
//! - `Face`: number rank or special kind, with `rank()` and `effect()`
//! - `DrawPile`: the circulating pool cards are drawn from

pub mod card;
pub mod deck;

pub use card::{Card, Color, Effect, Face};
pub use deck::{build_standard_deck, DrawPile, STANDARD_DECK_SIZE};
