//! Pure rule functions.
//!
//! - `legality`: what may be played onto the top card
//! - `resolution`: how a played card's effect changes the next turn advance
//!
//! The `game` module calls into these but never re-implements them.

pub mod legality;
pub mod resolution;

pub use legality::{check_play, is_legal};
pub use resolution::{resolve, Direction, Resolution};
