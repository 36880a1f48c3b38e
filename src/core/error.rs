//! Error taxonomy.
//!
//! Every error here is user-facing and non-fatal: the game state is left
//! untouched and the same participant may try again.
//!
//! - `ParseError`: the text did not describe a card or command.
//! - `RuleViolation`: a well-formed play that the rules refuse.
//! - `LifecycleError`: lobby/phase misuse (starting alone, full table, ...).

use thiserror::Error;

use super::participant::ParticipantId;
use crate::cards::{Card, Face};

/// Unparseable command text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("say which card you want to play")]
    Empty,
    #[error("I couldn't find a card in {0:?}")]
    MissingFace(String),
    #[error("name only one card per message")]
    AmbiguousFace,
    #[error("which color {0}?")]
    MissingColor(Face),
    #[error("name only one color per message")]
    AmbiguousColor,
}

/// A parsed play the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("it's not your turn")]
    NotYourTurn,
    #[error("you don't have a {0}")]
    NoSuchCard(Card),
    #[error("choose a color for your {0}")]
    ColorRequired(Card),
    #[error("{card} doesn't match {top}")]
    DoesNotMatch { card: Card, top: Card },
}

/// Phase or membership misuse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("you can't start a game alone")]
    CannotStartAlone,
    #[error("the table is full ({max} players)")]
    TableFull { max: usize },
    #[error("not enough cards to deal {hand_size} each to {players} players")]
    NotEnoughCards { hand_size: usize, players: usize },
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game hasn't started yet")]
    NotStarted,
    #[error("the game is over")]
    GameOver,
    #[error("{0} is not in this game")]
    NotAParticipant(ParticipantId),
    #[error("{0} is already in this game")]
    AlreadyJoined(ParticipantId),
    #[error("the game's creator can't be removed")]
    CannotRemoveCreator,
}

/// Any error the engine reports back to a participant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnoError {
    #[error(transparent)]
    Input(#[from] ParseError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

pub type UnoResult<T> = Result<T, UnoError>;
