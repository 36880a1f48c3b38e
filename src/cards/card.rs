//! Card value type.
//!
//! A `Card` is a `Face` plus an optional `Color`. The face carries two
//! orthogonal properties: a matching rank (`Face::rank`) used by the
//! legality rule, and an `Effect` used by effect resolution.
//!
//! Only wild kinds are ever colorless, and only while held or in the draw
//! pile. Playing a wild commits it to the chooser's color.

use serde::{Deserialize, Serialize};

/// The four card colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a card does once it lands on the discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    None,
    Skip,
    Reverse,
    /// The next participant draws this many cards and loses their turn.
    Draw(usize),
}

/// Card face: a number rank or one of the five special kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Numeric rank, 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

const NUMBER_NAMES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

impl Face {
    /// Every face, numbers first.
    pub const ALL: [Face; 15] = [
        Face::Number(0),
        Face::Number(1),
        Face::Number(2),
        Face::Number(3),
        Face::Number(4),
        Face::Number(5),
        Face::Number(6),
        Face::Number(7),
        Face::Number(8),
        Face::Number(9),
        Face::Skip,
        Face::Reverse,
        Face::DrawTwo,
        Face::Wild,
        Face::WildDrawFour,
    ];

    /// Matching key for rank comparisons.
    ///
    /// Numbers map to themselves. Special kinds have no rank: they match
    /// only by color (or, for wilds, always).
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Face::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn effect(self) -> Effect {
        match self {
            Face::Number(_) | Face::Wild => Effect::None,
            Face::Skip => Effect::Skip,
            Face::Reverse => Effect::Reverse,
            Face::DrawTwo => Effect::Draw(2),
            Face::WildDrawFour => Effect::Draw(4),
        }
    }

    /// Wild kinds are colorless until played.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Face::Wild | Face::WildDrawFour)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::Number(n) => NUMBER_NAMES.get(n as usize).copied().unwrap_or("?"),
            Face::Skip => "Skip",
            Face::Reverse => "Reverse",
            Face::DrawTwo => "Draw Two",
            Face::Wild => "Wild",
            Face::WildDrawFour => "Wild Draw Four",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub face: Face,
    pub color: Option<Color>,
}

impl Card {
    /// A colored card.
    #[must_use]
    pub const fn new(face: Face, color: Color) -> Self {
        Self { face, color: Some(color) }
    }

    /// A colorless wild card, as it sits in a hand or the draw pile.
    #[must_use]
    pub const fn wild(face: Face) -> Self {
        Self { face, color: None }
    }

    /// This card with its color replaced; used to commit a played wild.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { face: self.face, color: Some(color) }
    }

    /// The card as it looks in a hand: wild kinds lose any committed color.
    #[must_use]
    pub const fn uncommitted(self) -> Self {
        if self.face.is_wild() {
            Self::wild(self.face)
        } else {
            self
        }
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.face.is_wild()
    }

    #[must_use]
    pub const fn effect(self) -> Effect {
        self.face.effect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.face),
            None => write!(f, "{}", self.face),
        }
    }
}
