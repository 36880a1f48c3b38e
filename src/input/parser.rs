//! Free text to `Command`.
//!
//! Text is lowercased, `_` and `-` become spaces and `+2` / `+4` are
//! spelled out. Two independent pattern sets then look for face tokens and
//! color tokens; exactly one face must appear, and a color is required
//! unless the face is wild.

use std::sync::LazyLock;

use regex::Regex;

use crate::cards::{Card, Color, Face};
use crate::core::ParseError;

/// What a participant asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a card. For wild kinds `card` is uncommitted and the chosen
    /// color, if any, is in `color_choice`.
    Play {
        card: Card,
        color_choice: Option<Color>,
    },
    /// Draw a card and pass.
    Draw,
    /// The low-hand exclamation.
    Call,
}

/// Compiled patterns, built once.
struct CommandPatterns;

impl CommandPatterns {
    fn face() -> &'static Regex {
        static FACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::expect_used)]
            Regex::new(
                r"\b(wild draw (?:four|4)|draw (?:four|4)|draw (?:two|2)|wild|skip|reverse|zero|one|two|three|four|five|six|seven|eight|nine|[0-9])\b",
            )
            .expect("face pattern compiles")
        });
        &FACE_REGEX
    }

    fn color() -> &'static Regex {
        static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::expect_used)]
            Regex::new(r"\b(red|blue|green|yellow)\b").expect("color pattern compiles")
        });
        &COLOR_REGEX
    }

    fn call() -> &'static Regex {
        static CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::expect_used)]
            Regex::new(r"^uno\s*!*$").expect("call pattern compiles")
        });
        &CALL_REGEX
    }

    fn draw() -> &'static Regex {
        static DRAW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::expect_used)]
            Regex::new(r"^(?:draw|pass)(?: a card)?$").expect("draw pattern compiles")
        });
        &DRAW_REGEX
    }
}

/// Parse one chat message.
pub fn parse_command(text: &str) -> Result<Command, ParseError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }
    if CommandPatterns::call().is_match(&normalized) {
        return Ok(Command::Call);
    }
    if CommandPatterns::draw().is_match(&normalized) {
        return Ok(Command::Draw);
    }

    let face = single(CommandPatterns::face(), &normalized, face_of)
        .map_err(|()| ParseError::AmbiguousFace)?
        .ok_or_else(|| ParseError::MissingFace(text.trim().to_string()))?;
    let color = single(CommandPatterns::color(), &normalized, color_of)
        .map_err(|()| ParseError::AmbiguousColor)?;

    if face.is_wild() {
        return Ok(Command::Play {
            card: Card::wild(face),
            color_choice: color,
        });
    }
    let color = color.ok_or(ParseError::MissingColor(face))?;
    Ok(Command::Play {
        card: Card::new(face, color),
        color_choice: None,
    })
}

fn normalize(text: &str) -> String {
    let lowered = text
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .replace("+2", " draw two ")
        .replace("+4", " draw four ");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The one distinct value `pattern` finds, `Err` if it finds several.
fn single<T: PartialEq>(
    pattern: &Regex,
    text: &str,
    convert: fn(&str) -> Option<T>,
) -> Result<Option<T>, ()> {
    let mut found: Option<T> = None;
    for token in pattern.find_iter(text) {
        let Some(value) = convert(token.as_str()) else {
            continue;
        };
        match &found {
            Some(existing) if *existing != value => return Err(()),
            Some(_) => {}
            None => found = Some(value),
        }
    }
    Ok(found)
}

fn face_of(token: &str) -> Option<Face> {
    let face = match token {
        "skip" => Face::Skip,
        "reverse" => Face::Reverse,
        "wild" => Face::Wild,
        t if t.starts_with("wild draw") => Face::WildDrawFour,
        "draw four" | "draw 4" => Face::WildDrawFour,
        "draw two" | "draw 2" => Face::DrawTwo,
        t => Face::Number(number_of(t)?),
    };
    Some(face)
}

fn number_of(token: &str) -> Option<u8> {
    const WORDS: [&str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    if let Some(n) = WORDS.iter().position(|&w| w == token) {
        return u8::try_from(n).ok();
    }
    token.parse().ok().filter(|&n: &u8| n <= 9)
}

fn color_of(token: &str) -> Option<Color> {
    Color::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(token))
}
