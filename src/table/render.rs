//! Event text for the table channel.

use crate::game::{AbortReason, GameEvent, Outcome};
use crate::rules::Direction;

use super::directory::ParticipantDirectory;

fn cards(n: usize) -> String {
    if n == 1 {
        "1 card".to_string()
    } else {
        format!("{n} cards")
    }
}

/// One line describing `event`.
pub fn describe(event: &GameEvent, dir: &dyn ParticipantDirectory) -> String {
    let name = |id| dir.display_name(id);
    match event {
        GameEvent::Joined { who } => format!("{} joined the game", name(*who)),
        GameEvent::Left { who } => format!("{} left the game", name(*who)),
        GameEvent::Started { top, hand_size } => {
            format!("Dealt {} each. The top card is {top}", cards(*hand_size))
        }
        GameEvent::TurnStarted { who, .. } => format!("It's {}'s turn", name(*who)),
        GameEvent::Played { who, card } => format!("{} played {card}", name(*who)),
        GameEvent::Drew { who, count } => format!("{} drew {} and passed", name(*who), cards(*count)),
        GameEvent::ForcedDraw { who, count } => format!("{} draws {}", name(*who), cards(*count)),
        GameEvent::Skipped { who } => format!("{} is skipped", name(*who)),
        GameEvent::Reversed { direction } => match direction {
            Direction::Forward => "Play goes forward again".to_string(),
            Direction::Backward => "Play reverses".to_string(),
        },
        GameEvent::Called { who } => format!("{}: UNO!", name(*who)),
        GameEvent::Penalized { who, count, caught_by } => match caught_by {
            Some(by) => format!("{} caught {}, who draws {}", name(*by), name(*who), cards(*count)),
            None => format!("{} forgot to call and draws {}", name(*who), cards(*count)),
        },
        GameEvent::PileExhausted { who, wanted, got } => format!(
            "The draw pile is empty; {} got {got} of {wanted}",
            name(*who)
        ),
        GameEvent::Ended(Outcome::Won(who)) => format!("{} wins!", name(*who)),
        GameEvent::Ended(Outcome::Aborted(AbortReason::Requested)) => {
            "The game was called off".to_string()
        }
        GameEvent::Ended(Outcome::Aborted(AbortReason::NotEnoughPlayers)) => {
            "Not enough players left, game over".to_string()
        }
    }
}
