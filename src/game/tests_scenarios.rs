//! Rule scenarios on rigged tables.
//!
//! `rig` swaps every hand and the top card for known cards while keeping
//! all 108 cards in circulation, so conservation holds in every test.

use super::*;
use crate::cards::{Card, Color, Face, STANDARD_DECK_SIZE};
use crate::core::{GameConfig, LifecycleError, ParticipantId, RuleViolation, Seat, UnoError};
use crate::rules::Direction;

fn pid(n: u64) -> ParticipantId {
    ParticipantId::new(n)
}

fn red(n: u8) -> Card {
    Card::new(Face::Number(n), Color::Red)
}

fn card(face: Face, color: Color) -> Card {
    Card::new(face, color)
}

/// A started game with participants `1..=n`, the first being the creator.
fn started(n: u64, seed: u64) -> Game {
    let mut game = Game::new(GameConfig::default().with_seed(seed), pid(1), "p1", Seat::Human);
    for i in 2..=n {
        game.join(pid(i), format!("p{i}"), Seat::Human).unwrap();
    }
    game.start().unwrap();
    game.take_events();
    game
}

/// Replace hands (listed newest first) and the top card, and set the turn.
fn rig(game: &mut Game, hands: &[&[Card]], top: Card, turn: usize) {
    for p in &mut game.participants {
        for c in p.take_hand() {
            game.draw_pile.put(c);
        }
    }
    if let Some(old) = game.top_card.take() {
        game.draw_pile.put(old);
    }
    for (p, cards) in game.participants.iter_mut().zip(hands) {
        for &c in cards.iter().rev() {
            let c = game.draw_pile.take(c.uncommitted()).expect("card available in pool");
            p.receive(c);
        }
    }
    game.draw_pile.take(top.uncommitted()).expect("top card available in pool");
    game.top_card = Some(top);
    game.turn_index = Some(turn);
    game.previous = None;
    game.direction = Direction::Forward;
    game.take_events();
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

fn hand_len(game: &Game, id: u64) -> usize {
    game.participant(pid(id)).unwrap().hand_len()
}

// =============================================================================
// Start
// =============================================================================

#[test]
fn test_start_deals_and_seeds() {
    let game = started(2, 42);

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(hand_len(&game, 1), 7);
    assert_eq!(hand_len(&game, 2), 7);
    assert_eq!(game.draw_pile_len(), 108 - 14 - 1);
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
    assert!(game.top_card().is_some());
    assert!(game.turn_index().is_some());
    assert_eq!(game.previous_turn_index(), None);
    assert_eq!(game.turn_serial(), 1);
}

#[test]
fn test_seed_card_always_has_a_color() {
    for seed in 0..200 {
        let game = started(3, seed);
        assert!(game.top_card().unwrap().color.is_some(), "seed {seed}");
    }
}

#[test]
fn test_start_is_deterministic_per_seed() {
    let a = started(4, 7);
    let b = started(4, 7);
    assert_eq!(a.top_card(), b.top_card());
    assert_eq!(a.turn_index(), b.turn_index());
    for (pa, pb) in a.participants().iter().zip(b.participants()) {
        assert_eq!(pa.hand(), pb.hand());
    }
}

#[test]
fn test_start_alone_rejected() {
    let mut game = Game::new(GameConfig::default(), pid(1), "solo", Seat::Human);
    assert_eq!(
        game.start(),
        Err(UnoError::Lifecycle(LifecycleError::CannotStartAlone))
    );
    assert_eq!(game.phase(), Phase::Lobby);
    assert_eq!(game.draw_pile_len(), STANDARD_DECK_SIZE);
}

#[test]
fn test_start_twice_rejected() {
    let mut game = started(2, 1);
    assert_eq!(game.start(), Err(LifecycleError::AlreadyStarted.into()));
}

#[test]
fn test_start_rejects_oversized_deal() {
    let config = GameConfig::default().with_hand_size(60).with_seed(1);
    let mut game = Game::new(config, pid(1), "a", Seat::Human);
    game.join(pid(2), "b", Seat::Human).unwrap();
    assert_eq!(
        game.start(),
        Err(LifecycleError::NotEnoughCards { hand_size: 60, players: 2 }.into())
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_color_match_recycles_top_card() {
    let mut game = started(2, 42);
    rig(
        &mut game,
        &[
            &[red(3), red(4), red(6), red(7), red(8), red(9), red(1)],
            &[red(2), red(2), red(3), red(4), red(6), red(7), red(8)],
        ],
        red(5),
        0,
    );
    assert_eq!(game.draw_pile_len(), 93);

    game.play_card(pid(1), red(3), None).unwrap();

    assert_eq!(game.draw_pile_len(), 94);
    assert_eq!(hand_len(&game, 1), 6);
    assert_eq!(hand_len(&game, 2), 7);
    assert_eq!(game.top_card(), Some(red(3)));
    assert_eq!(game.current_id(), Some(pid(2)));
    assert_eq!(game.previous_turn_index(), Some(0));
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

#[test]
fn test_scenario_b_rank_match_changes_color() {
    let mut game = started(2, 42);
    let blue_five = card(Face::Number(5), Color::Blue);
    rig(&mut game, &[&[blue_five, red(1)], &[red(2), red(3)]], red(5), 0);

    game.play_card(pid(1), blue_five, None).unwrap();

    assert_eq!(game.top_card(), Some(blue_five));
    assert_eq!(game.top_card().unwrap().color, Some(Color::Blue));
}

#[test]
fn test_scenario_c_mismatch_changes_nothing() {
    let mut game = started(2, 42);
    let blue_seven = card(Face::Number(7), Color::Blue);
    rig(&mut game, &[&[blue_seven, red(1)], &[red(2), red(3)]], red(5), 0);
    let before_hand = game.participant(pid(1)).unwrap().hand().to_vec();
    let before_pile = game.draw_pile_len();

    let err = game.play_card(pid(1), blue_seven, None).unwrap_err();

    assert_eq!(
        err,
        RuleViolation::DoesNotMatch { card: blue_seven, top: red(5) }.into()
    );
    assert_eq!(game.participant(pid(1)).unwrap().hand(), before_hand.as_slice());
    assert_eq!(game.draw_pile_len(), before_pile);
    assert_eq!(game.top_card(), Some(red(5)));
    assert_eq!(game.current_id(), Some(pid(1)));
    assert!(game.take_events().is_empty());
}

#[test]
fn test_scenario_d_missed_call_penalized_on_next_action() {
    let mut game = started(2, 42);
    let blue_nine = card(Face::Number(9), Color::Blue);
    rig(&mut game, &[&[red(3), blue_nine], &[red(8), red(2), red(4)]], red(5), 0);

    game.play_card(pid(1), red(3), None).unwrap();
    assert_eq!(hand_len(&game, 1), 1);

    game.play_card(pid(2), red(8), None).unwrap();
    assert_eq!(hand_len(&game, 1), 3);
    assert!(game.take_events().iter().any(|e| matches!(
        e,
        GameEvent::Penalized { who, count: 2, caught_by: None } if *who == pid(1)
    )));

    // Further calls change nothing
    game.call_low_hand(pid(2)).unwrap();
    game.call_low_hand(pid(1)).unwrap();
    assert_eq!(hand_len(&game, 1), 3);
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

#[test]
fn test_scenario_e_wild_commits_chosen_color() {
    let mut game = started(2, 42);
    let green_two = card(Face::Number(2), Color::Green);
    rig(
        &mut game,
        &[&[Card::wild(Face::Wild), red(1)], &[red(3), green_two, red(4)]],
        red(5),
        0,
    );

    game.play_card(pid(1), Card::wild(Face::Wild), Some(Color::Green)).unwrap();

    let top = game.top_card().unwrap();
    assert_eq!(top, Card::wild(Face::Wild).with_color(Color::Green));

    assert_eq!(
        game.play_card(pid(2), red(3), None),
        Err(RuleViolation::DoesNotMatch { card: red(3), top }.into())
    );
    game.play_card(pid(2), green_two, None).unwrap();
    assert_eq!(game.top_card(), Some(green_two));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_wild_without_color_rejected() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[Card::wild(Face::WildDrawFour), red(1)], &[red(2)]], red(5), 0);

    assert_eq!(
        game.play_card(pid(1), Card::wild(Face::WildDrawFour), None),
        Err(RuleViolation::ColorRequired(Card::wild(Face::WildDrawFour)).into())
    );
    assert_eq!(hand_len(&game, 1), 2);
}

#[test]
fn test_card_not_held_rejected() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(1), red(2)], &[red(3)]], red(5), 0);

    assert_eq!(
        game.play_card(pid(1), red(9), None),
        Err(RuleViolation::NoSuchCard(red(9)).into())
    );
}

#[test]
fn test_out_of_turn_rejected() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(1), red(2)], &[red(3), red(4)]], red(5), 0);

    assert_eq!(
        game.play_card(pid(2), red(3), None),
        Err(RuleViolation::NotYourTurn.into())
    );
    assert_eq!(
        game.draw_and_skip(pid(2), 1),
        Err(RuleViolation::NotYourTurn.into())
    );
    assert_eq!(
        game.play_card(pid(9), red(3), None),
        Err(LifecycleError::NotAParticipant(pid(9)).into())
    );
}

// =============================================================================
// Turn order and effects
// =============================================================================

#[test]
fn test_turn_order_plain_plays() {
    let mut game = started(3, 42);
    rig(
        &mut game,
        &[
            &[red(1), red(2), red(3), red(4), red(5), red(6)],
            &[red(1), red(2), red(3), red(4), red(5), red(6)],
            &[red(7), red(8), red(9), red(7), red(8), red(9)],
        ],
        red(0),
        0,
    );

    for n in 0..9 {
        let current = game.current().unwrap();
        let id = current.id();
        let card = current.hand()[0];
        game.play_card(id, card, None).unwrap();
        assert_eq!(game.turn_index(), Some((n + 1) % 3));
    }
}

#[test]
fn test_reverse_heads_up_acts_as_skip() {
    let mut game = started(2, 42);
    let reverse = card(Face::Reverse, Color::Red);
    rig(&mut game, &[&[reverse, red(1), red(2)], &[red(3), red(4)]], red(5), 0);

    game.play_card(pid(1), reverse, None).unwrap();

    assert_eq!(game.current_id(), Some(pid(1)));
    assert_eq!(game.direction(), Direction::Backward);
    let events = game.take_events();
    assert!(events.contains(&GameEvent::Skipped { who: pid(2) }));
}

#[test]
fn test_reverse_three_players_flips_direction() {
    let mut game = started(3, 42);
    let reverse = card(Face::Reverse, Color::Red);
    rig(
        &mut game,
        &[&[reverse, red(1)], &[red(2), red(3)], &[red(4), red(6)]],
        red(5),
        0,
    );

    game.play_card(pid(1), reverse, None).unwrap();
    assert_eq!(game.current_id(), Some(pid(3)));

    game.play_card(pid(3), red(4), None).unwrap();
    assert_eq!(game.current_id(), Some(pid(2)));
}

#[test]
fn test_skip_passes_over_next() {
    let mut game = started(3, 42);
    let skip = card(Face::Skip, Color::Red);
    rig(&mut game, &[&[skip, red(1)], &[red(2), red(3)], &[red(4), red(6)]], red(5), 0);

    game.play_card(pid(1), skip, None).unwrap();

    assert_eq!(game.current_id(), Some(pid(3)));
    assert_eq!(hand_len(&game, 2), 2);
}

#[test]
fn test_draw_two_hits_next_and_skips_them() {
    let mut game = started(3, 42);
    let draw_two = card(Face::DrawTwo, Color::Red);
    rig(
        &mut game,
        &[&[draw_two, red(1)], &[red(2), red(3)], &[red(4), red(6)]],
        red(5),
        0,
    );

    game.play_card(pid(1), draw_two, None).unwrap();

    assert_eq!(hand_len(&game, 2), 4);
    assert_eq!(hand_len(&game, 3), 2);
    assert_eq!(game.current_id(), Some(pid(3)));
    let events = game.take_events();
    assert!(events.contains(&GameEvent::ForcedDraw { who: pid(2), count: 2 }));
    assert!(events.contains(&GameEvent::Skipped { who: pid(2) }));
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

#[test]
fn test_wild_draw_four_hits_next() {
    let mut game = started(2, 42);
    let draw_four = Card::wild(Face::WildDrawFour);
    rig(&mut game, &[&[draw_four, red(1)], &[red(2), red(3)]], red(5), 0);

    game.play_card(pid(1), draw_four, Some(Color::Yellow)).unwrap();

    assert_eq!(hand_len(&game, 2), 6);
    assert_eq!(game.current_id(), Some(pid(1)));
    assert_eq!(game.top_card().unwrap().color, Some(Color::Yellow));
}

#[test]
fn test_draw_and_skip() {
    let mut game = started(3, 42);
    rig(&mut game, &[&[red(1), red(2)], &[red(3)], &[red(4)]], red(5), 0);
    game.participants[0].mark_called();

    let drawn = game.draw_and_skip(pid(1), 1).unwrap();

    assert_eq!(drawn, 1);
    assert_eq!(hand_len(&game, 1), 3);
    assert!(!game.participant(pid(1)).unwrap().called_low_hand());
    assert_eq!(game.current_id(), Some(pid(2)));
    assert_eq!(game.previous_turn_index(), Some(0));
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_emptying_hand_wins() {
    let mut game = started(3, 42);
    rig(&mut game, &[&[red(3)], &[red(2), red(4)], &[red(6)]], red(5), 0);

    game.play_card(pid(1), red(3), None).unwrap();

    assert!(game.is_ended());
    assert_eq!(game.winner(), Some(pid(1)));
    assert!(game.current().is_none());
    assert_eq!(
        game.play_card(pid(2), red(2), None),
        Err(LifecycleError::GameOver.into())
    );
    assert_eq!(game.call_low_hand(pid(2)), Err(LifecycleError::GameOver.into()));
}

#[test]
fn test_winning_card_effect_not_resolved() {
    let mut game = started(2, 42);
    let draw_two = card(Face::DrawTwo, Color::Red);
    rig(&mut game, &[&[draw_two], &[red(2), red(4)]], red(5), 0);

    game.play_card(pid(1), draw_two, None).unwrap();

    assert_eq!(game.winner(), Some(pid(1)));
    assert_eq!(hand_len(&game, 2), 2);
}

// =============================================================================
// Low-hand calls
// =============================================================================

#[test]
fn test_anticipatory_call_protects() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(3), red(9)], &[red(8), red(2), red(4)]], red(5), 0);

    let outcome = game.call_low_hand(pid(1)).unwrap();
    assert!(outcome.declared);

    game.play_card(pid(1), red(3), None).unwrap();
    game.play_card(pid(2), red(8), None).unwrap();
    assert_eq!(hand_len(&game, 1), 1);
}

#[test]
fn test_late_call_protects() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(3), red(9)], &[red(8), red(2), red(4)]], red(5), 0);

    game.play_card(pid(1), red(3), None).unwrap();
    let outcome = game.call_low_hand(pid(1)).unwrap();
    assert_eq!(outcome, CallOutcome { declared: true, caught: None });

    game.play_card(pid(2), red(8), None).unwrap();
    assert_eq!(hand_len(&game, 1), 1);
}

#[test]
fn test_catching_previous_participant() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(3), red(9)], &[red(8), red(2), red(4)]], red(5), 0);

    game.play_card(pid(1), red(3), None).unwrap();
    let outcome = game.call_low_hand(pid(2)).unwrap();

    assert_eq!(outcome, CallOutcome { declared: false, caught: Some(pid(1)) });
    assert_eq!(hand_len(&game, 1), 3);
    // The catcher keeps the turn
    assert_eq!(game.current_id(), Some(pid(2)));

    let again = game.call_low_hand(pid(2)).unwrap();
    assert_eq!(again, CallOutcome::default());
    assert_eq!(hand_len(&game, 1), 3);
}

#[test]
fn test_call_with_too_many_cards_does_nothing() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(3), red(9), red(1)], &[red(8), red(2)]], red(5), 0);

    assert_eq!(game.call_low_hand(pid(1)).unwrap(), CallOutcome::default());
    assert!(!game.participant(pid(1)).unwrap().called_low_hand());
    assert_eq!(
        game.call_low_hand(pid(7)),
        Err(LifecycleError::NotAParticipant(pid(7)).into())
    );
}

#[test]
fn test_own_consecutive_play_still_penalized() {
    let mut game = started(2, 42);
    let skip = card(Face::Skip, Color::Red);
    rig(&mut game, &[&[skip, red(3)], &[red(8), red(2)]], red(5), 0);

    game.play_card(pid(1), skip, None).unwrap();
    assert_eq!(game.current_id(), Some(pid(1)));
    assert_eq!(hand_len(&game, 1), 1);

    game.play_card(pid(1), red(3), None).unwrap();

    assert_eq!(hand_len(&game, 1), 2);
    assert_eq!(game.winner(), None);
    let events = game.take_events();
    assert!(events.contains(&GameEvent::Penalized {
        who: pid(1),
        count: 2,
        caught_by: None
    }));
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

#[test]
fn test_own_consecutive_draw_still_penalized() {
    let mut game = started(2, 42);
    let skip = card(Face::Skip, Color::Red);
    rig(&mut game, &[&[skip, red(3)], &[red(8), red(2)]], red(5), 0);

    game.play_card(pid(1), skip, None).unwrap();
    game.draw_and_skip(pid(1), 1).unwrap();

    assert_eq!(hand_len(&game, 1), 4);
    assert!(!game.participant(pid(1)).unwrap().called_low_hand());
    assert_eq!(game.current_id(), Some(pid(2)));
}

// =============================================================================
// Lobby and churn
// =============================================================================

#[test]
fn test_lobby_membership_rules() {
    let config = GameConfig::default().with_max_participants(3).with_seed(5);
    let mut game = Game::new(config, pid(1), "host", Seat::Human);

    game.join(pid(2), "b", Seat::npc()).unwrap();
    assert_eq!(
        game.join(pid(2), "b", Seat::Human),
        Err(LifecycleError::AlreadyJoined(pid(2)).into())
    );
    game.join(pid(3), "c", Seat::Human).unwrap();
    assert_eq!(
        game.join(pid(4), "d", Seat::Human),
        Err(LifecycleError::TableFull { max: 3 }.into())
    );

    game.leave(pid(3)).unwrap();
    game.join(pid(4), "d", Seat::Human).unwrap();
    assert_eq!(game.leave(pid(1)), Err(LifecycleError::CannotRemoveCreator.into()));

    game.start().unwrap();
    assert_eq!(
        game.join(pid(5), "e", Seat::Human),
        Err(LifecycleError::AlreadyStarted.into())
    );
}

#[test]
fn test_leave_on_own_turn_passes_turn() {
    let mut game = started(3, 42);
    rig(&mut game, &[&[red(1), red(2)], &[red(3), red(4)], &[red(6), red(7)]], red(5), 1);
    let serial = game.turn_serial();

    game.leave(pid(2)).unwrap();

    assert_eq!(game.current_id(), Some(pid(3)));
    assert_eq!(game.turn_serial(), serial + 1);
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
}

#[test]
fn test_leave_on_own_turn_backward() {
    let mut game = started(4, 42);
    rig(
        &mut game,
        &[&[red(1)], &[red(2)], &[red(3)], &[red(4)]],
        red(5),
        2,
    );
    game.direction = Direction::Backward;

    game.leave(pid(3)).unwrap();
    assert_eq!(game.current_id(), Some(pid(2)));
}

#[test]
fn test_leave_before_current_keeps_current() {
    let mut game = started(3, 42);
    rig(&mut game, &[&[red(1)], &[red(3)], &[red(6)]], red(5), 2);

    game.leave(pid(2)).unwrap();
    assert_eq!(game.current_id(), Some(pid(3)));
    assert_eq!(game.turn_index(), Some(1));
}

#[test]
fn test_leave_down_to_one_aborts() {
    let mut game = started(2, 42);
    game.leave(pid(2)).unwrap();

    assert_eq!(
        game.outcome(),
        Some(Outcome::Aborted(AbortReason::NotEnoughPlayers))
    );
    assert_eq!(game.winner(), None);
    assert_eq!(game.leave(pid(1)), Err(LifecycleError::GameOver.into()));
}

#[test]
fn test_abort() {
    let mut game = started(2, 42);
    game.abort().unwrap();
    assert_eq!(game.outcome(), Some(Outcome::Aborted(AbortReason::Requested)));
    assert_eq!(game.abort(), Err(LifecycleError::GameOver.into()));
}

// =============================================================================
// Exhaustion
// =============================================================================

#[test]
fn test_exhausted_pile_short_draw() {
    let mut game = started(2, 42);
    let draw_two = card(Face::DrawTwo, Color::Red);
    rig(&mut game, &[&[draw_two, red(1)], &[red(2)]], red(5), 0);
    while let Some(c) = game.draw_pile.draw(&mut game.rng) {
        game.participants[1].receive(c);
    }

    game.play_card(pid(1), draw_two, None).unwrap();

    // Only the recycled Red Five was available
    let events = game.take_events();
    assert!(events.contains(&GameEvent::PileExhausted { who: pid(2), wanted: 2, got: 1 }));
    assert_eq!(game.draw_pile_len(), 0);
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
    assert!(!game.is_ended());
}

#[test]
fn test_history_records_everything() {
    let mut game = started(2, 42);
    rig(&mut game, &[&[red(3), red(9)], &[red(8), red(2)]], red(5), 0);
    let before = game.history().len();

    game.play_card(pid(1), red(3), None).unwrap();

    let drained = game.take_events();
    assert_eq!(game.history().len(), before + drained.len());
    assert!(matches!(game.history().front(), Some(GameEvent::Joined { .. })));
}
