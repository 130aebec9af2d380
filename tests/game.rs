//! Game integration tests.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cardbattle::{
    Card, DECK_SIZE, Game, GameOptions, Immediate, Outcome, PlayError, Rank, RoundError, RoundPhase,
    RoundState, SelectError, StepError, Suit, ThreadSleep, build_deck,
};
use common::{card, init_logging, stack_deck};

#[test]
fn ace_of_spades_beats_king_of_spades() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 1);
    let ace = card(Rank::Ace, Suit::Spades);
    let king = card(Rank::King, Suit::Spades);
    stack_deck(&game, king);

    let resolution = game.play(ace.id().get(), &Immediate).unwrap();

    assert_eq!(resolution.player_card, ace);
    assert_eq!(resolution.computer_card, Some(king));
    assert_eq!(resolution.redraw, None);
    assert_eq!(resolution.outcome, Outcome::Win);
}

#[test]
fn seven_of_hearts_beats_seven_of_diamonds_on_suit() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 2);
    let seven_hearts = card(Rank::Seven, Suit::Hearts);
    stack_deck(&game, card(Rank::Seven, Suit::Diamonds));

    let resolution = game.play(seven_hearts.id().get(), &Immediate).unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
}

#[test]
fn identity_tie_is_scored_against_first_draw() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 3);
    let ace = card(Rank::Ace, Suit::Spades);
    stack_deck(&game, ace);

    let ticket = game.select_card(ace.id().get()).unwrap();
    assert_eq!(game.reveal(ticket).unwrap(), Some(ace));

    // A second card appears after the first draw; only the redraw can see it.
    let two = card(Rank::Two, Suit::Clubs);
    game.stack_deck(vec![two]);

    let resolution = game.resolve(ticket).unwrap();
    assert_eq!(resolution.computer_card, Some(ace));
    assert_eq!(resolution.redraw, Some(two));
    assert_eq!(resolution.outcome, Outcome::Lose);

    let state = game.round_state();
    assert_eq!(state.computer_card, Some(two));
    assert_eq!(state.outcome, Some(Outcome::Lose));

    let history = game.history();
    assert_eq!(history[0].computer_card, Some(ace));
    assert_eq!(history[0].outcome, Outcome::Lose);
}

#[test]
fn round_walks_through_each_phase() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 4);
    let queen = card(Rank::Queen, Suit::Hearts);
    stack_deck(&game, card(Rank::Jack, Suit::Spades));
    assert_eq!(game.phase(), RoundPhase::Idle);

    let ticket = game.select_card(queen.id().get()).unwrap();
    let state = game.round_state();
    assert_eq!(state.phase, RoundPhase::PlayerSelecting);
    assert_eq!(state.revealed_card, Some(queen));
    assert_eq!(state.player_card, None);
    assert!(!game.can_select());

    game.reveal(ticket).unwrap();
    let state = game.round_state();
    assert_eq!(state.phase, RoundPhase::ComputerDrawing);
    assert_eq!(state.player_card, Some(queen));
    assert_eq!(state.computer_card, Some(card(Rank::Jack, Suit::Spades)));
    assert_eq!(state.outcome, None);

    game.resolve(ticket).unwrap();
    let state = game.round_state();
    assert_eq!(state.phase, RoundPhase::Resolved);
    assert_eq!(state.outcome, Some(Outcome::Win));
    assert_eq!(state.revealed_card, None);
    assert!(state.is_over);
}

#[test]
fn double_selection_registers_only_the_first() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 5);
    let first = card(Rank::Five, Suit::Clubs);
    let second = card(Rank::Ace, Suit::Hearts);

    let ticket = game.select_card(first.id().get()).unwrap();
    assert_eq!(
        game.select_card(second.id().get()),
        Err(SelectError::AlreadySelected)
    );
    assert_eq!(game.round_state().revealed_card, Some(first));

    game.reveal(ticket).unwrap();
    assert_eq!(
        game.select_card(second.id().get()),
        Err(SelectError::AlreadySelected)
    );

    let resolution = game.resolve(ticket).unwrap();
    assert_eq!(resolution.player_card, first);
    assert_eq!(
        game.select_card(second.id().get()),
        Err(SelectError::RoundOver)
    );
    assert_eq!(game.history().len(), 1);
}

#[test]
fn next_round_clears_round_but_keeps_history() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 6);
    game.play(20, &Immediate).unwrap();
    assert_eq!(game.history().len(), 1);

    game.next_round().unwrap();

    assert_eq!(game.round_state(), RoundState::default());
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert!(game.can_select());

    game.play(31, &Immediate).unwrap();
    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].round, 2);
    assert_eq!(history[1].round, 1);
    assert_eq!(history[0].player_card.id().get(), 31);
}

#[test]
fn next_round_is_refused_mid_round() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 7);
    let ticket = game.select_card(1).unwrap();
    assert_eq!(game.next_round(), Err(RoundError::InProgress));

    game.reveal(ticket).unwrap();
    assert_eq!(game.next_round(), Err(RoundError::InProgress));

    game.resolve(ticket).unwrap();
    assert_eq!(game.next_round(), Ok(()));
}

#[test]
fn restart_invalidates_pending_ticket() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 8);
    let ticket = game.select_card(40).unwrap();

    game.restart();

    assert_eq!(game.round_state(), RoundState::default());
    assert_eq!(game.reveal(ticket), Err(StepError::StaleRound));
    assert!(game.history().is_empty());

    let fresh = game.select_card(41).unwrap();
    game.reveal(fresh).unwrap();
    game.restart();
    assert_eq!(game.resolve(fresh), Err(StepError::StaleRound));
    assert!(game.history().is_empty());
}

#[test]
fn restart_keeps_history_by_default() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 9);
    game.play(10, &Immediate).unwrap();
    game.restart();
    assert_eq!(game.history().len(), 1);
    assert!(game.can_select());
}

#[test]
fn restart_can_clear_history() {
    init_logging();
    let options = GameOptions::instant().with_clear_history_on_restart(true);
    let game = Game::new(options, 10);
    game.play(10, &Immediate).unwrap();
    game.restart();
    assert!(game.history().is_empty());

    let resolution = game.play(11, &Immediate).unwrap();
    assert_eq!(resolution.round, 1);
}

#[test]
fn play_reports_rejected_selection() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 11);
    game.play(5, &Immediate).unwrap();
    assert_eq!(
        game.play(6, &Immediate).unwrap_err(),
        PlayError::Select(SelectError::RoundOver)
    );
}

#[test]
fn same_seed_gives_same_games() {
    let first = Game::new(GameOptions::instant(), 1234);
    let second = Game::new(GameOptions::instant(), 1234);
    assert_eq!(first.deck(), second.deck());

    let a = first.play(7, &Immediate).unwrap();
    let b = second.play(7, &Immediate).unwrap();
    assert_eq!(a, b);
}

#[test]
fn restart_from_another_thread_during_reveal_delay() {
    init_logging();
    let options = GameOptions::default()
        .with_reveal_delay(Duration::from_millis(200))
        .with_compare_delay(Duration::ZERO);
    let game = Arc::new(Game::new(options, 12));

    let player = {
        let game = Arc::clone(&game);
        thread::spawn(move || game.play(13, &ThreadSleep))
    };

    while game.phase() != RoundPhase::PlayerSelecting {
        thread::yield_now();
    }
    game.restart();

    let result = player.join().unwrap();
    assert_eq!(result, Err(PlayError::Step(StepError::StaleRound)));
    assert!(game.history().is_empty());
    assert_eq!(game.phase(), RoundPhase::Idle);
}

#[test]
fn deck_stays_complete_through_rounds_and_restarts() {
    init_logging();
    let game = Game::new(GameOptions::instant(), 13);
    let full: HashSet<Card> = build_deck().into_iter().collect();
    let deck_set = |game: &Game| game.deck().into_iter().collect::<HashSet<Card>>();

    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(deck_set(&game), full);

    game.play(13, &Immediate).unwrap();
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(deck_set(&game), full);

    game.next_round().unwrap();
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(deck_set(&game), full);

    game.select_card(27).unwrap();
    game.restart();
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(deck_set(&game), full);
}
