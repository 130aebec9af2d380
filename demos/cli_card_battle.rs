//! CLI card battle example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardbattle::{Card, Game, GameOptions, HistoryEntry, Outcome, RoundPhase, ThreadSleep};

fn main() {
    println!("Card Battle CLI example (type 'q' to quit)");
    println!("Pick a face-down card; higher rank wins, ties go to the stronger suit (♠ > ♥ > ♦ > ♣).");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        print_deck(&game);

        let input = prompt_line("Card position (1-52), [n]ext round, [r]estart, [h]istory, [q]uit: ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "n" | "next" => {
                if let Err(err) = game.next_round() {
                    println!("Next round error: {err}");
                }
            }
            "r" | "restart" => {
                game.restart();
                println!("New game.");
            }
            "h" | "history" => print_history(&game.history()),
            other => match other.parse::<usize>() {
                Ok(position) if (1..=game.deck().len()).contains(&position) => {
                    play_position(&game, position);
                }
                _ => println!("Please enter a card position, n, r, h or q."),
            },
        }
    }
}

fn play_position(game: &Game, position: usize) {
    let Some(card) = game.deck().get(position - 1).copied() else {
        return;
    };

    match game.play(card.id().get(), &ThreadSleep) {
        Ok(resolution) => {
            println!("\nYou picked {}", format_card(&resolution.player_card));
            match resolution.computer_card {
                Some(computer) => println!("Computer drew {}", format_card(&computer)),
                None => println!("Computer could not draw"),
            }
            if let Some(redraw) = resolution.redraw {
                println!("(computer drew your card and redrew {})", format_card(&redraw));
            }
            println!("{}\n", format_outcome(resolution.outcome));
        }
        Err(err) => println!("Cannot play that card: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_deck(game: &Game) {
    let state = game.round_state();
    let rows: Vec<String> = game
        .deck()
        .chunks(13)
        .enumerate()
        .map(|(row, cards)| {
            cards
                .iter()
                .enumerate()
                .map(|(column, card)| format_slot(row * 13 + column + 1, card, state.player_card, state.computer_card))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    println!();
    for row in rows {
        println!("{row}");
    }
    if state.phase == RoundPhase::Resolved {
        println!("Round over. Type 'n' for the next round.");
    }
    println!();
}

fn format_slot(
    position: usize,
    card: &Card,
    player: Option<Card>,
    computer: Option<Card>,
) -> String {
    if player == Some(*card) {
        colorize(&format!("{:>4}", card.to_string()), "44")
    } else if computer == Some(*card) {
        colorize(&format!("{:>4}", card.to_string()), "41")
    } else {
        colorize(&format!("{position:>4}"), "90")
    }
}

fn print_history(history: &[HistoryEntry]) {
    if history.is_empty() {
        println!("No rounds played yet.");
        return;
    }
    println!("\nRound | You  | Computer | Result");
    for entry in history {
        let computer = entry
            .computer_card
            .map_or_else(|| "-".to_string(), |card| format_card(&card));
        println!(
            "{:>5} | {} | {} | {}",
            entry.round,
            format_card(&entry.player_card),
            computer,
            format_outcome(entry.outcome)
        );
    }
    println!();
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => colorize(outcome.message(), "32"),
        Outcome::Lose => colorize(outcome.message(), "31"),
        Outcome::Pending => colorize(outcome.message(), "90"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}
