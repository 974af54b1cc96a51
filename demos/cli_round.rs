//! CLI blackjack example backed by an in-memory store.
//!
//! Set `RUST_LOG=bjcore=debug` to follow every card through `tracing`.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{
    Card, DealEvent, Hand, MemoryStore, Outcome, Phase, RoundState, Seat, SystemClock, Table,
    TableOptions,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(MemoryStore::new(), SystemClock, TableOptions::default(), seed);

    loop {
        if table.is_out_of_chips() {
            println!("You are out of chips.");
            if prompt_line("Start over? (y/n): ") != "y" {
                break;
            }
            table.reset();
        }

        let chips = table.chips();
        let Some(bet) = prompt_u32(&format!(
            "Bet amount (1-{chips}, enter for {}, 0 to quit): ",
            table.bet()
        )) else {
            break;
        };
        let bet = bet.unwrap_or(table.bet());

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let round = match table.start_round(bet) {
            Ok(round) => round,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        let Some(round) = play(round) else {
            return;
        };

        match table.finish_round(&round) {
            Ok(settlement) => {
                let verdict = match settlement.outcome {
                    Outcome::Win => "You win",
                    Outcome::Lose => "You lose",
                    Outcome::Draw => "Draw",
                };
                println!(
                    "{verdict}: {} against {} ({:+} chips, now {})\n",
                    settlement.player_value,
                    settlement.dealer_value,
                    settlement.delta(),
                    settlement.chips_after
                );
            }
            Err(err) => println!("Could not record the round: {err}"),
        }
    }

    if let Ok(scores) = table.high_scores() {
        println!(
            "Best chips: {} | best bet: {} | best streak: {}",
            scores.chips_value, scores.bet_value, scores.streak
        );
    }
}

/// Plays a dealt round to resolution. Returns `None` if the player quits.
fn play(mut round: RoundState) -> Option<RoundState> {
    loop {
        round = run_automatic(round)?;

        match round.phase() {
            Phase::PlayerTurn => {
                print_round(&round);
                let next = match prompt_line("[h]it or [s]tand: ").as_str() {
                    "h" | "hit" => round.hit().map(|(next, card)| {
                        println!("You draw {card}.");
                        next
                    }),
                    "s" | "stand" | "hold" => round.hold(),
                    "q" | "quit" => return None,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };
                match next {
                    Ok(next) => round = next,
                    Err(err) => println!("Action error: {err}"),
                }
            }
            Phase::Resolved => {
                print_round(&round);
                return Some(round);
            }
            Phase::AwaitingBet | Phase::Dealing | Phase::DealerTurn => {}
        }
    }
}

fn run_automatic(round: RoundState) -> Option<RoundState> {
    let mut steps = round.steps();
    for event in steps.by_ref() {
        match event {
            Ok(DealEvent::Dealt { seat, card }) => {
                let who = match seat {
                    Seat::Dealer => "Dealer",
                    Seat::Player => "You",
                };
                println!("{who} receives {card}");
            }
            Ok(DealEvent::Revealed(card)) => println!("Dealer turns over {card}"),
            Ok(DealEvent::Resolved(_)) => {}
            Err(err) => {
                println!("Dealing error: {err}");
                return None;
            }
        }
    }
    Some(steps.into_state())
}

fn print_round(round: &RoundState) {
    println!(
        "\nDealer: {} (value {})",
        format_hand(round.dealer()),
        round.dealer_value(false)
    );
    println!(
        "You:    {} (value {}) | bet {}\n",
        format_hand(round.player()),
        round.player_value(),
        round.bet()
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

/// `None` to quit, `Some(None)` for an empty line.
fn prompt_u32(prompt: &str) -> Option<Option<u32>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(None);
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(Some(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}
