//! Console Truco table: both seats play from the same terminal.
//!
//! Commands use the relay's event names followed by numeric arguments:
//! `new round`, `play card <card id> <player>`, `bet <value> <player>`,
//! `accept <player>`, `fold <player>`, `reset game`. Type `q` to quit.
//! Set `RUST_LOG=truco=debug` to see the engine's tracing output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use truco::{Action, Card, Game, GameOptions, Phase, Player, TableState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Truco Paulista (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game.snapshot());

        let line = prompt_line("> ");
        if line == "q" || line == "quit" {
            break;
        }

        let Some(action) = parse_action(&line) else {
            continue;
        };

        if let Err(err) = game.apply(action) {
            println!("{} rejected: {err}", action.event_name());
        }
    }
}

fn parse_action(line: &str) -> Option<Action> {
    let mut words = Vec::new();
    let mut args = Vec::new();
    for token in line.split_whitespace() {
        match token.parse::<u8>() {
            Ok(value) => args.push(value),
            Err(_) => words.push(token),
        }
    }

    match Action::from_event(&words.join(" "), &args) {
        Ok(action) => Some(action),
        Err(err) => {
            println!("{err}");
            None
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &TableState) {
    println!();
    for entry in state.log.entries() {
        println!("  | {entry}");
    }
    println!();

    match state.diva {
        Some(diva) => println!(
            "Diva: {} | Manilhas: {}",
            diva,
            format_cards(&state.manilhas)
        ),
        None => println!("Diva: N/A"),
    }

    for player in Player::BOTH {
        let seat = state.seat(player);
        let played = seat
            .stack
            .map_or_else(|| "-".to_string(), |card| format_card(&card));
        println!(
            "{player} [{}] score {} | tricks {} | played {played} | hand {}",
            player.number(),
            seat.round_score,
            seat.trick_score,
            format_cards(seat.hand.cards()),
        );
    }

    let bet = state.bet;
    match bet.pending {
        Some(raise) => println!(
            "Stake {} | {} raised to {}",
            bet.confirmed_value, raise.raiser, raise.value
        ),
        None => println!("Stake {}", bet.confirmed_value),
    }

    let phase = match state.phase() {
        Phase::Idle => "type 'new round' to deal".to_string(),
        Phase::AwaitingPlays => format!("trick {}: both players may play", state.trick_number),
        Phase::AwaitingOtherSide { waiting_on } => {
            format!("trick {}: waiting on {waiting_on}", state.trick_number)
        }
        Phase::AwaitingResponse { responder } => {
            format!("{responder} must accept, raise or fold")
        }
    };
    println!("{phase}");
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &Card) -> String {
    format!("{card} #{}", card.id())
}
