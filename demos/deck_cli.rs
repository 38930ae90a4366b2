//! CLI deck example.
//!
//! Usage: `cargo run --example deck_cli -- [PATH]`. The deck is saved to
//! `PATH` (default `my_cards`) and read back.

use std::env;
use std::process::ExitCode;

use deckrs::{Deck, DeckOptions, Shuffler};

const HAND_SIZE: usize = 5;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::args().nth(1).unwrap_or_else(|| "my_cards".to_owned());

    let mut deck = Deck::new();
    println!("Fresh deck:");
    deck.print();

    let options = DeckOptions::default();
    Shuffler::from_clock(options.shuffle).shuffle(&mut deck);

    let (hand, rest) = match deck.clone().deal(HAND_SIZE) {
        Ok(split) => split,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("\nHand:");
    hand.print();
    println!("\n{} cards remain.", rest.len());

    if let Err(err) = deck.save_to_file(&path) {
        log::error!("{err}: {}", error_source(&err));
        return ExitCode::FAILURE;
    }
    log::info!("saved deck to {path}");

    let loaded = Deck::from_file(&path).unwrap_or_else(|err| {
        log::warn!("{err}: {}; using a fresh deck", error_source(&err));
        Deck::new()
    });
    println!("\nReloaded deck:");
    loaded.print();

    if loaded == deck {
        ExitCode::SUCCESS
    } else {
        log::error!("reloaded deck differs from the saved one");
        ExitCode::FAILURE
    }
}

fn error_source(err: &deckrs::StoreError) -> String {
    std::error::Error::source(err).map_or_else(String::new, ToString::to_string)
}
