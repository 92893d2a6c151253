//! A Truco Paulista rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one shared table: the
//! 40-card deck, both hands, the diva (trump indicator) and its manilhas, the
//! raise/accept/fold protocol, trick resolution and scoring to twelve points.
//! Every operation is applied to completion under a single lock, so a relay
//! that receives actions from several connections can call it directly.
//!
//! # Example
//!
//! ```no_run
//! use truco::{Game, GameOptions, Player};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_round().unwrap();
//! game.raise(3, Player::One).unwrap();
//! game.accept(Player::Two).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod ranking;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckSlot};
pub use error::{ActionError, BetError, DrawError, PlayError, RoundError};
pub use game::{
    Action, ActionOutcome, BASE_STAKE, BetState, Game, GameLog, PendingRaise, Phase, RAISE_LADDER,
    Seat, TableState, fallback_for, raise_name,
};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use result::{PlayOutcome, RoundResult, TrickResult};
