//! Card strength under a given diva (trump indicator).
//!
//! Outside the manilhas, strength is the card's base id: ids are rank-major in
//! Truco strength order, so comparing ids compares ranks. The four cards one
//! rank above the diva (wrapping from Three to Four) are manilhas and gain a
//! flat bonus that lifts them over every other card while keeping their suit
//! order (Diamonds, Spades, Hearts, Clubs).

use core::cmp::Ordering;

use crate::card::{Card, Rank, Suit};

/// Strength bonus carried by a manilha.
pub const MANILHA_BONUS: u8 = 100;

/// Rank of the manilhas for the given diva.
#[must_use]
pub const fn manilha_rank(diva: Card) -> Rank {
    diva.rank.next()
}

/// Returns whether `card` is a manilha under `diva`.
#[must_use]
pub fn is_manilha(card: Card, diva: Card) -> bool {
    card.rank == manilha_rank(diva)
}

/// The four manilhas under `diva`, weakest first.
#[must_use]
pub fn manilhas(diva: Card) -> [Card; 4] {
    let rank = manilha_rank(diva);
    Suit::ALL.map(|suit| Card::new(rank, suit))
}

/// Effective strength of `card` under `diva`.
///
/// Strengths are unique across the deck for any diva.
#[must_use]
pub fn effective_strength(card: Card, diva: Card) -> u8 {
    if is_manilha(card, diva) {
        MANILHA_BONUS + card.id()
    } else {
        card.id()
    }
}

/// Compares two cards by effective strength under `diva`.
#[must_use]
pub fn compare(a: Card, b: Card, diva: Card) -> Ordering {
    effective_strength(a, diva).cmp(&effective_strength(b, diva))
}
