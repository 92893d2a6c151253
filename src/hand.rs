//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;

/// The cards a player currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card with the given id.
    #[must_use]
    pub fn contains(&self, card_id: u8) -> bool {
        self.cards.iter().any(|card| card.id() == card_id)
    }

    /// Removes and returns the card with the given id.
    pub fn take(&mut self, card_id: u8) -> Option<Card> {
        let position = self.cards.iter().position(|card| card.id() == card_id)?;
        Some(self.cards.remove(position))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
