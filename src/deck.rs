//! The deck and the dealer.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::player::Player;

/// A card in the deck together with its draw status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSlot {
    /// The card.
    pub card: Card,
    /// Whether the card has been drawn this round.
    pub drawn: bool,
    /// Who the card was dealt to, if anyone.
    pub owner: Option<Player>,
}

/// The 40-card deck.
///
/// Slots are kept in id order. Undrawn cards are tracked in a separate pool
/// so drawing never revisits a card that is already out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    slots: Vec<DeckSlot>,
    available: Vec<usize>,
}

impl Deck {
    /// Builds a fresh deck with every card undrawn.
    ///
    /// The order is fixed: ranks weakest first, suits in manilha order within
    /// each rank, so slot `i` holds the card with id `i + 1`.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                slots.push(DeckSlot {
                    card: Card::new(rank, suit),
                    drawn: false,
                    owner: None,
                });
            }
        }

        Self {
            slots,
            available: (0..DECK_SIZE).collect(),
        }
    }

    /// Marks every card undrawn again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns every slot in id order.
    #[must_use]
    pub fn slots(&self) -> &[DeckSlot] {
        &self.slots
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    fn slot(&self, card: Card) -> Option<&DeckSlot> {
        self.slots.get(usize::from(card.id()) - 1)
    }

    /// Returns whether the card has been drawn.
    #[must_use]
    pub fn is_drawn(&self, card: Card) -> bool {
        self.slot(card).is_some_and(|slot| slot.drawn)
    }

    /// Returns who the card was dealt to.
    #[must_use]
    pub fn owner(&self, card: Card) -> Option<Player> {
        self.slot(card).and_then(|slot| slot.owner)
    }

    /// Draws `count` undrawn cards uniformly at random, without replacement.
    ///
    /// Each drawn card is marked drawn and stamped with `owner`. Cards are
    /// returned in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `count` cards
    /// remain. Nothing is drawn in that case.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        owner: Option<Player>,
        rng: &mut R,
    ) -> Result<Vec<Card>, DrawError> {
        if count > self.available.len() {
            return Err(DrawError::InsufficientCards {
                requested: count,
                remaining: self.available.len(),
            });
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let pick = rng.random_range(0..self.available.len());
            let index = self.available.swap_remove(pick);
            let slot = &mut self.slots[index];
            slot.drawn = true;
            slot.owner = owner;
            drawn.push(slot.card);
        }

        tracing::trace!(count, remaining = self.available.len(), "drew cards");
        Ok(drawn)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
