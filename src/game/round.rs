use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, RoundError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::ranking;
use crate::result::RoundResult;

use super::{BetState, TableState};

fn describe(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deals both hands and the diva from `deck`.
fn deal<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand_size: usize,
    rng: &mut R,
) -> Result<([Vec<Card>; 2], Card), DrawError> {
    let needed = hand_size
        .checked_mul(2)
        .and_then(|cards| cards.checked_add(1))
        .unwrap_or(usize::MAX);
    if needed > deck.remaining() {
        return Err(DrawError::InsufficientCards {
            requested: needed,
            remaining: deck.remaining(),
        });
    }

    let one = deck.draw(hand_size, Some(Player::One), rng)?;
    let two = deck.draw(hand_size, Some(Player::Two), rng)?;
    let diva = deck
        .draw(1, None, rng)?
        .pop()
        .ok_or(DrawError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;

    Ok(([one, two], diva))
}

impl TableState {
    /// Starts a new round.
    ///
    /// Rebuilds the deck, clears the log, the played cards, the trick scores
    /// and the stake, then deals a hand to each player and draws the diva.
    /// Round scores carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot produce a decisive round or the
    /// deck cannot cover both hands and the diva. The table is unchanged
    /// apart from a notice in the log.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<(), RoundError> {
        if !options.hand_is_decisive() {
            return Err(self.reject(None, "start a round", RoundError::HandTooSmall));
        }

        let mut deck = Deck::new();
        let ([one, two], diva) = match deal(&mut deck, options.hand_size, rng) {
            Ok(dealt) => dealt,
            Err(err) => {
                return Err(self.reject(None, "start a round", RoundError::from(err)));
            }
        };

        tracing::debug!(remaining = deck.remaining(), "deck rebuilt and dealt");

        self.log.clear();
        self.log.push("New round started".to_string());
        self.log
            .push(format!("{} was dealt {}", Player::One, describe(&one)));
        self.log
            .push(format!("{} was dealt {}", Player::Two, describe(&two)));
        self.log.push(format!(
            "The diva is {diva}; manilha rank is {}",
            ranking::manilha_rank(diva)
        ));

        self.deck = deck;
        for (seat, cards) in self.seats.iter_mut().zip([one, two]) {
            seat.hand = Hand::from_cards(cards);
            seat.stack = None;
            seat.trick_score = 0;
        }
        self.diva = Some(diva);
        self.manilhas = ranking::manilhas(diva).to_vec();
        self.bet = BetState::default();
        self.trick_number = 1;
        self.is_started = true;
        self.revision += 1;

        Ok(())
    }

    /// Awards the round to `winner` at the confirmed stake and checks for the
    /// end of the game.
    pub(super) fn finish_round(
        &mut self,
        winner: Player,
        folded: bool,
        options: &GameOptions,
    ) -> RoundResult {
        let points = self.bet.confirmed_value;
        self.log
            .push(format!("{winner} wins the round and scores {points}"));

        let seat = self.seat_mut(winner);
        seat.round_score = seat.round_score.saturating_add(points);
        let total = seat.round_score;

        for seat in &mut self.seats {
            seat.trick_score = 0;
            seat.stack = None;
        }
        self.trick_number = 1;
        self.is_started = false;

        let game_winner = if total >= options.winning_score {
            self.log
                .push(format!("{winner} wins the game with {total} points"));
            for seat in &mut self.seats {
                seat.round_score = 0;
            }
            Some(winner)
        } else {
            None
        };

        RoundResult {
            winner,
            points,
            folded,
            scores: self.round_scores(),
            game_winner,
        }
    }

    /// Clears the table back to its initial state.
    ///
    /// Only the revision survives, so observers still see the change.
    pub fn reset_game(&mut self) {
        let revision = self.revision + 1;
        *self = Self::new();
        self.revision = revision;
        tracing::info!(revision, "game reset");
    }
}
