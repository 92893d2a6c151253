use alloc::format;
use core::cmp::Ordering;

use crate::error::PlayError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::ranking;
use crate::result::{PlayOutcome, TrickResult};

use super::TableState;

impl TableState {
    fn check_play(&self, card_id: u8, player: Player) -> Result<(), PlayError> {
        if !self.is_started {
            return Err(PlayError::RoundNotStarted);
        }

        if let Some(raise) = self.bet.pending {
            return Err(PlayError::RaisePending(raise.value));
        }

        let seat = self.seat(player);
        if seat.stack.is_some() {
            return Err(PlayError::AlreadyPlayed);
        }

        if !seat.hand.contains(card_id) {
            return Err(PlayError::CardNotInHand(card_id));
        }

        Ok(())
    }

    /// Moves a card from the player's hand onto the table.
    ///
    /// Once both players have a card down the trick is resolved, and if that
    /// gives the trick winner enough tricks the round is scored.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, a raise is unanswered,
    /// the player already played this trick, or the card is not in their
    /// hand. The table is unchanged apart from a notice in the log.
    ///
    /// # Panics
    ///
    /// Panics if the two cards on the table have equal strength, which cannot
    /// happen with distinct cards.
    pub fn play_card(
        &mut self,
        card_id: u8,
        player: Player,
        options: &GameOptions,
    ) -> Result<PlayOutcome, PlayError> {
        if let Err(err) = self.check_play(card_id, player) {
            return Err(self.reject(Some(player), "play a card", err));
        }

        let seat = self.seat_mut(player);
        let card = seat
            .hand
            .take(card_id)
            .ok_or(PlayError::CardNotInHand(card_id))?;
        seat.stack = Some(card);
        self.log.push(format!("{player} plays {card}"));
        self.revision += 1;

        let trick = self.resolve_trick();
        let round = match trick {
            Some(trick) if self.seat(trick.winner).trick_score >= options.tricks_to_win => {
                Some(self.finish_round(trick.winner, false, options))
            }
            _ => None,
        };

        Ok(PlayOutcome { card, trick, round })
    }

    /// Resolves the trick if both cards are down.
    fn resolve_trick(&mut self) -> Option<TrickResult> {
        let diva = self.diva?;
        let (Some(one), Some(two)) = (self.seat(Player::One).stack, self.seat(Player::Two).stack)
        else {
            return None;
        };

        let winner = match ranking::compare(one, two, diva) {
            Ordering::Greater => Player::One,
            Ordering::Less => Player::Two,
            Ordering::Equal => unreachable!("{one} and {two} have equal strength"),
        };

        let trick_number = self.trick_number;
        let seat = self.seat_mut(winner);
        seat.trick_score += 1;
        let tricks = seat.trick_score;
        self.log.push(format!(
            "{winner} wins trick {trick_number} ({tricks} so far)"
        ));

        self.trick_number += 1;
        for seat in &mut self.seats {
            seat.stack = None;
        }

        Some(TrickResult {
            trick_number,
            player_one_card: one,
            player_two_card: two,
            winner,
        })
    }
}
