use alloc::format;

use crate::error::BetError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;

use super::{BASE_STAKE, BetState, PendingRaise, TableState, raise_name};

/// Stake that stands while a raise to `value` is unanswered: the rung below.
#[must_use]
pub const fn fallback_for(value: u8) -> u8 {
    if value > 3 { value - 3 } else { BASE_STAKE }
}

impl TableState {
    fn check_raise(&self, value: u8, player: Player) -> Result<(), BetError> {
        if !self.is_started {
            return Err(BetError::RoundNotStarted);
        }

        if self.bet.holder() == Some(player) {
            return Err(BetError::AlreadyHoldsBet);
        }

        let expected = self.bet.next_rung().ok_or(BetError::LadderExhausted)?;
        if value != expected {
            return Err(BetError::NotNextRung {
                expected,
                requested: value,
            });
        }

        Ok(())
    }

    /// Raises the stake to `value`.
    ///
    /// Raising over an unanswered raise accepts it first. Either way the
    /// stake that stands until this raise is answered is the rung below it.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the player made the last
    /// raise, the ladder is exhausted, or `value` is not the next rung. The
    /// table is unchanged apart from a notice in the log.
    pub fn raise(&mut self, value: u8, player: Player) -> Result<(), BetError> {
        if let Err(err) = self.check_raise(value, player) {
            return Err(self.reject(Some(player), "raise", err));
        }

        if let Some(countered) = self.bet.pending {
            self.bet.confirmed_bettor = Some(countered.raiser);
        }
        self.bet.confirmed_value = fallback_for(value);
        self.bet.pending = Some(PendingRaise {
            value,
            raiser: player,
        });

        self.log
            .push(format!("{player} calls {} ({value})", raise_name(value)));
        self.revision += 1;

        Ok(())
    }

    /// Accepts the opponent's raise, making it the round's stake.
    ///
    /// Returns the new stake.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, nothing is pending, or
    /// the raise is the player's own.
    pub fn accept(&mut self, player: Player) -> Result<u8, BetError> {
        let raise = match (self.is_started, self.bet.pending) {
            (false, _) => Err(BetError::RoundNotStarted),
            (true, None) => Err(BetError::NoPendingRaise),
            (true, Some(raise)) if raise.raiser == player => Err(BetError::OwnRaise),
            (true, Some(raise)) => Ok(raise),
        };
        let raise = match raise {
            Ok(raise) => raise,
            Err(err) => return Err(self.reject(Some(player), "accept", err)),
        };

        self.bet = BetState {
            confirmed_value: raise.value,
            confirmed_bettor: Some(raise.raiser),
            pending: None,
        };

        self.log.push(format!(
            "{player} accepts {}; the round is worth {}",
            raise_name(raise.value),
            raise.value
        ));
        self.revision += 1;

        Ok(raise.value)
    }

    /// Folds: the opponent wins the round at the confirmed stake.
    ///
    /// Any unanswered raise is dropped and the stake resets.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn fold(&mut self, player: Player, options: &GameOptions) -> Result<RoundResult, BetError> {
        if !self.is_started {
            return Err(self.reject(Some(player), "fold", BetError::RoundNotStarted));
        }

        let winner = player.opponent();
        self.log.push(format!("{player} folds"));
        self.seat_mut(winner).trick_score = options.tricks_to_win;
        self.bet.pending = None;
        self.revision += 1;

        let result = self.finish_round(winner, true, options);
        self.bet = BetState::default();

        Ok(result)
    }
}
