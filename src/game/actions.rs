//! The action surface shared by every transport.

use rand::Rng;

use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{PlayOutcome, RoundResult};

use super::TableState;

/// Something a participant asks the table to do.
///
/// Variants mirror the events a relay rebroadcasts to the shared room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Deal a new round.
    StartRound,
    /// Clear the whole game.
    ResetGame,
    /// Play a card from hand.
    PlayCard {
        /// Base id of the card.
        card_id: u8,
        /// Who plays it.
        player: Player,
    },
    /// Raise the stake.
    Raise {
        /// The raised stake.
        value: u8,
        /// Who raises.
        player: Player,
    },
    /// Accept the pending raise.
    Accept {
        /// Who accepts.
        player: Player,
    },
    /// Fold the round.
    Fold {
        /// Who folds.
        player: Player,
    },
}

impl Action {
    /// Builds an action from a relay event name and its numeric arguments.
    ///
    /// Player arguments are wire identities (`1` or `2`).
    ///
    /// # Errors
    ///
    /// Returns an error if the event is unknown, an argument is missing, or a
    /// player identity does not name a seat.
    pub fn from_event(name: &str, args: &[u8]) -> Result<Self, ActionError> {
        let arg = |index: usize| args.get(index).copied().ok_or(ActionError::MissingArgument);

        match name {
            "new round" => Ok(Self::StartRound),
            "reset game" => Ok(Self::ResetGame),
            "play card" => Ok(Self::PlayCard {
                card_id: arg(0)?,
                player: Player::try_from(arg(1)?)?,
            }),
            "bet" => Ok(Self::Raise {
                value: arg(0)?,
                player: Player::try_from(arg(1)?)?,
            }),
            "accept" => Ok(Self::Accept {
                player: Player::try_from(arg(0)?)?,
            }),
            "fold" => Ok(Self::Fold {
                player: Player::try_from(arg(0)?)?,
            }),
            _ => Err(ActionError::UnknownEvent),
        }
    }

    /// Relay event name for this action.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::StartRound => "new round",
            Self::ResetGame => "reset game",
            Self::PlayCard { .. } => "play card",
            Self::Raise { .. } => "bet",
            Self::Accept { .. } => "accept",
            Self::Fold { .. } => "fold",
        }
    }
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// A round was dealt.
    RoundStarted,
    /// The game was cleared.
    GameReset,
    /// A card was played.
    Played(PlayOutcome),
    /// The stake was raised.
    Raised {
        /// The pending stake.
        value: u8,
    },
    /// A raise was accepted.
    Accepted {
        /// The confirmed stake.
        value: u8,
    },
    /// A player folded.
    Folded(RoundResult),
}

impl TableState {
    /// Applies one action to completion.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation.
    ///
    /// # Panics
    ///
    /// See [`TableState::play_card`].
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<ActionOutcome, ActionError> {
        match action {
            Action::StartRound => {
                self.start_round(options, rng)?;
                Ok(ActionOutcome::RoundStarted)
            }
            Action::ResetGame => {
                self.reset_game();
                Ok(ActionOutcome::GameReset)
            }
            Action::PlayCard { card_id, player } => Ok(ActionOutcome::Played(
                self.play_card(card_id, player, options)?,
            )),
            Action::Raise { value, player } => {
                self.raise(value, player)?;
                Ok(ActionOutcome::Raised { value })
            }
            Action::Accept { player } => Ok(ActionOutcome::Accepted {
                value: self.accept(player)?,
            }),
            Action::Fold { player } => Ok(ActionOutcome::Folded(self.fold(player, options)?)),
        }
    }
}
