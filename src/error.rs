//! Error types for game operations.
//!
//! Rejected actions leave the table untouched apart from a notice in the
//! game log; the error value carries the same reason in structured form.

use thiserror::Error;

/// Errors that can occur while drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawError {
    /// More cards were requested than remain undrawn.
    #[error("cannot draw {requested} cards, only {remaining} remain")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of undrawn cards left.
        remaining: usize,
    },
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundError {
    /// The configured hand cannot hold enough tricks to decide a round.
    #[error("hand size is too small to win the required tricks")]
    HandTooSmall,
    /// Dealing ran out of cards.
    #[error("dealing failed: {0}")]
    Deal(#[from] DrawError),
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayError {
    /// No round is in progress.
    #[error("no round is in progress")]
    RoundNotStarted,
    /// A raise is waiting for an answer.
    #[error("a raise to {0} is waiting for an answer")]
    RaisePending(u8),
    /// The player already has a card on the table this trick.
    #[error("a card was already played this trick")]
    AlreadyPlayed,
    /// The card is not in the player's hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(u8),
}

/// Errors that can occur during raising, accepting or folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetError {
    /// No round is in progress.
    #[error("no round is in progress")]
    RoundNotStarted,
    /// The raise skips or repeats a rung of the ladder.
    #[error("the next raise must be {expected}, not {requested}")]
    NotNextRung {
        /// The only legal raise value.
        expected: u8,
        /// The value that was asked for.
        requested: u8,
    },
    /// The stake is already at the top of the ladder.
    #[error("the stake cannot be raised any further")]
    LadderExhausted,
    /// The player made the last raise and must wait for the opponent.
    #[error("the last raise is already theirs")]
    AlreadyHoldsBet,
    /// There is no raise to accept.
    #[error("there is no raise to accept")]
    NoPendingRaise,
    /// Players cannot accept their own raise.
    #[error("cannot accept their own raise")]
    OwnRaise,
}

/// Errors returned by [`Game::apply`](crate::Game::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Starting the round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// Playing a card failed.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// Raising, accepting or folding failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The wire identity does not name a seat.
    #[error("unknown player {0}")]
    UnknownPlayer(u8),
    /// The event name is not part of the action surface.
    #[error("unknown event")]
    UnknownEvent,
    /// The event is missing one of its arguments.
    #[error("missing event argument")]
    MissingArgument,
}
