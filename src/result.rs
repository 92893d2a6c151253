//! Result types for tricks and rounds.

use crate::card::Card;
use crate::player::Player;

/// Result of a resolved trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrickResult {
    /// The trick number, starting at 1.
    pub trick_number: u8,
    /// Card played by player one.
    pub player_one_card: Card,
    /// Card played by player two.
    pub player_two_card: Card,
    /// The player whose card was stronger.
    pub winner: Player,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The player who won the round.
    pub winner: Player,
    /// Points added to the winner's score (the confirmed stake).
    pub points: u8,
    /// Whether the round ended because the loser folded.
    pub folded: bool,
    /// Round scores after the round, indexed by seat (one, two).
    ///
    /// Both are zero if the round ended the game.
    pub scores: [u8; 2],
    /// The player who won the game, if this round ended it.
    pub game_winner: Option<Player>,
}

/// Outcome of a successful card play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayOutcome {
    /// The card that left the hand.
    pub card: Card,
    /// The trick, if this play completed it.
    pub trick: Option<TrickResult>,
    /// The round, if this trick decided it.
    pub round: Option<RoundResult>,
}
