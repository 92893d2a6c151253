//! Table state types.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::player::Player;

/// Stake of a round nobody has raised.
pub const BASE_STAKE: u8 = 1;

/// Legal raise values, in order: Truco, Seis, Nove, Doze.
pub const RAISE_LADDER: [u8; 4] = [3, 6, 9, 12];

/// Name called out for a raise value.
#[must_use]
pub const fn raise_name(value: u8) -> &'static str {
    match value {
        3 => "Truco",
        6 => "Seis",
        9 => "Nove",
        12 => "Doze",
        _ => "raise",
    }
}

/// A raise waiting for the opponent's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRaise {
    /// The raised stake.
    pub value: u8,
    /// Who raised.
    pub raiser: Player,
}

/// Stake of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetState {
    /// Points the round winner scores.
    pub confirmed_value: u8,
    /// Who made the raise that set `confirmed_value`.
    pub confirmed_bettor: Option<Player>,
    /// Raise awaiting accept or fold.
    pub pending: Option<PendingRaise>,
}

impl BetState {
    /// The highest stake on the table, pending or confirmed.
    #[must_use]
    pub fn current_value(&self) -> u8 {
        self.pending
            .map_or(self.confirmed_value, |raise| raise.value)
    }

    /// The player who may not raise next.
    #[must_use]
    pub fn holder(&self) -> Option<Player> {
        self.pending
            .map_or(self.confirmed_bettor, |raise| Some(raise.raiser))
    }

    /// The only legal next raise, if the ladder is not exhausted.
    #[must_use]
    pub fn next_rung(&self) -> Option<u8> {
        let current = self.current_value();
        RAISE_LADDER.into_iter().find(|&value| value > current)
    }
}

impl Default for BetState {
    fn default() -> Self {
        Self {
            confirmed_value: BASE_STAKE,
            confirmed_bettor: None,
            pending: None,
        }
    }
}

/// Per-player record at the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Cards held.
    pub hand: Hand,
    /// Card played this trick, pending resolution.
    pub stack: Option<Card>,
    /// Tricks won this round.
    pub trick_score: u8,
    /// Points accumulated this game.
    pub round_score: u8,
}

/// Ordered, human-readable record of what happened this round.
///
/// Every entry is mirrored to `tracing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameLog {
    entries: Vec<String>,
}

impl GameLog {
    /// Appends an event.
    pub fn push(&mut self, entry: String) {
        tracing::info!(target: "truco::log", "{entry}");
        self.entries.push(entry);
    }

    /// Appends a rejection notice.
    pub fn reject(&mut self, entry: String) {
        tracing::warn!(target: "truco::log", "{entry}");
        self.entries.push(entry);
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the newest entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for GameLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Where the table stands, derived from [`TableState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No round in progress.
    Idle,
    /// Neither player has played to the current trick.
    AwaitingPlays,
    /// One card is down; waiting for the other player.
    AwaitingOtherSide {
        /// The player who has not played yet.
        waiting_on: Player,
    },
    /// A raise must be accepted, countered or folded before play resumes.
    AwaitingResponse {
        /// The player who must answer.
        responder: Player,
    },
}

/// The whole table: the single source of truth mutated by every action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    /// The deck for the current round.
    pub deck: Deck,
    /// Player records, indexed by seat.
    pub seats: [Seat; 2],
    /// The diva drawn for this round.
    pub diva: Option<Card>,
    /// The four manilhas under the diva, weakest first.
    pub manilhas: Vec<Card>,
    /// Stake of the round.
    pub bet: BetState,
    /// Current trick, starting at 1.
    pub trick_number: u8,
    /// Events of the current round.
    pub log: GameLog,
    /// Whether a round is in progress.
    pub is_started: bool,
    /// Bumped on every change to the table, never reset.
    pub revision: u64,
}

impl TableState {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            seats: [Seat::default(), Seat::default()],
            diva: None,
            manilhas: Vec::new(),
            bet: BetState::default(),
            trick_number: 1,
            log: GameLog::default(),
            is_started: false,
            revision: 0,
        }
    }

    /// Returns the player's record.
    #[must_use]
    pub const fn seat(&self, player: Player) -> &Seat {
        &self.seats[player.index()]
    }

    /// Returns the player's record mutably.
    pub const fn seat_mut(&mut self, player: Player) -> &mut Seat {
        &mut self.seats[player.index()]
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if !self.is_started {
            return Phase::Idle;
        }

        if let Some(raise) = self.bet.pending {
            return Phase::AwaitingResponse {
                responder: raise.raiser.opponent(),
            };
        }

        match (self.seat(Player::One).stack, self.seat(Player::Two).stack) {
            (Some(_), None) => Phase::AwaitingOtherSide {
                waiting_on: Player::Two,
            },
            (None, Some(_)) => Phase::AwaitingOtherSide {
                waiting_on: Player::One,
            },
            _ => Phase::AwaitingPlays,
        }
    }

    /// Round scores indexed by seat.
    #[must_use]
    pub const fn round_scores(&self) -> [u8; 2] {
        [self.seats[0].round_score, self.seats[1].round_score]
    }

    /// Records a rejected action and hands the error back.
    pub(super) fn reject<E: fmt::Display>(
        &mut self,
        player: Option<Player>,
        action: &str,
        err: E,
    ) -> E {
        let notice = player.map_or_else(
            || alloc::format!("Cannot {action}: {err}"),
            |player| alloc::format!("{player} cannot {action}: {err}"),
        );
        self.log.reject(notice);
        self.revision += 1;
        err
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}
