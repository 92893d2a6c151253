//! Game engine and table management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::{ActionError, BetError, PlayError, RoundError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{PlayOutcome, RoundResult};

mod actions;
mod bet;
mod round;
pub mod state;
mod trick;

pub use actions::{Action, ActionOutcome};
pub use bet::fallback_for;
pub use state::{
    BASE_STAKE, BetState, GameLog, PendingRaise, Phase, RAISE_LADDER, Seat, TableState, raise_name,
};

/// A Truco table that serializes every action against one shared state.
///
/// All operations take `&self` and hold the state lock for the whole
/// transition, so actions arriving from several connections are applied one
/// at a time. The transitions themselves live on [`TableState`].
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The table.
    pub state: Mutex<TableState>,
    /// Random number generator used for dealing.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates an empty table whose deals are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert!(!game.is_started());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(TableState::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Deals a new round.
    ///
    /// # Errors
    ///
    /// See [`TableState::start_round`].
    pub fn start_round(&self) -> Result<(), RoundError> {
        let mut rng = self.rng.lock();
        self.state.lock().start_round(&self.options, &mut *rng)
    }

    /// Plays a card from the player's hand.
    ///
    /// # Errors
    ///
    /// See [`TableState::play_card`].
    ///
    /// # Panics
    ///
    /// See [`TableState::play_card`].
    pub fn play_card(&self, card_id: u8, player: Player) -> Result<PlayOutcome, PlayError> {
        self.state.lock().play_card(card_id, player, &self.options)
    }

    /// Raises the stake.
    ///
    /// # Errors
    ///
    /// See [`TableState::raise`].
    pub fn raise(&self, value: u8, player: Player) -> Result<(), BetError> {
        self.state.lock().raise(value, player)
    }

    /// Accepts the pending raise.
    ///
    /// # Errors
    ///
    /// See [`TableState::accept`].
    pub fn accept(&self, player: Player) -> Result<u8, BetError> {
        self.state.lock().accept(player)
    }

    /// Folds the round.
    ///
    /// # Errors
    ///
    /// See [`TableState::fold`].
    pub fn fold(&self, player: Player) -> Result<RoundResult, BetError> {
        self.state.lock().fold(player, &self.options)
    }

    /// Clears the whole game.
    pub fn reset_game(&self) {
        self.state.lock().reset_game();
    }

    /// Applies one action, whatever transport it came from.
    ///
    /// # Errors
    ///
    /// See [`TableState::apply`].
    ///
    /// # Panics
    ///
    /// See [`TableState::play_card`].
    pub fn apply(&self, action: Action) -> Result<ActionOutcome, ActionError> {
        let mut rng = self.rng.lock();
        self.state.lock().apply(action, &self.options, &mut *rng)
    }

    /// Returns a copy of the whole table.
    pub fn snapshot(&self) -> TableState {
        self.state.lock().clone()
    }

    /// Returns whether a round is in progress.
    pub fn is_started(&self) -> bool {
        self.state.lock().is_started
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns a copy of the player's hand.
    pub fn hand(&self, player: Player) -> Hand {
        self.state.lock().seat(player).hand.clone()
    }

    /// Returns the card the player has down this trick.
    pub fn stack(&self, player: Player) -> Option<Card> {
        self.state.lock().seat(player).stack
    }

    /// Returns the player's tricks won this round.
    pub fn trick_score(&self, player: Player) -> u8 {
        self.state.lock().seat(player).trick_score
    }

    /// Returns the player's points this game.
    pub fn round_score(&self, player: Player) -> u8 {
        self.state.lock().seat(player).round_score
    }

    /// Returns the stake of the round.
    pub fn bet(&self) -> BetState {
        self.state.lock().bet
    }

    /// Returns the diva of the round.
    pub fn diva(&self) -> Option<Card> {
        self.state.lock().diva
    }

    /// Returns the manilhas of the round, weakest first.
    pub fn manilhas(&self) -> Vec<Card> {
        self.state.lock().manilhas.clone()
    }

    /// Returns the current trick number.
    pub fn trick_number(&self) -> u8 {
        self.state.lock().trick_number
    }

    /// Returns the log entries, oldest first.
    pub fn log(&self) -> Vec<String> {
        self.state.lock().log.entries().to_vec()
    }

    /// Returns the table's revision.
    pub fn revision(&self) -> u64 {
        self.state.lock().revision
    }
}
