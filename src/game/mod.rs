//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;


pub use bet::{Chip, MIN_BET, STARTING_CHIPS};
pub use state::{GamePhase, RoundState, Seat};

/// A single-player blackjack engine that manages the bankroll and round flow.
///
/// The game owns the authoritative [`RoundState`] and a seeded random number
/// generator. Every operation validates its preconditions against the current
/// state and leaves the state untouched when it returns an error.
pub struct Game {
    /// Authoritative table state.
    state: RoundState,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given RNG seed and the starting bankroll
    /// of [`STARTING_CHIPS`].
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, STARTING_CHIPS};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.chips(), STARTING_CHIPS);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: RoundState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.state.chips
    }

    /// Returns the stake on the main hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.state.bet
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.deck.len()
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.state.deck.pop()
    }

    /// Toggles developer mode and returns the new setting.
    ///
    /// Any staged player rig is discarded on a toggle; a staged dealer rig
    /// survives it.
    pub const fn toggle_dev_mode(&mut self) -> bool {
        self.state.dev_mode = !self.state.dev_mode;
        self.state.player_rig = None;
        self.state.dev_mode
    }

    /// Stages the player's opening cards for the next deal.
    ///
    /// The deal consumes the rig whether or not it was applied; it only
    /// replaces the drawn cards while developer mode is on.
    pub const fn set_player_rig(&mut self, cards: [Card; 2]) {
        self.state.player_rig = Some(cards);
    }

    /// Discards any staged player rig.
    pub const fn clear_player_rig(&mut self) {
        self.state.player_rig = None;
    }

    /// Stages the dealer's opening cards for the next deal, up-card first.
    ///
    /// Consumed like a player rig: the next deal takes it, rigged or not.
    pub const fn set_dealer_rig(&mut self, cards: [Card; 2]) {
        self.state.dealer_rig = Some(cards);
    }

    /// Discards any staged dealer rig.
    pub const fn clear_dealer_rig(&mut self) {
        self.state.dealer_rig = None;
    }
}
