//! Round state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{InsuranceOutcome, RoundOutcome, SeatResult};

use super::bet::STARTING_CHIPS;

/// Phase of the round state machine. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Between rounds; only bet placement is accepted.
    Waiting,
    /// The dealer shows an ace; waiting on the insurance decision.
    Insurance,
    /// Waiting for player actions.
    Playing,
    /// Dealer plays out their hand. Resolved synchronously, so a snapshot
    /// never observes it from outside.
    DealerTurn,
    /// Round has ended; holds the outcome until settlement is acknowledged.
    Settled(RoundOutcome),
}

impl GamePhase {
    /// Returns the settled outcome, if the round has one.
    #[must_use]
    pub const fn outcome(self) -> Option<RoundOutcome> {
        match self {
            Self::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// One of the (up to two) hands the player controls in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    /// The original hand.
    Main,
    /// The hand created by a split.
    Split,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Main => Self::Split,
            Self::Split => Self::Main,
        }
    }
}

/// The authoritative state of the table: hands, deck, stakes, bankroll, and
/// the current phase. One instance lives inside [`Game`](super::Game);
/// callers read it through [`Game::state`](super::Game::state).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    /// The player's main hand.
    pub player_hand: Hand,
    /// The player's split hand, when the round has been split.
    pub split_hand: Option<Hand>,
    /// The dealer's hand. The hole card stays face-down until the dealer
    /// acts or a dealt blackjack ends the round.
    pub dealer_hand: Hand,
    /// Cards remaining this round, next card last.
    pub deck: Vec<Card>,
    /// Stake on the main hand.
    pub bet: usize,
    /// Stake on the split hand.
    pub split_bet: usize,
    /// Stake on the insurance side bet.
    pub insurance_bet: usize,
    /// The main stake at the moment the round dealt, before any double.
    /// Embedders persist this as the "last bet".
    pub initial_bet: usize,
    /// The player's bankroll. Persists across rounds.
    pub chips: usize,
    /// Current phase of the round.
    pub phase: GamePhase,
    /// The seat accepting actions. Meaningful only while split.
    pub active_seat: Seat,
    /// Whether the main seat has finished acting.
    pub main_complete: bool,
    /// Whether the split seat has finished acting.
    pub split_complete: bool,
    /// Whether insurance is on offer this round.
    pub can_insurance: bool,
    /// Whether the player took insurance this round.
    pub has_insurance: bool,
    /// Whether surrender is still available.
    pub can_surrender: bool,
    /// Whether the round ended by surrender.
    pub has_surrendered: bool,
    /// Main seat result, recorded at settlement of a split round.
    pub main_result: Option<SeatResult>,
    /// Split seat result, recorded at settlement of a split round.
    pub split_result: Option<SeatResult>,
    /// Main stake as settled, kept for overlays after a split round.
    pub settled_main_bet: Option<usize>,
    /// Split stake as settled, kept for overlays after a split round.
    pub settled_split_bet: Option<usize>,
    /// Result of the insurance side bet, once resolved.
    pub insurance_outcome: Option<InsuranceOutcome>,
    /// One-shot notice that an insurance stake was just lost. Cleared by
    /// [`Game::acknowledge_insurance_result`](super::Game::acknowledge_insurance_result).
    pub insurance_notice: bool,
    /// Rounds completed since the game was created.
    pub rounds_played: u32,
    /// Whether developer mode is on. Rigs only apply while it is.
    pub dev_mode: bool,
    /// Staged opening cards for the player, consumed by the next deal.
    pub player_rig: Option<[Card; 2]>,
    /// Staged opening cards for the dealer, up-card first, consumed by the
    /// next deal.
    pub dealer_rig: Option<[Card; 2]>,
}

impl RoundState {
    /// Creates the rest state of a fresh game: an empty table and the
    /// starting bankroll.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_hand: Hand::new(),
            split_hand: None,
            dealer_hand: Hand::new(),
            deck: Vec::new(),
            bet: 0,
            split_bet: 0,
            insurance_bet: 0,
            initial_bet: 0,
            chips: STARTING_CHIPS,
            phase: GamePhase::Waiting,
            active_seat: Seat::Main,
            main_complete: false,
            split_complete: false,
            can_insurance: false,
            has_insurance: false,
            can_surrender: false,
            has_surrendered: false,
            main_result: None,
            split_result: None,
            settled_main_bet: None,
            settled_split_bet: None,
            insurance_outcome: None,
            insurance_notice: false,
            rounds_played: 0,
            dev_mode: false,
            player_rig: None,
            dealer_rig: None,
        }
    }

    /// Returns whether the player has split this round.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split_hand.is_some()
    }

    /// Returns the number of player hands in play (1, or 2 after a split).
    #[must_use]
    pub const fn hand_count(&self) -> usize {
        if self.split_hand.is_some() { 2 } else { 1 }
    }

    /// Returns the seat whose hand currently accepts actions.
    #[must_use]
    pub const fn acting_seat(&self) -> Seat {
        if self.is_split() {
            self.active_seat
        } else {
            Seat::Main
        }
    }

    /// Returns the hand belonging to the acting seat.
    #[must_use]
    pub fn acting_hand(&self) -> &Hand {
        match (self.acting_seat(), self.split_hand.as_ref()) {
            (Seat::Split, Some(hand)) => hand,
            _ => &self.player_hand,
        }
    }

    /// Returns whether the given seat has finished acting.
    #[must_use]
    pub const fn seat_complete(&self, seat: Seat) -> bool {
        match seat {
            Seat::Main => self.main_complete,
            Seat::Split => self.split_complete,
        }
    }

    pub(crate) fn acting_hand_mut(&mut self) -> &mut Hand {
        match (self.acting_seat(), self.split_hand.as_mut()) {
            (Seat::Split, Some(hand)) => hand,
            _ => &mut self.player_hand,
        }
    }

    pub(crate) const fn set_seat_complete(&mut self, seat: Seat) {
        match seat {
            Seat::Main => self.main_complete = true,
            Seat::Split => self.split_complete = true,
        }
    }

    /// Returns the stake riding on the given seat.
    #[must_use]
    pub const fn seat_bet(&self, seat: Seat) -> usize {
        match seat {
            Seat::Main => self.bet,
            Seat::Split => self.split_bet,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
