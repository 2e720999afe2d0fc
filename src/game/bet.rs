use log::debug;

use crate::card::{Card, Rank, build_deck, shuffle_deck};
use crate::error::{BetError, DealError};
use crate::result::RoundOutcome;

use super::{Game, GamePhase, Seat};

/// Minimum stake required to start a round.
pub const MIN_BET: usize = 10;

/// Bankroll a fresh game starts with.
pub const STARTING_CHIPS: usize = 1000;

/// A chip denomination for building bets.
///
/// [`Game::place_bet`] takes a raw amount, so this is a vocabulary type for
/// table UIs rather than a restriction on what may be staked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Chip {
    /// 5-value chip. Defined for completeness; not part of
    /// [`Chip::STANDARD`].
    Five,
    /// 10-value chip.
    Ten,
    /// 20-value chip.
    Twenty,
    /// 50-value chip.
    Fifty,
    /// 100-value chip.
    Hundred,
    /// 500-value chip.
    FiveHundred,
    /// 1000-value chip.
    Thousand,
}

impl Chip {
    /// The denominations offered at the table.
    pub const STANDARD: [Self; 6] = [
        Self::Ten,
        Self::Twenty,
        Self::Fifty,
        Self::Hundred,
        Self::FiveHundred,
        Self::Thousand,
    ];

    /// Value of the chip.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
            Self::FiveHundred => 500,
            Self::Thousand => 1000,
        }
    }
}

impl Game {
    /// Moves `value` chips from the bankroll into the pending bet.
    ///
    /// Bets accumulate across calls until the round starts or
    /// [`Game::clear_bet`] returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, a round is underway, or the
    /// bankroll cannot cover it.
    pub fn place_bet(&mut self, value: usize) -> Result<(), BetError> {
        if value == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.state.phase != GamePhase::Waiting {
            return Err(BetError::InvalidState);
        }
        if self.state.chips < value {
            return Err(BetError::InsufficientChips);
        }

        self.state.chips -= value;
        self.state.bet += value;

        Ok(())
    }

    /// Returns the pending bet to the bankroll and reports the refund.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is underway.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if self.state.phase != GamePhase::Waiting {
            return Err(BetError::InvalidState);
        }

        let refund = self.state.bet;
        self.state.chips += refund;
        self.state.bet = 0;

        Ok(refund)
    }

    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// Two cards go to the player face-up, then the dealer's up card and
    /// face-down hole card. Moves to [`GamePhase::Insurance`] when the
    /// dealer shows an ace against a non-blackjack player hand; settles
    /// immediately when either side was dealt a blackjack; moves to
    /// [`GamePhase::Playing`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not between rounds, the bet is below
    /// [`MIN_BET`], or the deck cannot cover the opening deal.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.state.phase != GamePhase::Waiting {
            return Err(DealError::InvalidState);
        }
        if self.state.bet < MIN_BET {
            return Err(DealError::BetBelowMinimum);
        }

        let mut deck = shuffle_deck(&build_deck(), &mut self.rng);
        let (Some(first), Some(second), Some(up), Some(hole)) =
            (deck.pop(), deck.pop(), deck.pop(), deck.pop())
        else {
            return Err(DealError::NotEnoughCards);
        };

        // The deal consumes any staged rig, but only developer mode lets it
        // replace the drawn cards; the deck has already lost its top four
        // either way.
        let [first, second] = match self.state.player_rig.take() {
            Some(rig) if self.state.dev_mode => rig,
            _ => [first, second],
        };
        let [up, hole] = match self.state.dealer_rig.take() {
            Some(rig) if self.state.dev_mode => rig,
            _ => [up, hole],
        };

        // Clear everything left over from the previous round.
        self.state.player_hand.clear();
        self.state.dealer_hand.clear();
        self.state.split_hand = None;
        self.state.split_bet = 0;
        self.state.insurance_bet = 0;
        self.state.active_seat = Seat::Main;
        self.state.main_complete = false;
        self.state.split_complete = false;
        self.state.has_insurance = false;
        self.state.has_surrendered = false;
        self.state.main_result = None;
        self.state.split_result = None;
        self.state.settled_main_bet = None;
        self.state.settled_split_bet = None;
        self.state.insurance_outcome = None;
        self.state.insurance_notice = false;
        self.state.initial_bet = self.state.bet;

        // Player's two cards
        self.state
            .player_hand
            .add_card(Card::new(first.suit, first.rank));
        self.state
            .player_hand
            .add_card(Card::new(second.suit, second.rank));

        // Dealer's up card
        self.state.dealer_hand.add_card(Card::new(up.suit, up.rank));

        // Dealer's hole card
        self.state
            .dealer_hand
            .add_card(Card::new(hole.suit, hole.rank).face_down());

        self.state.deck = deck;

        let player_blackjack = self.state.player_hand.is_blackjack();
        let dealer_blackjack = self.state.dealer_hand.is_blackjack();
        self.state.can_insurance = up.rank == Rank::Ace && !player_blackjack;
        self.state.can_surrender =
            !player_blackjack && !dealer_blackjack && !self.state.can_insurance;

        if self.state.can_insurance {
            self.state.phase = GamePhase::Insurance;
        } else if player_blackjack || dealer_blackjack {
            let outcome = if player_blackjack && dealer_blackjack {
                RoundOutcome::Push
            } else if player_blackjack {
                RoundOutcome::PlayerWin
            } else {
                RoundOutcome::DealerWin
            };
            self.state.dealer_hand.reveal_all();
            self.state.phase = GamePhase::Settled(outcome);
            debug!("blackjack on the deal, settled as {outcome:?}");
        } else {
            self.state.phase = GamePhase::Playing;
        }

        Ok(())
    }
}
