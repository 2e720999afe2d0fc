use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::RoundOutcome;

use super::{Game, GamePhase, Seat};

impl Game {
    fn ensure_acting_seat(&self) -> Result<Seat, ActionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(ActionError::InvalidState);
        }

        let seat = self.state.acting_seat();
        if self.state.seat_complete(seat) {
            return Err(ActionError::HandComplete);
        }

        Ok(seat)
    }

    /// Hands the turn over once `seat` has finished: the other split seat if
    /// it still has to act, the dealer otherwise.
    fn advance_after_seat(&mut self, seat: Seat) {
        if self.state.is_split() && !self.state.seat_complete(seat.other()) {
            self.state.active_seat = seat.other();
            return;
        }

        self.run_dealer();
    }

    /// Player action: Hit (draw a card).
    ///
    /// The card lands face-up in the acting hand. When the hand busts the
    /// seat is finished: a split round hands the turn onward, a single-hand
    /// round ends immediately with the dealer's hole card still hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the acting hand has
    /// already finished, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let seat = self.ensure_acting_seat()?;

        // Draw a card
        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.state.can_surrender = false;

        let hand = self.state.acting_hand_mut();
        hand.add_card(card);
        let bust = hand.is_bust();

        if bust {
            self.state.set_seat_complete(seat);
            if self.state.is_split() {
                self.advance_after_seat(seat);
            } else {
                self.state.phase = GamePhase::Settled(RoundOutcome::PlayerBust);
            }
        }

        Ok(card)
    }

    /// Player action: Stand (finish the acting hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played or the acting hand has
    /// already finished.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let seat = self.ensure_acting_seat()?;

        self.state.can_surrender = false;
        self.state.set_seat_complete(seat);

        // Advance to the other seat or the dealer
        self.advance_after_seat(seat);

        Ok(())
    }

    /// Player action: Double down (double the stake, draw one card, then
    /// stand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the acting hand has
    /// already finished or holds more than two cards, the bankroll cannot
    /// match the stake, or the deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let seat = self.ensure_acting_seat()?;

        // Can only double on the seat's first two cards
        if self.state.acting_hand().len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let stake = self.state.seat_bet(seat);
        if self.state.chips < stake {
            return Err(ActionError::InsufficientChips);
        }

        // Draw a card
        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.state.can_surrender = false;

        // Double the seat's stake
        self.state.chips -= stake;
        match seat {
            Seat::Main => self.state.bet += stake,
            Seat::Split => self.state.split_bet += stake,
        }

        let hand = self.state.acting_hand_mut();
        hand.add_card(card);
        let bust = hand.is_bust();

        // The forced draw is an automatic stand
        self.state.set_seat_complete(seat);
        if bust && !self.state.is_split() {
            self.state.phase = GamePhase::Settled(RoundOutcome::PlayerBust);
        } else {
            self.advance_after_seat(seat);
        }

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves into the new split hand and a matching stake is
    /// taken from the bankroll. Neither seat draws a card automatically; the
    /// main seat acts first.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the hand has already
    /// been split, the hand is not a splittable pair, or the bankroll cannot
    /// match the stake.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_acting_seat()?;

        if self.state.is_split() {
            return Err(ActionError::AlreadySplit);
        }
        if !self.state.player_hand.can_split_pair() {
            return Err(ActionError::CannotSplit);
        }
        if self.state.chips < self.state.bet {
            return Err(ActionError::InsufficientChips);
        }

        // Move the second card into the new hand
        let Some(card) = self.state.player_hand.take_split_card() else {
            return Err(ActionError::CannotSplit);
        };

        self.state.chips -= self.state.bet;
        self.state.split_bet = self.state.bet;
        self.state.split_hand = Some(Hand::from_cards(alloc::vec![card]));
        self.state.main_complete = false;
        self.state.split_complete = false;
        self.state.active_seat = Seat::Main;
        self.state.can_surrender = false;

        Ok(())
    }

    /// Player action: Switch seats (move the turn to the other split hand).
    ///
    /// Returns the seat that now accepts actions.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played or the hand has not been
    /// split.
    pub fn switch_active_seat(&mut self) -> Result<Seat, ActionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(ActionError::InvalidState);
        }
        if !self.state.is_split() {
            return Err(ActionError::NotSplit);
        }

        self.state.active_seat = self.state.active_seat.other();

        Ok(self.state.active_seat)
    }

    /// Player action: Surrender (forfeit the round for half the bet).
    ///
    /// Only available on the initial two cards, before any other action.
    /// Returns the refunded amount; the rest of the stake is gone and
    /// settlement credits nothing further.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played or surrender is no
    /// longer available.
    pub fn surrender(&mut self) -> Result<usize, ActionError> {
        if self.state.phase != GamePhase::Playing {
            return Err(ActionError::InvalidState);
        }
        if !self.state.can_surrender {
            return Err(ActionError::CannotSurrender);
        }

        // Return half the bet
        let refund = self.state.bet / 2;
        self.state.chips += refund;
        self.state.can_surrender = false;
        self.state.has_surrendered = true;
        self.state.phase = GamePhase::Settled(RoundOutcome::PlayerWin);

        Ok(refund)
    }
}
