use log::debug;

use crate::error::SettleError;
use crate::hand::Hand;
use crate::result::{RoundOutcome, RoundSettlement, SeatResult, SeatSettlement};

use super::{Game, GamePhase, Seat};

/// Scores one player hand against the dealer's final hand.
fn seat_result(hand: &Hand, dealer: &Hand) -> SeatResult {
    if hand.is_bust() {
        return SeatResult::Bust;
    }
    if dealer.is_bust() || hand.total() > dealer.total() {
        return SeatResult::Win;
    }
    if hand.total() == dealer.total() {
        return SeatResult::Push;
    }
    SeatResult::Lose
}

/// Amount credited back for a settled seat, stake included. `blackjack`
/// qualifies a win for the 3:2 bonus, floored on odd stakes.
const fn seat_payout(result: SeatResult, stake: usize, blackjack: bool) -> usize {
    match result {
        SeatResult::Win => {
            if blackjack {
                stake * 5 / 2 // stake + 3:2 winnings
            } else {
                stake * 2
            }
        }
        SeatResult::Push => stake,
        SeatResult::Lose | SeatResult::Bust => 0,
    }
}

impl Game {
    /// Plays out the dealer hand and settles the round outcome.
    ///
    /// Reveals the hole card, then draws until the dealer total reaches 17
    /// (stands on every 17, soft included). An exhausted deck stops the
    /// draw loop rather than faulting the round.
    pub(super) fn run_dealer(&mut self) {
        self.state.phase = GamePhase::DealerTurn;
        self.state.dealer_hand.reveal_all();

        while self.state.dealer_hand.total() < 17 {
            let Some(card) = self.draw() else { break };
            self.state.dealer_hand.add_card(card);
        }

        let outcome = self.round_outcome();
        debug!(
            "dealer finished on {}, outcome {outcome:?}",
            self.state.dealer_hand.total()
        );
        self.state.phase = GamePhase::Settled(outcome);
    }

    /// Round-level outcome once the dealer has finished drawing.
    ///
    /// Split rounds collapse the two seat results into one overlay status;
    /// settlement money is computed per seat in [`Game::settle_round`], never
    /// from this value.
    fn round_outcome(&self) -> RoundOutcome {
        let dealer = &self.state.dealer_hand;

        let Some(split_hand) = self.state.split_hand.as_ref() else {
            if self.state.player_hand.is_bust() {
                return RoundOutcome::PlayerBust;
            }
            return match seat_result(&self.state.player_hand, dealer) {
                SeatResult::Win => RoundOutcome::PlayerWin,
                SeatResult::Push => RoundOutcome::Push,
                SeatResult::Lose | SeatResult::Bust => RoundOutcome::DealerWin,
            };
        };

        let main = seat_result(&self.state.player_hand, dealer);
        let split = seat_result(split_hand, dealer);

        match (main, split) {
            (SeatResult::Win, SeatResult::Win) => RoundOutcome::PlayerWin,
            (SeatResult::Lose | SeatResult::Bust, SeatResult::Lose | SeatResult::Bust) => {
                RoundOutcome::DealerWin
            }
            _ => RoundOutcome::Push,
        }
    }

    /// Acknowledges a settled round: credits winnings, clears the table, and
    /// returns to [`GamePhase::Waiting`].
    ///
    /// Split rounds settle each seat independently against the dealer hand;
    /// a seat standing on a two-card 21 collects the 3:2 bonus even though
    /// the hand was assembled after a split. The per-seat results and stakes
    /// also stay in state until the next deal so a result overlay can keep
    /// showing them.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not finished.
    pub fn settle_round(&mut self) -> Result<RoundSettlement, SettleError> {
        let GamePhase::Settled(outcome) = self.state.phase else {
            return Err(SettleError::InvalidState);
        };

        let main_stake = self.state.bet;
        let split_stake = self.state.split_bet;

        let (main, split) = if self.state.has_surrendered {
            // Half the bet came back at surrender; nothing more is owed.
            let main = SeatSettlement {
                result: SeatResult::Win,
                stake: main_stake,
                payout: 0,
            };
            (main, None)
        } else if let Some(split_hand) = self.state.split_hand.as_ref() {
            let dealer = &self.state.dealer_hand;
            let main_result = seat_result(&self.state.player_hand, dealer);
            let split_result = seat_result(split_hand, dealer);

            let main = SeatSettlement {
                result: main_result,
                stake: main_stake,
                payout: seat_payout(
                    main_result,
                    main_stake,
                    self.state.player_hand.is_blackjack(),
                ),
            };
            let split = SeatSettlement {
                result: split_result,
                stake: split_stake,
                payout: seat_payout(split_result, split_stake, split_hand.is_blackjack()),
            };

            // Keep the per-seat story around for overlays until the next deal
            self.state.main_result = Some(main_result);
            self.state.split_result = Some(split_result);
            self.state.settled_main_bet = Some(main_stake);
            self.state.settled_split_bet = Some(split_stake);

            (main, Some(split))
        } else {
            let result = match outcome {
                RoundOutcome::PlayerWin => SeatResult::Win,
                RoundOutcome::DealerWin => SeatResult::Lose,
                RoundOutcome::Push => SeatResult::Push,
                RoundOutcome::PlayerBust => SeatResult::Bust,
            };
            let main = SeatSettlement {
                result,
                stake: main_stake,
                payout: seat_payout(result, main_stake, self.state.player_hand.is_blackjack()),
            };
            (main, None)
        };

        let winnings = main.payout + split.map_or(0, |seat| seat.payout);

        // Credit the bankroll and clear the table
        self.state.chips += winnings;
        self.state.bet = 0;
        self.state.split_bet = 0;
        self.state.insurance_bet = 0;
        self.state.player_hand.clear();
        self.state.dealer_hand.clear();
        self.state.split_hand = None;
        self.state.deck.clear();
        self.state.active_seat = Seat::Main;
        self.state.main_complete = false;
        self.state.split_complete = false;
        self.state.phase = GamePhase::Waiting;
        self.state.rounds_played += 1;

        debug!(
            "round {} settled as {outcome:?}, {winnings} credited",
            self.state.rounds_played
        );

        Ok(RoundSettlement {
            outcome,
            surrendered: self.state.has_surrendered,
            winnings,
            main,
            split,
            chips: self.state.chips,
            rounds_played: self.state.rounds_played,
        })
    }
}
