use log::debug;

use crate::error::InsuranceError;
use crate::result::{InsuranceOutcome, RoundOutcome};

use super::{Game, GamePhase};

impl Game {
    /// Takes the insurance side bet.
    ///
    /// The stake is half of the original bet, rounded down. A dealer
    /// blackjack pays it back at 2:1; otherwise the stake is forfeited.
    /// Either way the round resolves immediately after the decision.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer or the bankroll cannot
    /// cover the stake.
    pub fn take_insurance(&mut self) -> Result<usize, InsuranceError> {
        if self.state.phase != GamePhase::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        let stake = self.state.bet / 2;
        if self.state.chips < stake {
            return Err(InsuranceError::InsufficientChips);
        }

        self.state.chips -= stake;
        self.state.insurance_bet = stake;
        self.state.has_insurance = true;

        self.resolve_insurance();

        Ok(stake)
    }

    /// Declines the insurance side bet.
    ///
    /// The round resolves immediately: it either ends on a revealed dealer
    /// blackjack or play continues with the hole card still hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer.
    pub fn decline_insurance(&mut self) -> Result<(), InsuranceError> {
        if self.state.phase != GamePhase::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        self.state.can_insurance = false;
        self.resolve_insurance();

        Ok(())
    }

    /// Resolves the side bet once the insurance decision is in.
    fn resolve_insurance(&mut self) {
        if self.state.dealer_hand.is_blackjack() {
            if self.state.has_insurance {
                let credit = self.state.insurance_bet * 3; // stake + 2:1 winnings
                self.state.chips += credit;
                self.state.insurance_outcome = Some(InsuranceOutcome::Won);
                debug!("insurance won, {credit} credited");
            }

            self.state.dealer_hand.reveal_all();
            let outcome = if self.state.player_hand.is_blackjack() {
                RoundOutcome::Push
            } else {
                RoundOutcome::DealerWin
            };
            self.state.phase = GamePhase::Settled(outcome);
        } else {
            // No refund; the stake is gone. Raise the one-shot notice.
            if self.state.has_insurance {
                self.state.insurance_outcome = Some(InsuranceOutcome::Lost);
                self.state.insurance_notice = true;
                debug!("insurance lost, {} forfeited", self.state.insurance_bet);
            }
            self.state.phase = GamePhase::Playing;
        }

        self.state.can_insurance = false;
        self.state.has_insurance = false;
        self.state.insurance_bet = 0;
    }

    /// Clears the insurance result and its one-shot lost notice once the
    /// embedder has shown them.
    pub fn acknowledge_insurance_result(&mut self) {
        self.state.insurance_notice = false;
        self.state.insurance_outcome = None;
    }
}
