//! Round outcome and settlement types.

/// Round-level outcome held while the round sits in the settled phase.
///
/// For split rounds this is the collapsed overlay status: both seats won,
/// both lost, or anything else shows as a push. Settlement money never
/// derives from it; see [`SeatResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Player wins the round.
    PlayerWin,
    /// Dealer wins the round.
    DealerWin,
    /// The round is a tie.
    Push,
    /// The player busted before the dealer acted.
    PlayerBust,
}

/// Result of one seat measured against the dealer's final hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatResult {
    /// The seat beat the dealer (or the dealer busted).
    Win,
    /// The dealer beat the seat.
    Lose,
    /// The seat tied the dealer.
    Push,
    /// The seat busted on its own.
    Bust,
}

/// Outcome of the insurance side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsuranceOutcome {
    /// The dealer had blackjack; the side bet paid 2:1.
    Won,
    /// No dealer blackjack; the stake was forfeited.
    Lost,
}

/// Money movement for one seat at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatSettlement {
    /// The seat's result against the dealer.
    pub result: SeatResult,
    /// The stake riding on the seat (after any double).
    pub stake: usize,
    /// The amount credited back for the seat, stake included on a win or
    /// push. A surrendered round credits 0 here; its refund was paid at
    /// surrender time.
    pub payout: usize,
}

/// Summary returned when a settled round is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSettlement {
    /// The round-level outcome that was settled.
    pub outcome: RoundOutcome,
    /// Whether the round ended by surrender.
    pub surrendered: bool,
    /// Total amount credited to the bankroll at settlement.
    pub winnings: usize,
    /// Settlement of the main seat.
    pub main: SeatSettlement,
    /// Settlement of the split seat, when the round was split.
    pub split: Option<SeatSettlement>,
    /// Bankroll after crediting.
    pub chips: usize,
    /// Rounds completed, this one included.
    pub rounds_played: u32,
}
