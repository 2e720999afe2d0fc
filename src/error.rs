//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Not enough chips to cover the bet.
    #[error("not enough chips to cover the bet")]
    InsufficientChips,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BetBelowMinimum,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The acting hand has already finished.
    #[error("the acting hand has already finished")]
    HandComplete,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand has already been split.
    #[error("the hand has already been split")]
    AlreadySplit,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// No split hand is in play.
    #[error("no split hand is in play")]
    NotSplit,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Not enough chips for this action.
    #[error("not enough chips for this action")]
    InsufficientChips,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Invalid game state for insurance.
    #[error("invalid game state for insurance")]
    InvalidState,
    /// Not enough chips for the insurance stake.
    #[error("not enough chips for the insurance stake")]
    InsufficientChips,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
}
