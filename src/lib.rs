//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting, the deal, player actions, the insurance side bet, dealer play,
//! and settlement. Rendering, input, and persistence stay with the embedder,
//! which drives the engine through its operations and reads the resulting
//! [`RoundState`] snapshot after each one.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GamePhase};
//!
//! let mut game = Game::new(42);
//! game.place_bet(100)?;
//! game.start_round()?;
//!
//! if game.phase() == GamePhase::Insurance {
//!     game.decline_insurance()?;
//! }
//! if game.phase() == GamePhase::Playing {
//!     game.stand()?;
//! }
//!
//! let settlement = game.settle_round()?;
//! assert_eq!(settlement.chips, game.chips());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, InsuranceError, SettleError};
pub use game::{Chip, Game, GamePhase, MIN_BET, RoundState, STARTING_CHIPS, Seat};
pub use hand::{Hand, HandDisplay};
pub use result::{InsuranceOutcome, RoundOutcome, RoundSettlement, SeatResult, SeatSettlement};
