//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

fn evaluate(ranks: impl Iterator<Item = Rank>) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for rank in ranks {
        if rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(rank.base_value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    (total, is_soft)
}

/// The display form of a hand total.
///
/// Mirrors what a table UI shows next to a hand: the blackjack callout, a
/// single committed total, or both totals of a soft hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandDisplay {
    /// A natural two-card 21.
    Blackjack,
    /// A single total.
    Total(u8),
    /// A soft hand showing both totals, hard value first.
    Either(u8, u8),
}

impl fmt::Display for HandDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blackjack => f.write_str("Blackjack"),
            Self::Total(total) => write!(f, "{total}"),
            Self::Either(low, high) => write!(f, "{low} or {high}"),
        }
    }
}

/// An ordered set of cards belonging to one seat or the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate(self.cards.iter().map(|c| c.rank)).0
    }

    /// Calculates the value of the face-up cards only.
    ///
    /// Before the dealer reveals, this is the up-card's value.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        evaluate(self.cards.iter().filter(|c| c.face_up).map(|c| c.rank)).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(self.cards.iter().map(|c| c.rank)).1
    }

    /// Returns whether the hand is a blackjack (exactly two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand may be split: exactly two cards of identical
    /// rank, or two cards that both count 10.
    #[must_use]
    pub fn can_split_pair(&self) -> bool {
        self.cards.len() == 2
            && (self.cards[0].rank == self.cards[1].rank
                || (self.cards[0].rank.is_ten_value() && self.cards[1].rank.is_ten_value()))
    }

    /// Returns the display form of the hand total.
    ///
    /// Blackjack takes priority; a soft hand whose high total still fits
    /// under 21 shows both values; everything else shows one total.
    #[must_use]
    pub fn display_value(&self) -> HandDisplay {
        if self.is_blackjack() {
            return HandDisplay::Blackjack;
        }

        let has_ace = self.cards.iter().any(|c| c.rank == Rank::Ace);
        if !has_ace {
            return HandDisplay::Total(self.total());
        }

        // Hard total with every ace counted as 1; the soft total promotes one.
        let low = self.cards.iter().fold(0u8, |acc, c| {
            let value = if c.rank == Rank::Ace {
                1
            } else {
                c.rank.base_value()
            };
            acc.saturating_add(value)
        });
        let high = low.saturating_add(10);

        if high > 21 {
            HandDisplay::Total(low)
        } else {
            HandDisplay::Either(low, high)
        }
    }

    /// Turns every card in the hand face-up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
