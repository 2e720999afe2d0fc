//! Card types and deck utilities.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, in deck-building order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Base blackjack value of the rank: 11 for an ace, 10 for face cards,
    /// the pip count otherwise. Ace demotion to 1 happens during hand
    /// evaluation, not here.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Whether the rank counts 10 (ten or any face card).
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether the card is visible. Only the dealer's hole card is ever
    /// dealt face-down.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Returns the same card turned face-down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    /// Base blackjack value of the card's rank.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        self.rank.base_value()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds an unshuffled 52-card deck, suit-major then rank-major, every card
/// face-up.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Returns a uniformly shuffled copy of `deck`. The input is left untouched.
#[must_use]
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
