//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
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
    /// Ace.
    Ace,
}

impl Rank {
    /// Returns the symbol printed on the card (`"2"` to `"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the zero-based position of this rank in [`RANKS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// Returns the lowercase suit name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUITS
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Ranks in deck order.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Suits in deck order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

/// A playing card.
///
/// Cards compare structurally but carry no ordering of their own; use a key
/// function such as [`spades_high`](crate::spades_high) to rank them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from its rank and suit symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use deckvec::{Card, Rank, Suit};
    ///
    /// let card = Card::from_symbols("Q", "hearts").unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if either symbol is not a known rank or suit.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, ParseCardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}
