//! The French deck and its external sort key.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use core::slice::{self, SliceIndex};

use crate::card::{Card, RANKS, SUITS, Suit};
use crate::error::DeckError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

const fn suit_value(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Ranks a card with spades as the highest suit.
///
/// The key is `rank_index * 4 + suit_value`, where suits count clubs 0,
/// diamonds 1, hearts 2 and spades 3. Every card of a deck gets a distinct
/// key in `0..DECK_SIZE`.
///
/// # Example
///
/// ```
/// use deckvec::{Card, Deck, Rank, Suit, spades_high};
///
/// let deck = Deck::new();
/// let sorted = deck.sorted_by_key(spades_high);
/// assert_eq!(sorted[0], Card::new(Rank::Two, Suit::Clubs));
/// assert_eq!(sorted[51], Card::new(Rank::Ace, Suit::Spades));
/// ```
#[must_use]
pub const fn spades_high(card: &Card) -> usize {
    card.rank.index() * SUITS.len() + suit_value(card.suit)
}

/// A read-only deck of 52 cards.
///
/// Cards are laid out suit by suit (spades, diamonds, clubs, hearts), each
/// suit running from two to ace. The deck never changes after construction,
/// so iterating it twice yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new deck in storage order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `position`.
    ///
    /// Negative positions count back from the end, so `-1` is the last card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckvec::{Card, Deck, DeckError, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.at(0), Ok(Card::new(Rank::Two, Suit::Spades)));
    /// assert_eq!(deck.at(-1), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    /// assert_eq!(
    ///     deck.at(52),
    ///     Err(DeckError::OutOfRange { position: 52, len: 52 })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is outside `-len..len`.
    pub fn at(&self, position: isize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let index = if position < 0 {
            len.checked_sub(position.unsigned_abs())
        } else {
            Some(position as usize)
        };

        index
            .and_then(|index| self.cards.get(index))
            .copied()
            .ok_or(DeckError::OutOfRange { position, len })
    }

    /// Returns the card at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in storage order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards sorted by `key`, leaving the deck untouched.
    ///
    /// The sort is stable.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Vec<Card>
    where
        K: Ord,
        F: FnMut(&Card) -> K,
    {
        let mut cards = self.cards.clone();
        cards.sort_by_key(key);
        cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SliceIndex<[Card]>> Index<I> for Deck {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.cards[index]
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
