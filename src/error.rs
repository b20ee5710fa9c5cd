//! Error types for deck and card operations.

use thiserror::Error;

/// Errors that can occur during positional deck access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Position is outside the deck.
    #[error("position {position} out of range for a deck of {len} cards")]
    OutOfRange {
        /// The requested position.
        position: isize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur while parsing card symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank symbol not recognized.
    #[error("unknown rank symbol")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
}
