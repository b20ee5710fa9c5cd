//! A French playing-card deck and a 2D vector, with optional `no_std` support.
//!
//! [`Deck`] is a read-only sequence of 52 [`Card`]s that can be indexed,
//! sliced, iterated, and sorted with an external key such as
//! [`spades_high`]. [`Vector2D`] is a small value type with `+`, `*`,
//! magnitude, and a nonzero check.
//!
//! # Example
//!
//! ```
//! use deckvec::{Deck, Vector2D, spades_high};
//!
//! let deck = Deck::new();
//! assert_eq!(deck.len(), 52);
//! let _highest = deck.sorted_by_key(spades_high).last().copied();
//!
//! let v = Vector2D::new(2.0, 4.0) + Vector2D::new(2.0, 1.0);
//! assert_eq!(v.to_string(), "Vector(4, 5)");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod vector;

// Re-export main types
pub use card::{Card, RANKS, Rank, SUITS, Suit};
pub use deck::{DECK_SIZE, Deck, spades_high};
pub use error::{DeckError, ParseCardError};
pub use vector::Vector2D;
