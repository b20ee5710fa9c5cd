//! Walks through the deck and vector APIs.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;

use deckvec::{Deck, Vector2D, spades_high};

fn main() {
    let deck = Deck::new();
    println!("Deck of {} cards", deck.len());

    let position = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<isize>().ok())
        .unwrap_or(-1);
    match deck.at(position) {
        Ok(card) => println!("Card at {position}: {card}"),
        Err(err) => println!("Lookup error: {err}"),
    }

    println!("First three:");
    for card in &deck[..3] {
        println!("  {card}");
    }

    println!("Aces:");
    for card in deck.as_slice()[12..].iter().step_by(13) {
        println!("  {card}");
    }

    let sorted = deck.sorted_by_key(spades_high);
    println!("Lowest to highest (spades high):");
    for card in sorted.iter().take(3).chain(sorted.iter().rev().take(1)) {
        println!("  {:>2} {card}", spades_high(card));
    }

    let v1 = Vector2D::new(2.0, 4.0);
    let v2 = Vector2D::new(2.0, 1.0);
    println!("{v1} + {v2} = {}", v1 + v2);

    let v = Vector2D::new(3.0, 4.0);
    println!("|{v}| = {}", v.magnitude());
    println!("{v} * 3 = {}", v * 3.0);
    println!(
        "{} is nonzero: {}",
        Vector2D::default(),
        Vector2D::default().is_nonzero()
    );
}
