//! Shoe construction, shuffling, and dealing.
//!
//! The shoe signals when it runs low but never reshuffles itself: [`Shoe::deal`]
//! reports `needs_reshuffle` and the caller decides whether to rebuild the shoe
//! immediately or defer to the round boundary.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::card::{Card, DECK_SIZE, Suit};

/// Number of decks in a full shoe.
pub const NUM_DECKS: usize = 6;

/// Number of cards in a freshly built shoe.
pub const FULL_SHOE: usize = NUM_DECKS * DECK_SIZE;

/// Remaining-card count below which a reshuffle is signaled (25% of a full shoe).
pub const RESHUFFLE_THRESHOLD: usize = FULL_SHOE / 4;

/// Errors that can occur when dealing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe has no cards left.
    ///
    /// In practice never reached: the reshuffle threshold fires long before
    /// exhaustion, so hitting this indicates a caller bug.
    #[error("the shoe is empty")]
    Empty,
}

/// The result of dealing one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The dealt card.
    pub card: Card,
    /// The shoe without the dealt card.
    pub remaining: Shoe,
    /// Whether the remaining cards fell below [`RESHUFFLE_THRESHOLD`].
    pub needs_reshuffle: bool,
}

/// A multi-deck shoe of cards.
///
/// Immutable: dealing and shuffling return new shoes and leave the receiver
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Cards in deal order, next card last.
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds a full unshuffled shoe in canonical order.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(FULL_SHOE);

        for _ in 0..NUM_DECKS {
            for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds a shoe that deals exactly the given cards, in order.
    ///
    /// Intended for deterministic setups in tests and demos.
    #[must_use]
    pub fn stacked(next: &[Card]) -> Self {
        let mut cards = next.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Returns a shuffled copy of this shoe. The receiver is unchanged.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn deal(&self) -> Result<Deal, ShoeError> {
        let mut cards = self.cards.clone();
        let card = cards.pop().ok_or(ShoeError::Empty)?;
        let needs_reshuffle = cards.len() < RESHUFFLE_THRESHOLD;

        Ok(Deal {
            card,
            remaining: Self { cards },
            needs_reshuffle,
        })
    }

    /// Returns the cards left in the shoe, next card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
