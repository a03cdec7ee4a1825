//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

/// A playing card.
///
/// The `value` field carries the base value fixed at creation (ace = 11,
/// face cards = 10). It is not authoritative for hand totals: the hand
/// evaluator recomputes ace-adjusted totals from ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Base value before ace adjustment.
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            value: base_value(rank),
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

/// Base card value before ace adjustment (ace = 11, face cards = 10).
#[must_use]
pub const fn base_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
