//! Hand evaluation: soft/hard ace scoring and eligibility checks.
//!
//! All functions here are total over well-formed card slices. They have no
//! side effects and no failure modes, and hands are scored independently of
//! card order.

use crate::card::{Card, base_value};

fn evaluate(cards: &[Card]) -> (u8, u8) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(base_value(card.rank));
    }

    // Demote aces from 11 to 1 while the total busts.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces)
}

/// Calculates the value of a hand.
///
/// Aces are counted as 11 if possible without busting, otherwise as 1.
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Returns whether the hand is soft (contains an ace still counted as 11).
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    let (value, aces) = evaluate(cards);
    aces > 0 && value <= 21
}

/// Returns whether the hand is a natural blackjack.
///
/// Only a two-card 21 qualifies; a 21 reached with three or more cards is
/// an ordinary 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && value(cards) == 21
}

/// Returns whether the hand has busted (over 21).
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    value(cards) > 21
}

/// Returns whether the hand can be split (two cards of identical rank).
#[must_use]
pub fn can_split(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

/// Returns whether the hand can double down (exactly two cards, any ranks).
#[must_use]
pub fn can_double_down(cards: &[Card]) -> bool {
    cards.len() == 2
}
