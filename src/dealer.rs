//! Dealer play policy.
//!
//! The dealer draws until reaching 17 and stands on any 17, soft or hard:
//! [`crate::hand::value`] resolves aces before the comparison, so A+6 stands.
//! This table never hits soft 17.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand;
use crate::shoe::Shoe;

/// Returns whether the dealer must draw another card.
#[must_use]
pub fn should_hit(cards: &[Card]) -> bool {
    hand::value(cards) < 17
}

/// Plays the dealer's hand to completion.
///
/// Draws from the shoe while [`should_hit`] holds and returns the final hand
/// together with the remaining shoe. Drawing here does not trigger reshuffle
/// handling; ensuring enough cards is the caller's responsibility.
#[must_use]
pub fn play_out(cards: &[Card], shoe: &Shoe) -> (Vec<Card>, Shoe) {
    let mut hand = cards.to_vec();
    let mut shoe = shoe.clone();

    while should_hit(&hand) {
        // Defensive: stop at an empty shoe instead of looping forever.
        let Ok(deal) = shoe.deal() else { break };
        hand.push(deal.card);
        shoe = deal.remaining;
    }

    (hand, shoe)
}
