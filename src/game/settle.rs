use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::dealer;
use crate::hand;
use crate::result::Outcome;

use super::{Phase, RoundState, SettleTicket};

impl RoundState {
    /// Returns a ticket when a deferred settlement is pending.
    ///
    /// The host is expected to redeem it with [`RoundState::settle`] after
    /// [`SETTLE_DELAY`](crate::table::SETTLE_DELAY), giving the presentation
    /// time to show the dealer's hole card and draws.
    #[must_use]
    pub fn settlement_due(&self) -> Option<SettleTicket> {
        (self.phase == Phase::DealerTurn).then_some(SettleTicket { round: self.round })
    }

    /// Redeems a settlement ticket.
    ///
    /// A stale ticket, one whose round has been superseded or already
    /// settled, leaves the state unchanged.
    #[must_use]
    pub fn settle(&self, ticket: SettleTicket) -> Self {
        if self.phase != Phase::DealerTurn || ticket.round != self.round {
            return self.clone();
        }

        let mut next = self.clone();
        next.run_settlement();
        next
    }

    /// Plays the dealer out, scores every player hand, and pays out.
    pub(super) fn run_settlement(&mut self) {
        let (dealer_hand, shoe) = dealer::play_out(&self.dealer_hand, &self.shoe);

        let results: Vec<Outcome> = self
            .player_hands
            .iter()
            .map(|cards| settle_hand(cards, &dealer_hand))
            .collect();

        let mut payout: u32 = results
            .iter()
            .zip(&self.bets)
            .map(|(outcome, &bet)| outcome.payout(bet))
            .sum();

        // Insurance pays 3:1 gross on a dealer natural, independent of the
        // hand outcomes. A forfeited stake was already deducted.
        if self.insurance_bet > 0 && hand::is_blackjack(&dealer_hand) {
            payout += self.insurance_bet * 3;
        }

        self.dealer_hand = dealer_hand;
        self.shoe = shoe;
        self.chips += payout;
        self.result = Some(results);
        self.phase = Phase::Settled;
    }
}

/// Scores one player hand against the final dealer hand.
///
/// Blackjacks are compared first: both natural is a push, a lone natural
/// beats any other 21. Only then do busts and totals matter.
fn settle_hand(player: &[Card], dealer_cards: &[Card]) -> Outcome {
    let player_blackjack = hand::is_blackjack(player);
    let dealer_blackjack = hand::is_blackjack(dealer_cards);

    if player_blackjack && dealer_blackjack {
        return Outcome::Push;
    }
    if player_blackjack {
        return Outcome::Blackjack;
    }
    if dealer_blackjack {
        return Outcome::Lose;
    }
    if hand::is_busted(player) {
        return Outcome::Lose;
    }
    if hand::is_busted(dealer_cards) {
        return Outcome::Win;
    }

    match hand::value(player).cmp(&hand::value(dealer_cards)) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Lose,
        Ordering::Equal => Outcome::Push,
    }
}
