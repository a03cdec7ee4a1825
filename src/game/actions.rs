use alloc::vec;

use crate::hand;

use super::{Phase, RoundState};

impl RoundState {
    pub(super) fn hit(&self) -> Self {
        if self.phase != Phase::Playing {
            return self.clone();
        }

        let mut next = self.clone();
        let card = next.draw_card();
        let idx = next.active_hand;
        next.player_hands[idx].push(card);

        if hand::is_busted(&next.player_hands[idx]) {
            next.advance_after_bust();
        }

        next
    }

    pub(super) fn stand(&self) -> Self {
        if self.phase != Phase::Playing {
            return self.clone();
        }

        let mut next = self.clone();
        next.advance_after_stand();
        next
    }

    pub(super) fn double_down(&self) -> Self {
        if self.phase != Phase::Playing {
            return self.clone();
        }

        let stake = self.bets[self.active_hand];
        if !hand::can_double_down(&self.player_hands[self.active_hand]) || stake > self.chips {
            return self.clone();
        }

        let mut next = self.clone();
        let idx = next.active_hand;
        next.bets[idx] = stake * 2;
        next.chips -= stake;

        // Exactly one card, then an automatic stand regardless of the total.
        let card = next.draw_card();
        next.player_hands[idx].push(card);
        next.advance_after_stand();
        next
    }

    pub(super) fn split(&self) -> Self {
        if self.phase != Phase::Playing || self.player_hands.len() > 1 {
            return self.clone();
        }

        let cards = &self.player_hands[self.active_hand];
        let stake = self.bets[self.active_hand];
        if !hand::can_split(cards) || stake > self.chips {
            return self.clone();
        }

        let (first, second) = (cards[0], cards[1]);

        let mut next = self.clone();
        let c1 = next.draw_card();
        let c2 = next.draw_card();
        let idx = next.active_hand;

        next.player_hands[idx] = vec![first, c1];
        next.player_hands.insert(idx + 1, vec![second, c2]);
        next.bets.insert(idx + 1, stake);
        next.chips -= stake;

        // Play continues on the first of the two new hands.
        next
    }

    /// Moves play to the next split hand, or hands over to the dealer turn
    /// for the deferred settlement.
    pub(super) fn advance_after_bust(&mut self) {
        if self.active_hand + 1 < self.player_hands.len() {
            self.active_hand += 1;
        } else {
            self.phase = Phase::DealerTurn;
        }
    }

    /// Moves play to the next split hand, or plays the dealer out and
    /// settles immediately.
    pub(super) fn advance_after_stand(&mut self) {
        if self.active_hand + 1 < self.player_hands.len() {
            self.active_hand += 1;
        } else {
            self.run_settlement();
        }
    }
}
