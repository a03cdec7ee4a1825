use alloc::vec;
use alloc::vec::Vec;

use crate::hand;
use crate::shoe::{RESHUFFLE_THRESHOLD, Shoe};

use super::{DEFAULT_CHIPS, MAX_BET, MIN_BET, Phase, RoundState};

impl RoundState {
    pub(super) fn place_bet(&self, amount: u32) -> Self {
        if self.phase != Phase::Betting
            || amount > self.chips
            || amount > MAX_BET - self.bet
        {
            return self.clone();
        }

        let mut next = self.clone();
        next.bet += amount;
        next.chips -= amount;
        next
    }

    pub(super) fn clear_bet(&self) -> Self {
        if self.phase != Phase::Betting {
            return self.clone();
        }

        let mut next = self.clone();
        next.chips += next.bet;
        next.bet = 0;
        next
    }

    pub(super) fn deal(&self) -> Self {
        if self.phase != Phase::Betting || self.bet < MIN_BET {
            return self.clone();
        }

        let mut next = self.clone();
        next.round += 1;

        // Strict casino order: player, dealer, player, dealer.
        let p1 = next.draw_card();
        let d1 = next.draw_card();
        let p2 = next.draw_card();
        let d2 = next.draw_card();

        next.player_hands = vec![vec![p1, p2]];
        next.dealer_hand = vec![d1, d2];
        next.bets = vec![next.bet];
        next.active_hand = 0;
        next.insurance_bet = 0;
        next.result = None;

        // An ace up-card offers insurance before anything else; a dealt
        // natural skips player decisions entirely.
        next.phase = if d1.is_ace() {
            Phase::Insurance
        } else if hand::is_blackjack(&next.player_hands[0]) {
            Phase::DealerTurn
        } else {
            Phase::Playing
        };

        next
    }

    pub(super) fn new_round(&self) -> Self {
        if self.phase != Phase::Settled {
            return self.clone();
        }

        let mut next = self.clone();

        if next.shoe.len() < RESHUFFLE_THRESHOLD {
            next.shoe = Shoe::build().shuffled(&mut next.rng);
        }

        next.phase = Phase::Betting;
        next.bet = 0;
        next.bets = vec![0];
        next.player_hands = vec![Vec::new()];
        next.dealer_hand = Vec::new();
        next.active_hand = 0;
        next.insurance_bet = 0;
        next.result = None;
        next
    }

    pub(super) fn reset_chips(&self) -> Self {
        let mut next = self.clone();
        next.chips = DEFAULT_CHIPS;
        next
    }
}
