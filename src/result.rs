//! Per-hand outcomes and payout arithmetic.

/// Outcome of a single player hand against the dealer's final hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Natural blackjack, pays 3:2.
    Blackjack,
    /// Player wins (dealer busts or player has the higher total), pays 2:1.
    Win,
    /// Player loses; the stake is gone.
    Lose,
    /// Push (tie); the stake is returned.
    Push,
}

impl Outcome {
    /// Amount returned to the player for a hand with this outcome,
    /// including the original stake.
    ///
    /// Blackjack winnings are floored, matching a table that keeps
    /// fractional chips.
    #[must_use]
    pub const fn payout(self, bet: u32) -> u32 {
        match self {
            Self::Blackjack => bet + bet * 3 / 2,
            Self::Win => bet * 2,
            Self::Push => bet,
            Self::Lose => 0,
        }
    }
}
