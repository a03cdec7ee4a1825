//! The round state machine.
//!
//! [`RoundState`] is an immutable snapshot of one blackjack round. Every
//! [`Action`] goes through [`RoundState::apply`], which validates it against
//! the current phase and returns a new snapshot; invalid actions return the
//! state unchanged. Previous snapshots are never mutated.

use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::result::Outcome;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod insurance;
mod settle;
pub mod state;

pub use state::{Phase, SettleTicket};

/// Minimum staged bet required to deal a round.
pub const MIN_BET: u32 = 10;

/// Maximum staged bet.
pub const MAX_BET: u32 = 500;

/// Default starting bankroll.
pub const DEFAULT_CHIPS: u32 = 1000;

/// A player or host action dispatched into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Adds chips to the staging bet.
    PlaceBet {
        /// Chips to move from the bankroll onto the bet.
        amount: u32,
    },
    /// Returns the staged bet to the bankroll.
    ClearBet,
    /// Deals the initial four cards and starts the round.
    Deal,
    /// Draws one card into the active hand.
    Hit,
    /// Ends play on the active hand.
    Stand,
    /// Doubles the active hand's bet, draws one card, then stands.
    DoubleDown,
    /// Splits a pair into two hands with a matching stake.
    Split,
    /// Takes insurance for half the original bet.
    Insurance,
    /// Declines insurance.
    DeclineInsurance,
    /// Resets the table for the next round, carrying chips and shoe forward.
    NewRound,
    /// Restores the bankroll to [`DEFAULT_CHIPS`].
    ResetChips,
}

/// Immutable snapshot of one blackjack round.
///
/// Cheap to clone; the embedded RNG makes every transition a pure function
/// of the snapshot and the action, so a given seed replays identically.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Current phase.
    pub phase: Phase,
    /// Player's bankroll. Persists across rounds.
    pub chips: u32,
    /// Staging bet accumulated during the betting phase.
    pub bet: u32,
    /// Per-hand wagers, index-aligned with `player_hands`.
    pub bets: Vec<u32>,
    /// Player hands; two entries only after a split.
    pub player_hands: Vec<Vec<Card>>,
    /// Dealer's hand. The card at index 1 is the hole card.
    pub dealer_hand: Vec<Card>,
    /// Which player hand is being acted on.
    pub active_hand: usize,
    /// Insurance stake, 0 if not taken.
    pub insurance_bet: u32,
    /// Per-hand outcomes once settled, `None` while the round is live.
    pub result: Option<Vec<Outcome>>,
    shoe: Shoe,
    round: u64,
    rng: ChaCha8Rng,
}

impl RoundState {
    /// Creates a fresh table with the default bankroll and a freshly
    /// shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Action, RoundState};
    ///
    /// let state = RoundState::new(42);
    /// let state = state.apply(Action::PlaceBet { amount: 100 });
    /// assert_eq!(state.bet, 100);
    /// assert_eq!(state.chips, 900);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_chips(seed, DEFAULT_CHIPS)
    }

    /// Creates a fresh table with a restored bankroll.
    #[must_use]
    pub fn with_chips(seed: u64, chips: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::build().shuffled(&mut rng);

        Self {
            phase: Phase::Betting,
            chips,
            bet: 0,
            bets: vec![0],
            player_hands: vec![Vec::new()],
            dealer_hand: Vec::new(),
            active_hand: 0,
            insurance_bet: 0,
            result: None,
            shoe,
            round: 0,
            rng,
        }
    }

    /// Replaces the shoe, for deterministic setups with [`Shoe::stacked`].
    #[must_use]
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Applies an action and returns the next snapshot.
    ///
    /// Any action that is invalid for the current phase or would violate a
    /// resource constraint (insufficient chips, bet cap, ineligible
    /// split/double) leaves the state unchanged, mirroring a real table
    /// where an illegal move is simply disallowed.
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::PlaceBet { amount } => self.place_bet(amount),
            Action::ClearBet => self.clear_bet(),
            Action::Deal => self.deal(),
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down(),
            Action::Split => self.split(),
            Action::Insurance => self.take_insurance(),
            Action::DeclineInsurance => self.decline_insurance(),
            Action::NewRound => self.new_round(),
            Action::ResetChips => self.reset_chips(),
        }
    }

    /// Draws one card, replacing the shoe with a fresh shuffled one the
    /// moment the reshuffle threshold fires.
    ///
    /// The threshold fires well before exhaustion, so the shoe is never
    /// empty here.
    pub(crate) fn draw_card(&mut self) -> Card {
        let deal = self
            .shoe
            .deal()
            .expect("shoe exhausted below reshuffle threshold");

        if deal.needs_reshuffle {
            self.shoe = Shoe::build().shuffled(&mut self.rng);
        } else {
            self.shoe = deal.remaining;
        }

        deal.card
    }
}
