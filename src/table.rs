//! Host-facing driver wiring the reducer to its two collaborator ports:
//! chip persistence and the deferred-settlement timer.
//!
//! The core itself performs no I/O. [`Table`] reads one value from a
//! [`ChipStore`] at startup, write-notifies it after every chip change, and
//! surfaces the dealer-turn settlement as a cancelable ticket the host fires
//! after [`SETTLE_DELAY`].

use core::time::Duration;

use crate::game::{Action, DEFAULT_CHIPS, RoundState, SettleTicket};

/// Delay between entering the dealer turn and the automatic settlement.
///
/// Exists purely so a presentation can show the dealer's hole card and draws
/// before the results render.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Persistence port for the chip balance.
///
/// The format is a single positive integer, or nothing. Saving is
/// fire-and-forget: it is never a precondition for a transition, so
/// implementations swallow their own failures.
pub trait ChipStore {
    /// Returns the previously saved chip count, if any.
    fn load(&self) -> Option<u32>;

    /// Saves the chip count.
    fn save(&mut self, chips: u32);
}

/// In-memory chip store for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryChipStore {
    saved: Option<u32>,
}

impl MemoryChipStore {
    /// Creates a store with a previously saved balance.
    #[must_use]
    pub const fn with_saved(chips: u32) -> Self {
        Self { saved: Some(chips) }
    }
}

impl ChipStore for MemoryChipStore {
    fn load(&self) -> Option<u32> {
        self.saved
    }

    fn save(&mut self, chips: u32) {
        self.saved = Some(chips);
    }
}

/// Drives a [`RoundState`] against a chip store.
#[derive(Debug)]
pub struct Table<S: ChipStore> {
    state: RoundState,
    store: S,
}

impl<S: ChipStore> Table<S> {
    /// Creates a table, restoring the bankroll from the store.
    ///
    /// A missing or non-positive saved value falls back to
    /// [`DEFAULT_CHIPS`]; it is never surfaced as an error.
    pub fn new(store: S, seed: u64) -> Self {
        let chips = store.load().filter(|&c| c > 0).unwrap_or(DEFAULT_CHIPS);
        Self {
            state: RoundState::with_chips(seed, chips),
            store,
        }
    }

    /// Resumes a table from an existing snapshot.
    pub const fn from_state(store: S, state: RoundState) -> Self {
        Self { state, store }
    }

    /// Returns the current snapshot.
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Returns the chip store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Dispatches an action, persisting the bankroll when it changed.
    pub fn dispatch(&mut self, action: Action) -> &RoundState {
        let next = self.state.apply(action);
        if next.chips != self.state.chips {
            self.store.save(next.chips);
        }
        self.state = next;
        &self.state
    }

    /// Returns the pending settlement ticket, if any.
    ///
    /// The host schedules a one-shot callback for [`SETTLE_DELAY`] and then
    /// calls [`Table::fire_settlement`] with the ticket.
    pub fn settlement_due(&self) -> Option<SettleTicket> {
        self.state.settlement_due()
    }

    /// Fires a scheduled settlement. Stale tickets are discarded.
    pub fn fire_settlement(&mut self, ticket: SettleTicket) -> &RoundState {
        let next = self.state.settle(ticket);
        if next.chips != self.state.chips {
            self.store.save(next.chips);
        }
        self.state = next;
        &self.state
    }
}
