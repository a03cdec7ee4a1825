//! A single-player casino blackjack state machine with optional `no_std` support.
//!
//! The crate provides [`RoundState`], an immutable round snapshot, and a
//! closed [`Action`] set dispatched through [`RoundState::apply`]. Standard
//! casino rules are fixed: a 6-deck shoe, dealer stands on all 17s,
//! blackjack pays 3:2, insurance pays 2:1 net, splitting and doubling
//! supported.
//!
//! # Example
//!
//! ```
//! use twentyone::{Action, Phase, RoundState};
//!
//! let state = RoundState::new(42)
//!     .apply(Action::PlaceBet { amount: 100 })
//!     .apply(Action::Deal);
//!
//! assert_eq!(state.player_hands[0].len(), 2);
//! assert_eq!(state.dealer_hand.len(), 2);
//! assert_ne!(state.phase, Phase::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod game;
pub mod hand;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use game::{Action, DEFAULT_CHIPS, MAX_BET, MIN_BET, Phase, RoundState, SettleTicket};
pub use result::Outcome;
pub use shoe::{Deal, FULL_SHOE, NUM_DECKS, RESHUFFLE_THRESHOLD, Shoe, ShoeError};
pub use table::{ChipStore, MemoryChipStore, SETTLE_DELAY, Table};
