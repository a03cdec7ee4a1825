//! Round phase and settlement-ticket types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting chips onto the staging bet.
    Betting,
    /// Dealer shows an ace; waiting for the insurance decision.
    Insurance,
    /// Waiting for player actions on the active hand.
    Playing,
    /// Player decisions are over; a deferred settlement is pending.
    DealerTurn,
    /// Results are in; waiting for `NEW_ROUND`.
    Settled,
}

/// Token for a pending deferred settlement.
///
/// Issued by [`RoundState::settlement_due`](crate::game::RoundState::settlement_due)
/// when a round enters the dealer turn, and redeemed with
/// [`RoundState::settle`](crate::game::RoundState::settle). The token is keyed
/// to the round that issued it, so a ticket that outlives its round is
/// discarded rather than applied to stale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    pub(crate) round: u64,
}
