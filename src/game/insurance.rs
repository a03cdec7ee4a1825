use super::{Phase, RoundState};

impl RoundState {
    pub(super) fn take_insurance(&self) -> Self {
        if self.phase != Phase::Insurance {
            return self.clone();
        }

        let stake = self.bet / 2;
        if stake > self.chips {
            return self.clone();
        }

        let mut next = self.clone();
        next.insurance_bet = stake;
        next.chips -= stake;
        next.phase = Phase::Playing;
        next
    }

    pub(super) fn decline_insurance(&self) -> Self {
        if self.phase != Phase::Insurance {
            return self.clone();
        }

        let mut next = self.clone();
        next.insurance_bet = 0;
        next.phase = Phase::Playing;
        next
    }
}
