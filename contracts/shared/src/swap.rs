use soroban_sdk::{contracttype, Address};

use crate::config::{CancelPolicy, EscrowConfig};
use crate::types::Error;

/// One side of a swap.
///
/// The owner funds this leg and receives the *other* leg's proceeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leg {
    pub owner: Address,
    pub asset: Address,         // Token contract the leg is denominated in
    pub required_amount: i128,  // Fixed at creation
    pub funded_amount: i128,    // Held in custody, never decreases while pending
}

impl Leg {
    pub fn new(owner: Address, asset: Address, required_amount: i128) -> Result<Self, Error> {
        if required_amount < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(Self {
            owner,
            asset,
            required_amount,
            funded_amount: 0,
        })
    }

    pub fn is_satisfied(&self) -> bool {
        self.funded_amount >= self.required_amount
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LegSide {
    First,
    Second,
}

/// A validated, not yet applied, deposit into one leg
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub side: LegSide,
    pub amount: i128,
    pub funded_after: i128,
}

/// Canonical record of a pending swap.
///
/// A record with both legs satisfied is never stored: it is executed and
/// deleted in the same invocation that satisfied the second leg.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swap {
    pub id: u64,
    pub creator: Address,
    pub leg1: Leg,
    pub leg2: Leg,
}

impl Swap {
    pub fn new(id: u64, creator: Address, leg1: Leg, leg2: Leg) -> Self {
        Self {
            id,
            creator,
            leg1,
            leg2,
        }
    }

    pub fn leg(&self, side: LegSide) -> &Leg {
        match side {
            LegSide::First => &self.leg1,
            LegSide::Second => &self.leg2,
        }
    }

    fn leg_mut(&mut self, side: LegSide) -> &mut Leg {
        match side {
            LegSide::First => &mut self.leg1,
            LegSide::Second => &mut self.leg2,
        }
    }

    /// Resolves the leg `funder` is allowed to fund with `asset`.
    ///
    /// When one address owns both legs, the leg denominated in `asset` wins;
    /// on a tie leg 1 is filled first.
    pub fn target_leg(&self, funder: &Address, asset: &Address) -> Result<LegSide, Error> {
        let owns_first = self.leg1.owner == *funder;
        let owns_second = self.leg2.owner == *funder;
        match (owns_first, owns_second) {
            (false, false) => Err(Error::Unauthorized),
            (true, false) => Ok(LegSide::First),
            (false, true) => Ok(LegSide::Second),
            (true, true) => {
                if self.leg2.asset == *asset
                    && (self.leg1.asset != *asset || self.leg1.is_satisfied())
                {
                    Ok(LegSide::Second)
                } else {
                    Ok(LegSide::First)
                }
            }
        }
    }

    /// Checks a funding request against this swap without mutating it.
    ///
    /// Preconditions are evaluated in a fixed order and the first failure wins:
    /// unauthorized funder, wrong asset, leg already satisfied, then the
    /// overfunding cap.
    pub fn plan_deposit(
        &self,
        funder: &Address,
        asset: &Address,
        amount: i128,
        config: &EscrowConfig,
    ) -> Result<Deposit, Error> {
        let side = self.target_leg(funder, asset)?;
        let leg = self.leg(side);
        if leg.asset != *asset {
            return Err(Error::AssetMismatch);
        }
        if leg.is_satisfied() {
            return Err(Error::AlreadyFullyFunded);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let funded_after = leg
            .funded_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if funded_after > config.funding_cap(leg.required_amount) {
            return Err(Error::DepositThresholdExceeded);
        }
        Ok(Deposit {
            side,
            amount,
            funded_after,
        })
    }

    pub fn apply_deposit(&mut self, deposit: &Deposit) {
        self.leg_mut(deposit.side).funded_amount = deposit.funded_after;
    }

    pub fn is_complete(&self) -> bool {
        self.leg1.is_satisfied() && self.leg2.is_satisfied()
    }

    pub fn authorize_cancel(&self, caller: &Address, policy: CancelPolicy) -> Result<(), Error> {
        if self.leg1.owner == *caller || self.leg2.owner == *caller {
            return Ok(());
        }
        match policy {
            CancelPolicy::LegOwnersOrCreator if self.creator == *caller => Ok(()),
            _ => Err(Error::Unauthorized),
        }
    }

    /// Every address indexed against this swap, one entry per role.
    pub fn participants(&self) -> [&Address; 3] {
        [&self.creator, &self.leg1.owner, &self.leg2.owner]
    }
}
