use soroban_sdk::contracttype;

use crate::types::Error;

/// Basis points that make up exactly the required amount of a leg.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A leg may be funded up to 150% of its required amount.
pub const DEFAULT_OVERFUND_TOLERANCE_BPS: u32 = 15_000;

/// Who may cancel a pending swap
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CancelPolicy {
    /// Only the owners of leg 1 or leg 2
    LegOwners,
    /// Leg owners and the address that created the swap
    LegOwnersOrCreator,
}

/// Deployment-wide escrow policy, set by the constructor and updatable by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub overfund_tolerance_bps: u32,
    pub cancel_policy: CancelPolicy,
}

impl Default for EscrowConfig {
    fn default() -> Self {
        Self {
            overfund_tolerance_bps: DEFAULT_OVERFUND_TOLERANCE_BPS,
            cancel_policy: CancelPolicy::LegOwners,
        }
    }
}

impl EscrowConfig {
    /// The tolerance may never cap a leg below its own required amount
    pub fn validate(&self) -> Result<(), Error> {
        if self.overfund_tolerance_bps < BPS_DENOMINATOR {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    /// Largest `funded_amount` a leg requiring `required_amount` may reach.
    ///
    /// Rounds down, so a cap is never more generous than the configured ratio.
    /// Saturates at `i128::MAX`, which keeps the cap at or above the required amount.
    pub fn funding_cap(&self, required_amount: i128) -> i128 {
        required_amount
            .checked_mul(self.overfund_tolerance_bps as i128)
            .map_or(i128::MAX, |scaled| scaled / BPS_DENOMINATOR as i128)
    }
}
