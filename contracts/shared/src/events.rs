use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::swap::{Leg, Swap};

pub const SWAP_CREATED: Symbol = symbol_short!("Created");
pub const SWAP_FUNDING: Symbol = symbol_short!("Funding");
pub const SWAP_REFUNDED: Symbol = symbol_short!("Refunded");

/// Terms of one leg as announced at creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegTerms {
    pub owner: Address,
    pub counterparty: Address,  // Receives this leg's proceeds
    pub asset: Address,
    pub required_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapCreated {
    pub id: u64,
    pub creator: Address,
    pub leg1: LegTerms,
    pub leg2: LegTerms,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapFundingStatus {
    pub id: u64,
    pub leg1: Leg,
    pub leg2: Leg,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegRefund {
    pub owner: Address,
    pub asset: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRefunded {
    pub id: u64,
    pub creator: Address,
    pub leg1: LegRefund,
    pub leg2: LegRefund,
}

pub fn swap_created(env: &Env, swap: &Swap) {
    let event = SwapCreated {
        id: swap.id,
        creator: swap.creator.clone(),
        leg1: LegTerms {
            owner: swap.leg1.owner.clone(),
            counterparty: swap.leg2.owner.clone(),
            asset: swap.leg1.asset.clone(),
            required_amount: swap.leg1.required_amount,
        },
        leg2: LegTerms {
            owner: swap.leg2.owner.clone(),
            counterparty: swap.leg1.owner.clone(),
            asset: swap.leg2.asset.clone(),
            required_amount: swap.leg2.required_amount,
        },
    };
    env.events().publish((SWAP_CREATED, swap.id), event);
}

pub fn funding_status(env: &Env, swap: &Swap, executed: bool) {
    let event = SwapFundingStatus {
        id: swap.id,
        leg1: swap.leg1.clone(),
        leg2: swap.leg2.clone(),
        executed,
    };
    env.events().publish((SWAP_FUNDING, swap.id), event);
}

pub fn swap_refunded(env: &Env, swap: &Swap) {
    let refund = |leg: &Leg| LegRefund {
        owner: leg.owner.clone(),
        asset: leg.asset.clone(),
        amount: leg.funded_amount,
    };
    let event = SwapRefunded {
        id: swap.id,
        creator: swap.creator.clone(),
        leg1: refund(&swap.leg1),
        leg2: refund(&swap.leg2),
    };
    env.events().publish((SWAP_REFUNDED, swap.id), event);
}
