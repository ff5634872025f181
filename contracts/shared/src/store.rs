use soroban_sdk::{contracttype, Address, Env};

use crate::config::EscrowConfig;
use crate::swap::Swap;
use crate::types::Error;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    // Last issued swap id, 0 before the first swap
    SwapCounter,
    Swap(u64),
    // Address index: ids of every pending swap an address takes part in
    SwapsFor(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_config(env: &Env, config: &EscrowConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> EscrowConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

/// Allocates the next swap id. Ids start at 1 and are never reused.
pub fn next_swap_id(env: &Env) -> Result<u64, Error> {
    let id = last_swap_id(env)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::SwapCounter, &id);
    Ok(id)
}

pub fn last_swap_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SwapCounter)
        .unwrap_or(0)
}

pub fn load_swap(env: &Env, id: u64) -> Result<Swap, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Swap(id))
        .ok_or(Error::NotFound)
}

pub fn save_swap(env: &Env, swap: &Swap) {
    let key = DataKey::Swap(swap.id);
    env.storage().persistent().set(&key, swap);
    extend_persistent(env, &key);
}

pub fn remove_swap(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Swap(id));
}
