use soroban_sdk::{Address, Env, Vec};

use crate::store::{extend_persistent, DataKey};
use crate::swap::Swap;

/// Ids of the pending swaps `address` is creator or leg owner of.
pub fn swaps_for(env: &Env, address: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::SwapsFor(address.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add(env: &Env, address: &Address, id: u64) {
    let key = DataKey::SwapsFor(address.clone());
    let mut ids = swaps_for(env, address);
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    extend_persistent(env, &key);
}

/// Swap-removes one occurrence of `id`: the last entry takes its slot.
///
/// Returns false when `id` was not indexed for `address`.
pub fn remove(env: &Env, address: &Address, id: u64) -> bool {
    let key = DataKey::SwapsFor(address.clone());
    let mut ids = swaps_for(env, address);
    let Some(position) = ids.first_index_of(id) else {
        return false;
    };
    if let Some(last) = ids.pop_back() {
        if position < ids.len() {
            ids.set(position, last);
        }
    }
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &ids);
        extend_persistent(env, &key);
    }
    true
}

pub fn index_swap(env: &Env, swap: &Swap) {
    for address in swap.participants() {
        add(env, address, swap.id);
    }
}

pub fn unindex_swap(env: &Env, swap: &Swap) {
    for address in swap.participants() {
        remove(env, address, swap.id);
    }
}
