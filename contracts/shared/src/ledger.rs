use soroban_sdk::{token, Address, Env};

use crate::types::Error;

/// Pulls `amount` of `asset` from `owner` into this contract's custody.
///
/// Spends the allowance `owner` granted to the contract. Any rejection by
/// the token contract surfaces as `LedgerTransferFailed`.
pub fn pull_into_custody(env: &Env, asset: &Address, owner: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    let custodian = env.current_contract_address();
    let token_client = token::Client::new(env, asset);
    match token_client.try_transfer_from(&custodian, owner, &custodian, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::LedgerTransferFailed),
    }
}

/// Pays `amount` of `asset` out of custody to `to`.
pub fn release_from_custody(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, asset);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::LedgerTransferFailed),
    }
}
