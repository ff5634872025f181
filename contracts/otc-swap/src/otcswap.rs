use shared::{
    events, index, release_from_custody, pull_into_custody, store, EscrowConfig, Error, Leg, Swap,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Vec};

#[contract]
pub struct OtcSwap;

#[contractimpl]
impl OtcSwap {
    /// Initialize the escrow with its admin and policy configuration
    pub fn __constructor(env: Env, admin: Address, config: EscrowConfig) {
        if let Err(err) = config.validate() {
            panic_with_error!(&env, err);
        }
        store::set_admin(&env, &admin);
        store::set_config(&env, &config);
        store::extend_instance(&env);
    }

    /// Registers a new swap between two legs and returns its id.
    ///
    /// The creator need not own either leg. The id is indexed once for
    /// each role: creator, leg 1 owner and leg 2 owner. At least one leg
    /// must require a positive amount.
    pub fn create_swap(
        env: Env,
        creator: Address,
        leg1_owner: Address,
        leg1_asset: Address,
        leg1_required: i128,
        leg2_owner: Address,
        leg2_asset: Address,
        leg2_required: i128,
    ) -> Result<u64, Error> {
        creator.require_auth();

        let leg1 = Leg::new(leg1_owner, leg1_asset, leg1_required)?;
        let leg2 = Leg::new(leg2_owner, leg2_asset, leg2_required)?;
        // A swap satisfied at creation could never be funded into execution
        if leg1.is_satisfied() && leg2.is_satisfied() {
            return Err(Error::InvalidAmount);
        }
        let id = store::next_swap_id(&env)?;
        let swap = Swap::new(id, creator, leg1, leg2);

        store::save_swap(&env, &swap);
        index::index_swap(&env, &swap);
        store::extend_instance(&env);

        events::swap_created(&env, &swap);
        log!(&env, "swap {} created by {}", id, swap.creator);
        Ok(id)
    }

    /// Deposits `amount` of `asset` into the funder's leg.
    ///
    /// The funder must have approved this contract for at least `amount`.
    /// Returns true when this deposit satisfied the second leg and the
    /// swap was executed; the record no longer exists in that case.
    pub fn fund_leg(
        env: Env,
        funder: Address,
        swap_id: u64,
        asset: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        funder.require_auth();

        let mut swap = store::load_swap(&env, swap_id)?;
        let config = store::get_config(&env);
        let deposit = swap.plan_deposit(&funder, &asset, amount, &config)?;

        pull_into_custody(&env, &asset, &funder, amount)?;
        swap.apply_deposit(&deposit);
        log!(&env, "swap {} funded with {} by {}", swap_id, amount, funder);

        let executed = swap.is_complete();
        if executed {
            execute(&env, &swap)?;
        } else {
            store::save_swap(&env, &swap);
        }
        store::extend_instance(&env);

        events::funding_status(&env, &swap, executed);
        Ok(executed)
    }

    /// Refunds whatever each leg holds in custody and deletes the swap.
    pub fn cancel_swap(env: Env, caller: Address, swap_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let swap = store::load_swap(&env, swap_id)?;
        swap.authorize_cancel(&caller, store::get_config(&env).cancel_policy)?;

        release_from_custody(&env, &swap.leg1.asset, &swap.leg1.owner, swap.leg1.funded_amount)?;
        release_from_custody(&env, &swap.leg2.asset, &swap.leg2.owner, swap.leg2.funded_amount)?;
        delete(&env, &swap);
        store::extend_instance(&env);

        events::swap_refunded(&env, &swap);
        log!(&env, "swap {} cancelled by {}", swap_id, caller);
        Ok(())
    }

    /// Snapshot of a pending swap
    pub fn get_swap_info(env: Env, swap_id: u64) -> Result<Swap, Error> {
        store::load_swap(&env, swap_id)
    }

    /// Ids of the pending swaps `address` created or owns a leg of
    pub fn get_swaps_for(env: Env, address: Address) -> Vec<u64> {
        index::swaps_for(&env, &address)
    }

    pub fn get_admin(env: Env) -> Address {
        store::get_admin(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn get_config(env: Env) -> EscrowConfig {
        store::get_config(&env)
    }

    /// Replaces the escrow policy. Pending swaps are judged by the new
    /// policy from the next call on.
    pub fn set_config(env: Env, config: EscrowConfig) -> Result<(), Error> {
        let admin = store::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        config.validate()?;

        store::set_config(&env, &config);
        store::extend_instance(&env);
        log!(&env, "config updated: tolerance {} bps", config.overfund_tolerance_bps);
        Ok(())
    }
}

// Each owner receives the counterparty's whole deposit, overfunding included
fn execute(env: &Env, swap: &Swap) -> Result<(), Error> {
    release_from_custody(env, &swap.leg1.asset, &swap.leg2.owner, swap.leg1.funded_amount)?;
    release_from_custody(env, &swap.leg2.asset, &swap.leg1.owner, swap.leg2.funded_amount)?;
    delete(env, swap);
    log!(env, "swap {} executed", swap.id);
    Ok(())
}

fn delete(env: &Env, swap: &Swap) {
    store::remove_swap(env, swap.id);
    index::unindex_swap(env, swap);
}
