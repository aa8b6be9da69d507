#![no_std]
//! Tiered token sale.
//!
//! Sells a token for a native-currency contribution over seven timed rounds,
//! stacking a round bonus, a contribution-size bonus and a flat early-bird
//! bonus drawn from depleting pools. Investors that are not yet whitelisted
//! have their tokens and currency held back until they are authorized or
//! refunded.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod access;
mod bonus;
mod clock;
mod config;
mod events;
mod external;
mod ledger;
mod lifecycle;
mod registry;
mod sale;
mod types;

pub use crate::config::{
    BASE_RATE, MIN_BOUNTY, MIN_CONTRIBUTION, PAUSE_WINDOW, RESERVE_ALLOCATION, SALE_SUPPLY_CAP,
    UNIT, VERIFICATION_LIMIT,
};
pub use crate::events::TokenPurchase;
pub use crate::types::{
    EarlyBirdDraw, EarlyBirdPool, Error, PendingEntitlement, Quote, RoleSet, SalePhase,
    SaleSchedule,
};

use crate::access::AccessManager;
use crate::ledger::SaleLedger;
use crate::lifecycle::LifecycleManager;
use crate::registry::AuthorizationRegistry;
use crate::sale::SaleManager;
use crate::types::DataKey;

#[contract]
pub struct TieredSaleContract;

#[contractimpl]
impl TieredSaleContract {
    /// Initialize the sale.
    ///
    /// The token must already be owned by this contract so it can mint.
    pub fn initialize(
        env: Env,
        owner: Address,
        schedule: SaleSchedule,
        wallet: Address,
        admins: Vec<Address>,
        currency: Address,
        token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Roles) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        clock::validate(&schedule)?;

        let token_owner = external::SaleTokenClient::new(&env, &token).owner();
        if token_owner != env.current_contract_address() {
            return Err(Error::TokenNotOwned);
        }

        AccessManager::init(&env, owner.clone(), admins, wallet)?;
        env.storage().instance().set(&DataKey::Currency, &currency);
        env.storage().instance().set(&DataKey::Token, &token);
        SaleLedger::init(&env, &schedule);
        SaleLedger::bump(&env);

        log!(&env, "sale initialized", owner, schedule.start_time);
        Ok(())
    }

    /// Contribute `value` of currency and receive tokens for it.
    pub fn buy_tokens(env: Env, investor: Address, value: i128) -> Result<i128, Error> {
        investor.require_auth();
        SaleManager::process_contribution(&env, &investor, &investor, value)
    }

    /// Contribute `value` paid by `payer` with `investor` as beneficiary.
    pub fn buy_tokens_for(
        env: Env,
        payer: Address,
        investor: Address,
        value: i128,
    ) -> Result<i128, Error> {
        payer.require_auth();
        SaleManager::process_contribution(&env, &payer, &investor, value)
    }

    /// Whitelist investors, releasing anything held back for them.
    pub fn authorize(env: Env, caller: Address, investors: Vec<Address>) -> Result<(), Error> {
        caller.require_auth();
        AuthorizationRegistry::authorize(&env, &caller, investors)
    }

    pub fn set_admin_accounts(env: Env, caller: Address, admins: Vec<Address>) -> Result<(), Error> {
        caller.require_auth();
        AccessManager::set_admin_accounts(&env, &caller, admins)
    }

    pub fn set_main_wallet(env: Env, caller: Address, wallet: Address) -> Result<(), Error> {
        caller.require_auth();
        AccessManager::set_main_wallet(&env, &caller, wallet)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        AccessManager::transfer_ownership(&env, &caller, new_owner)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::unpause(&env, &caller)
    }

    /// Grant `amount` tokens to each recipient.
    pub fn give_tokens(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::give_tokens(&env, &caller, recipients, amount)
    }

    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::finalize(&env, &caller)
    }

    /// Return an unauthorized investor's held-back contribution, less the fee.
    pub fn refund(env: Env, caller: Address, investor: Address) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::refund(&env, &caller, &investor)
    }

    /// Move custodied currency to the wallet. Returns the amount moved.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        LifecycleManager::withdraw(&env, &caller)
    }

    pub fn destroy(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        LifecycleManager::destroy(&env, &caller)
    }

    pub fn has_ended(env: Env) -> Result<bool, Error> {
        let schedule = SaleLedger::schedule(&env)?;
        Ok(clock::has_ended(&schedule, env.ledger().timestamp()))
    }

    pub fn current_phase(env: Env) -> Result<SalePhase, Error> {
        let schedule = SaleLedger::schedule(&env)?;
        Ok(clock::phase(&schedule, env.ledger().timestamp()))
    }

    /// Tokens a contribution of `value` would yield right now.
    pub fn quote(env: Env, value: i128) -> Result<Quote, Error> {
        SaleManager::quote(&env, value)
    }

    pub fn total_raised(env: Env) -> Result<i128, Error> {
        Ok(SaleLedger::state(&env)?.total_raised)
    }

    pub fn tokens_sold(env: Env) -> Result<i128, Error> {
        Ok(SaleLedger::state(&env)?.tokens_sold)
    }

    pub fn bounty_tokens(env: Env) -> Result<i128, Error> {
        Ok(SaleLedger::state(&env)?.bounty_tokens)
    }

    pub fn is_paused(env: Env) -> Result<bool, Error> {
        let state = SaleLedger::state(&env)?;
        Ok(LifecycleManager::is_paused(&state, env.ledger().timestamp()))
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(SaleLedger::state(&env)?.finalized)
    }

    pub fn is_destroyed(env: Env) -> Result<bool, Error> {
        Ok(SaleLedger::state(&env)?.destroyed)
    }

    pub fn is_authorized(env: Env, investor: Address) -> bool {
        AuthorizationRegistry::is_authorized(&env, &investor)
    }

    pub fn pending_entitlement(env: Env, investor: Address) -> Option<PendingEntitlement> {
        AuthorizationRegistry::entitlement(&env, &investor)
    }

    pub fn early_bird_pools(env: Env) -> Vec<EarlyBirdPool> {
        SaleLedger::pools(&env)
    }

    pub fn schedule(env: Env) -> Result<SaleSchedule, Error> {
        SaleLedger::schedule(&env)
    }

    pub fn roles(env: Env) -> Result<RoleSet, Error> {
        AccessManager::roles(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(AccessManager::roles(&env)?.owner)
    }

    pub fn admins(env: Env) -> Result<Vec<Address>, Error> {
        Ok(AccessManager::roles(&env)?.admins)
    }

    pub fn wallet(env: Env) -> Result<Address, Error> {
        Ok(AccessManager::roles(&env)?.wallet)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        external::token_address(&env)
    }

    pub fn currency(env: Env) -> Result<Address, Error> {
        external::currency_address(&env)
    }
}
