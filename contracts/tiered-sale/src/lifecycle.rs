use crate::access::AccessManager;
use crate::clock;
use crate::config::{MIN_BOUNTY, PAUSE_WINDOW, REFUND_FEE_PERCENT, RESERVE_ALLOCATION};
use crate::events::{self, FundsWithdrawn, InvestorRefunded, SaleFinalized};
use crate::external;
use crate::ledger::SaleLedger;
use crate::registry::AuthorizationRegistry;
use crate::types::{Error, SaleState};
use soroban_sdk::{log, Address, Env, Vec};

/// Pause, finalize, refund, withdraw and destroy transitions plus bounty grants.
pub struct LifecycleManager;

impl LifecycleManager {
    /// A pause only holds for `PAUSE_WINDOW` after it was set.
    pub fn is_paused(state: &SaleState, now: u64) -> bool {
        match (state.paused, state.pause_start) {
            (true, Some(start)) => now < start.saturating_add(PAUSE_WINDOW),
            (true, None) => true,
            (false, _) => false,
        }
    }

    pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        AccessManager::require_owner_or_admin(env, caller)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let now = env.ledger().timestamp();
        clock::active_round(&SaleLedger::schedule(env)?, now)?;
        if Self::is_paused(&state, now) {
            return Err(Error::AlreadyPaused);
        }

        state.paused = true;
        state.pause_start = Some(now);
        SaleLedger::save_state(env, &state);

        log!(env, "sale paused", caller.clone(), now);
        events::pause_changed(env, true, caller);
        Ok(())
    }

    /// Owner may lift a pause at any time; after the window anyone may.
    pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        if !state.paused {
            return Err(Error::NotPaused);
        }

        let now = env.ledger().timestamp();
        if Self::is_paused(&state, now) {
            AccessManager::require_owner(env, caller)?;
        }

        state.paused = false;
        state.pause_start = None;
        SaleLedger::save_state(env, &state);

        log!(env, "sale unpaused", caller.clone(), now);
        events::pause_changed(env, false, caller);
        Ok(())
    }

    /// Close the sale: mint the reserve to the wallet and unlock the token.
    pub fn finalize(env: &Env, caller: &Address) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let schedule = SaleLedger::schedule(env)?;
        let now = env.ledger().timestamp();
        if !clock::has_ended(&schedule, now) {
            return Err(Error::SaleNotEnded);
        }

        let roles = AccessManager::roles(env)?;
        if now < schedule.max_finalization_time && !AccessManager::is_owner(&roles, caller) {
            return Err(Error::Unauthorized);
        }

        state.finalized = true;
        state.paused = false;
        state.pause_start = None;
        SaleLedger::save_state(env, &state);

        external::mint_tokens(env, &roles.wallet, RESERVE_ALLOCATION)?;
        external::token_client(env)?.finalize(&env.current_contract_address());

        log!(env, "sale finalized", state.tokens_sold, state.total_raised);
        events::sale_finalized(
            env,
            SaleFinalized {
                by: caller.clone(),
                reserve: RESERVE_ALLOCATION,
                tokens_sold: state.tokens_sold,
                total_raised: state.total_raised,
            },
        );
        Ok(())
    }

    /// Mint `amount` to every recipient, outside the bonus rules and the sale cap.
    pub fn give_tokens(
        env: &Env,
        caller: &Address,
        recipients: Vec<Address>,
        amount: i128,
    ) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        AccessManager::require_owner_or_admin(env, caller)?;
        if amount < MIN_BOUNTY {
            return Err(Error::BountyBelowMinimum);
        }
        if recipients.is_empty() {
            return Err(Error::EmptyList);
        }

        let total = amount
            .checked_mul(recipients.len() as i128)
            .ok_or(Error::ArithmeticOverflow)?;
        SaleLedger::record_bounty(&mut state, total)?;
        SaleLedger::save_state(env, &state);

        for recipient in recipients.iter() {
            external::mint_tokens(env, &recipient, amount)?;
            events::bounty_granted(env, &recipient, amount);
        }
        Ok(())
    }

    /// Return a held-back contribution minus the fee, undoing its ledger effect.
    pub fn refund(env: &Env, caller: &Address, investor: &Address) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        let roles = AccessManager::require_admin(env, caller)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let entitlement =
            AuthorizationRegistry::entitlement(env, investor).ok_or(Error::NothingToRefund)?;
        if entitlement.value <= 0 {
            return Err(Error::NothingToRefund);
        }

        let fee = entitlement
            .value
            .checked_mul(REFUND_FEE_PERCENT)
            .ok_or(Error::ArithmeticOverflow)?
            / 100;
        let payout = entitlement.value - fee;

        let mut pools = SaleLedger::pools(env);
        SaleLedger::release_draws(&mut pools, &entitlement.draws)?;
        SaleLedger::reverse_sale(&mut state, entitlement.value, entitlement.tokens)?;

        SaleLedger::save_pools(env, &pools);
        SaleLedger::save_state(env, &state);
        AuthorizationRegistry::clear_entitlement(env, investor);

        external::pay_out(env, investor, payout)?;
        external::pay_out(env, &roles.wallet, fee)?;

        log!(env, "investor refunded", investor.clone(), payout, fee);
        events::investor_refunded(
            env,
            InvestorRefunded {
                investor: investor.clone(),
                payout,
                fee,
                tokens: entitlement.tokens,
            },
        );
        Ok(())
    }

    /// Send everything still in custody to the wallet.
    pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, Error> {
        let state = SaleLedger::require_live(env)?;
        if !state.finalized {
            return Err(Error::NotYetFinalized);
        }

        let roles = AccessManager::roles(env)?;
        let schedule = SaleLedger::schedule(env)?;
        let admin_allowed = AccessManager::is_admin(&roles, caller)
            && env.ledger().timestamp() >= schedule.max_finalization_time;
        if !AccessManager::is_owner(&roles, caller) && !admin_allowed {
            return Err(Error::Unauthorized);
        }

        let amount = external::custodied_balance(env)?;
        external::pay_out(env, &roles.wallet, amount)?;
        SaleLedger::bump(env);

        events::funds_withdrawn(
            env,
            FundsWithdrawn {
                by: caller.clone(),
                wallet: roles.wallet,
                amount,
            },
        );
        Ok(amount)
    }

    /// Retire the sale for good and hand the token to the owner.
    pub fn destroy(env: &Env, caller: &Address) -> Result<(), Error> {
        let mut state = SaleLedger::require_live(env)?;
        let roles = AccessManager::require_owner(env, caller)?;
        if !state.finalized {
            return Err(Error::NotYetFinalized);
        }

        state.destroyed = true;
        SaleLedger::save_state(env, &state);

        let swept = external::custodied_balance(env)?;
        external::pay_out(env, &roles.wallet, swept)?;
        external::token_client(env)?.transfer_ownership(caller);

        log!(env, "sale destroyed", caller.clone(), swept);
        events::sale_destroyed(env, caller, swept);
        Ok(())
    }
}
