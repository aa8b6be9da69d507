use crate::access::AccessManager;
use crate::bonus;
use crate::clock;
use crate::config::MIN_CONTRIBUTION;
use crate::events;
use crate::external;
use crate::ledger::SaleLedger;
use crate::lifecycle::LifecycleManager;
use crate::registry::AuthorizationRegistry;
use crate::types::{Error, Quote};
use soroban_sdk::{Address, Env};

pub struct SaleManager;

impl SaleManager {
    /// Quote a contribution of `value` at the current ledger time.
    pub fn quote(env: &Env, value: i128) -> Result<Quote, Error> {
        if value < MIN_CONTRIBUTION {
            return Err(Error::BelowMinimum);
        }
        let schedule = SaleLedger::schedule(env)?;
        let round = clock::active_round(&schedule, env.ledger().timestamp())?;
        bonus::compute_tokens(value, round, &SaleLedger::pools(env))
    }

    /// Process one contribution paid by `payer` on behalf of `investor`.
    ///
    /// The ledger and the early-bird pools are updated whether or not the
    /// investor is authorized; authorization only decides whether the tokens
    /// are delivered now or held back with the currency. Unauthorized
    /// investors get delivery only while their running total stays under the
    /// verification limit.
    pub fn process_contribution(
        env: &Env,
        payer: &Address,
        investor: &Address,
        value: i128,
    ) -> Result<i128, Error> {
        let mut state = SaleLedger::require_live(env)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let schedule = SaleLedger::schedule(env)?;
        let now = env.ledger().timestamp();
        let round = clock::active_round(&schedule, now)?;
        if LifecycleManager::is_paused(&state, now) {
            return Err(Error::SalePaused);
        }
        if value < MIN_CONTRIBUTION {
            return Err(Error::BelowMinimum);
        }

        let mut pools = SaleLedger::pools(env);
        let quote = bonus::compute_tokens(value, round, &pools)?;
        SaleLedger::record_sale(&mut state, value, quote.tokens)?;
        let draw = match quote.pool {
            Some(index) => Some(SaleLedger::draw(&mut pools, index)?),
            None => None,
        };
        let deliver = AuthorizationRegistry::is_authorized(env, investor)
            || AuthorizationRegistry::admit_unverified(env, investor, value)?;
        let wallet = AccessManager::roles(env)?.wallet;

        external::collect(env, payer, value)?;
        SaleLedger::save_pools(env, &pools);
        SaleLedger::save_state(env, &state);

        if deliver {
            external::mint_tokens(env, investor, quote.tokens)?;
            external::pay_out(env, &wallet, value)?;
        } else {
            AuthorizationRegistry::queue(env, investor, value, quote.tokens, draw)?;
        }

        events::token_purchase(env, investor, value, quote.tokens);
        Ok(quote.tokens)
    }
}
