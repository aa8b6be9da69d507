use crate::config::{
    default_early_bird_pools, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, SALE_SUPPLY_CAP,
};
use crate::types::{DataKey, EarlyBirdDraw, EarlyBirdPool, Error, SaleSchedule, SaleState};
use soroban_sdk::{Env, Vec};

/// Running totals, early-bird pools and the schedule they are measured against.
pub struct SaleLedger;

impl SaleLedger {
    pub fn init(env: &Env, schedule: &SaleSchedule) {
        env.storage().instance().set(&DataKey::Schedule, schedule);
        env.storage().instance().set(
            &DataKey::State,
            &SaleState {
                total_raised: 0,
                tokens_sold: 0,
                bounty_tokens: 0,
                paused: false,
                pause_start: None,
                finalized: false,
                destroyed: false,
            },
        );
        Self::save_pools(env, &default_early_bird_pools(env));
    }

    pub fn bump(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn schedule(env: &Env) -> Result<SaleSchedule, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Schedule)
            .ok_or(Error::NotInitialized)
    }

    pub fn state(env: &Env) -> Result<SaleState, Error> {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(Error::NotInitialized)
    }

    /// State of a sale that still accepts mutations
    pub fn require_live(env: &Env) -> Result<SaleState, Error> {
        let state = Self::state(env)?;
        if state.destroyed {
            return Err(Error::Destroyed);
        }
        Ok(state)
    }

    pub fn save_state(env: &Env, state: &SaleState) {
        env.storage().instance().set(&DataKey::State, state);
        Self::bump(env);
    }

    pub fn pools(env: &Env) -> Vec<EarlyBirdPool> {
        env.storage()
            .instance()
            .get(&DataKey::EarlyBirdPools)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn save_pools(env: &Env, pools: &Vec<EarlyBirdPool>) {
        env.storage().instance().set(&DataKey::EarlyBirdPools, pools);
    }

    /// Add a contribution to the totals, enforcing the sale cap.
    pub fn record_sale(state: &mut SaleState, value: i128, tokens: i128) -> Result<(), Error> {
        let tokens_sold = state
            .tokens_sold
            .checked_add(tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        if tokens_sold > SALE_SUPPLY_CAP {
            return Err(Error::AboveCap);
        }
        let total_raised = state
            .total_raised
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;

        state.tokens_sold = tokens_sold;
        state.total_raised = total_raised;
        Ok(())
    }

    /// Take back a contribution that is being refunded.
    pub fn reverse_sale(state: &mut SaleState, value: i128, tokens: i128) -> Result<(), Error> {
        state.tokens_sold = state
            .tokens_sold
            .checked_sub(tokens)
            .filter(|sold| *sold >= 0)
            .ok_or(Error::ArithmeticOverflow)?;
        state.total_raised = state
            .total_raised
            .checked_sub(value)
            .filter(|raised| *raised >= 0)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_bounty(state: &mut SaleState, amount: i128) -> Result<(), Error> {
        state.bounty_tokens = state
            .bounty_tokens
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(())
    }

    /// Consume one bonus from pool `index`.
    pub fn draw(pools: &mut Vec<EarlyBirdPool>, index: u32) -> Result<EarlyBirdDraw, Error> {
        let mut pool = pools.get(index).ok_or(Error::ArithmeticOverflow)?;
        pool.remaining = pool
            .remaining
            .checked_sub(pool.bonus)
            .filter(|remaining| *remaining >= 0)
            .ok_or(Error::ArithmeticOverflow)?;

        let draw = EarlyBirdDraw {
            pool: index,
            amount: pool.bonus,
        };
        pools.set(index, pool);
        Ok(draw)
    }

    /// Return refunded draws to their pools.
    pub fn release_draws(
        pools: &mut Vec<EarlyBirdPool>,
        draws: &Vec<EarlyBirdDraw>,
    ) -> Result<(), Error> {
        for draw in draws.iter() {
            let mut pool = pools.get(draw.pool).ok_or(Error::ArithmeticOverflow)?;
            pool.remaining = pool
                .remaining
                .checked_add(draw.amount)
                .filter(|remaining| *remaining <= pool.capacity)
                .ok_or(Error::ArithmeticOverflow)?;
            pools.set(draw.pool, pool);
        }
        Ok(())
    }
}
