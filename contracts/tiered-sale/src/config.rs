//! Sale constants. Currency and token both use 7 decimals.

use crate::types::EarlyBirdPool;
use soroban_sdk::{Env, Vec};

/// One whole currency unit (or one whole token) in its smallest denomination.
pub const UNIT: i128 = 10_000_000;

/// Tokens per currency unit before any bonus.
pub const BASE_RATE: i128 = 800;

/// Number of rounds, the last one carries no time bonus.
pub const ROUND_COUNT: u32 = 7;

/// Time bonus in percent of the base rate, by round.
pub const TIME_BONUS_PERCENT: [i128; ROUND_COUNT as usize] = [40, 25, 15, 10, 6, 3, 0];

/// (minimum contribution in units, bonus percent), highest first.
pub const QUANTITY_BONUS_TIERS: [(i128, i128); 3] = [(500, 30), (125, 15), (50, 5)];

/// (minimum contribution in units, flat bonus in tokens, pool size in tokens), highest first.
pub const EARLY_BIRD_TIERS: [(i128, i128, i128); 8] = [
    (1000, 500_000, 500_000),
    (750, 240_000, 1_200_000),
    (500, 110_000, 1_100_000),
    (250, 50_000, 1_000_000),
    (100, 18_000, 900_000),
    (50, 7_000, 700_000),
    (20, 2_800, 700_000),
    (10, 1_200, 600_000),
];

/// Smallest accepted contribution, 100 milli-units.
pub const MIN_CONTRIBUTION: i128 = UNIT / 10;

/// Running value an unauthorized investor may receive tokens for.
pub const VERIFICATION_LIMIT: i128 = 5 * UNIT;

/// Hard cap on tokens sold through contributions.
pub const SALE_SUPPLY_CAP: i128 = 200_000_000 * UNIT;

/// Reserve minted to the wallet on finalization.
pub const RESERVE_ALLOCATION: i128 = 8_000_000 * UNIT;

/// Smallest bounty grant.
pub const MIN_BOUNTY: i128 = 100 * UNIT;

/// Refund fee kept by the wallet, in percent.
pub const REFUND_FEE_PERCENT: i128 = 1;

pub const MAX_ADMINS: u32 = 3;

/// A pause lapses on its own after one week.
pub const PAUSE_WINDOW: u64 = 7 * 24 * 60 * 60;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub const INVESTOR_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INVESTOR_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Fresh early-bird pools in storage order.
pub fn default_early_bird_pools(env: &Env) -> Vec<EarlyBirdPool> {
    let mut pools = Vec::new(env);
    for (min_units, bonus_tokens, capacity_tokens) in EARLY_BIRD_TIERS {
        pools.push_back(EarlyBirdPool {
            min_contribution: min_units * UNIT,
            bonus: bonus_tokens * UNIT,
            capacity: capacity_tokens * UNIT,
            remaining: capacity_tokens * UNIT,
        });
    }
    pools
}
