use crate::clock::time_bonus_percent;
use crate::config::{BASE_RATE, QUANTITY_BONUS_TIERS, UNIT};
use crate::types::{EarlyBirdPool, Error, Quote};
use soroban_sdk::Vec;

/// Quantity bonus in percent for a single contribution.
pub fn quantity_bonus_percent(value: i128) -> i128 {
    for (min_units, percent) in QUANTITY_BONUS_TIERS {
        if value >= min_units * UNIT {
            return percent;
        }
    }
    0
}

/// Tokens per currency unit for this round and contribution size.
pub fn rate(value: i128, round: u32) -> i128 {
    BASE_RATE
        + BASE_RATE * time_bonus_percent(round) / 100
        + BASE_RATE * quantity_bonus_percent(value) / 100
}

/// Highest pool the contribution qualifies for that can still pay its full
/// bonus. Exhausted pools fall through to the next lower one.
pub fn select_pool(value: i128, pools: &Vec<EarlyBirdPool>) -> Option<u32> {
    for (index, pool) in pools.iter().enumerate() {
        if value >= pool.min_contribution && pool.remaining >= pool.bonus {
            return Some(index as u32);
        }
    }
    None
}

/// Token amount for a contribution of `value` in `round`, given the current
/// pool state. Reads the pools only.
pub fn compute_tokens(
    value: i128,
    round: u32,
    pools: &Vec<EarlyBirdPool>,
) -> Result<Quote, Error> {
    let rate = rate(value, round);
    let pool = select_pool(value, pools);
    let flat_bonus = match pool {
        Some(index) => pools.get(index).map(|p| p.bonus).unwrap_or(0),
        None => 0,
    };

    let tokens = value
        .checked_mul(rate)
        .and_then(|base| base.checked_add(flat_bonus))
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(Quote {
        round,
        rate,
        flat_bonus,
        pool,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_early_bird_pools;
    use soroban_sdk::Env;

    #[test]
    fn quantity_thresholds_are_inclusive() {
        assert_eq!(quantity_bonus_percent(50 * UNIT - 1), 0);
        assert_eq!(quantity_bonus_percent(50 * UNIT), 5);
        assert_eq!(quantity_bonus_percent(125 * UNIT), 15);
        assert_eq!(quantity_bonus_percent(499 * UNIT), 15);
        assert_eq!(quantity_bonus_percent(500 * UNIT), 30);
    }

    #[test]
    fn single_unit_in_first_round() {
        let env = Env::default();
        let pools = default_early_bird_pools(&env);

        let quote = compute_tokens(UNIT, 1, &pools).unwrap();
        assert_eq!(quote.rate, 1120);
        assert_eq!(quote.flat_bonus, 0);
        assert_eq!(quote.pool, None);
        assert_eq!(quote.tokens, 1120 * UNIT);
    }

    #[test]
    fn early_bird_tiers() {
        let env = Env::default();
        let pools = default_early_bird_pools(&env);

        let cases = [
            (1000, 500_000),
            (750, 240_000),
            (500, 110_000),
            (250, 50_000),
            (100, 18_000),
            (50, 7_000),
            (20, 2_800),
            (10, 1_200),
            (9, 0),
        ];
        for (units, bonus) in cases {
            let quote = compute_tokens(units * UNIT, 1, &pools).unwrap();
            assert_eq!(quote.flat_bonus, bonus * UNIT);
        }
    }

    #[test]
    fn exhausted_pool_falls_through() {
        let env = Env::default();
        let mut pools = default_early_bird_pools(&env);

        let mut top = pools.get(0).unwrap();
        top.remaining = top.bonus - 1;
        pools.set(0, top);

        let quote = compute_tokens(1000 * UNIT, 1, &pools).unwrap();
        assert_eq!(quote.pool, Some(1));
        assert_eq!(quote.flat_bonus, 240_000 * UNIT);
        assert_eq!(quote.tokens, 1000 * UNIT * (800 + 320 + 240) + 240_000 * UNIT);
    }

    #[test]
    fn monotonic_within_a_tier() {
        let env = Env::default();
        let pools = default_early_bird_pools(&env);

        let mut previous = 0;
        for value in (10 * UNIT..20 * UNIT).step_by(1_000_000) {
            let tokens = compute_tokens(value, 3, &pools).unwrap().tokens;
            assert!(tokens >= previous);
            previous = tokens;
        }
    }

    #[test]
    fn overflow_fails_closed() {
        let env = Env::default();
        let pools = default_early_bird_pools(&env);

        assert_eq!(
            compute_tokens(i128::MAX / 2, 1, &pools),
            Err(Error::ArithmeticOverflow)
        );
    }
}
