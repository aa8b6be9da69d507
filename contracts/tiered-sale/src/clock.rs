use crate::config::{ROUND_COUNT, TIME_BONUS_PERCENT};
use crate::types::{Error, SalePhase, SaleSchedule};

/// Check that the boundaries are strictly increasing and the finalization
/// deadline lies after the end of the sale.
pub fn validate(schedule: &SaleSchedule) -> Result<(), Error> {
    if schedule.round_ends.len() != ROUND_COUNT {
        return Err(Error::InvalidSchedule);
    }

    let mut previous = schedule.start_time;
    for boundary in schedule.round_ends.iter() {
        if boundary <= previous {
            return Err(Error::InvalidSchedule);
        }
        previous = boundary;
    }

    if schedule.max_finalization_time <= previous {
        return Err(Error::InvalidSchedule);
    }

    Ok(())
}

pub fn end_time(schedule: &SaleSchedule) -> u64 {
    schedule.round_ends.last().unwrap_or(schedule.start_time)
}

pub fn has_ended(schedule: &SaleSchedule, now: u64) -> bool {
    now >= end_time(schedule)
}

/// Map `now` to a phase. A boundary timestamp already belongs to the next round.
pub fn phase(schedule: &SaleSchedule, now: u64) -> SalePhase {
    if now < schedule.start_time {
        return SalePhase::NotStarted;
    }

    for (index, boundary) in schedule.round_ends.iter().enumerate() {
        if now < boundary {
            return SalePhase::Round(index as u32 + 1);
        }
    }

    SalePhase::Ended
}

/// Round, or the phase error a contribution at `now` must fail with.
pub fn active_round(schedule: &SaleSchedule, now: u64) -> Result<u32, Error> {
    match phase(schedule, now) {
        SalePhase::NotStarted => Err(Error::SaleNotStarted),
        SalePhase::Round(round) => Ok(round),
        SalePhase::Ended => Err(Error::SaleEnded),
    }
}

/// Time bonus in percent; anything outside 1..=7 earns nothing.
pub fn time_bonus_percent(round: u32) -> i128 {
    if round == 0 || round > ROUND_COUNT {
        return 0;
    }
    TIME_BONUS_PERCENT[(round - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    fn schedule(env: &Env) -> SaleSchedule {
        SaleSchedule {
            start_time: 100,
            round_ends: vec![env, 200, 300, 400, 500, 600, 700, 800],
            max_finalization_time: 900,
        }
    }

    #[test]
    fn boundaries_belong_to_next_round() {
        let env = Env::default();
        let s = schedule(&env);

        assert_eq!(phase(&s, 99), SalePhase::NotStarted);
        assert_eq!(phase(&s, 100), SalePhase::Round(1));
        assert_eq!(phase(&s, 199), SalePhase::Round(1));
        assert_eq!(phase(&s, 200), SalePhase::Round(2));
        assert_eq!(phase(&s, 799), SalePhase::Round(7));
        assert_eq!(phase(&s, 800), SalePhase::Ended);
        assert!(!has_ended(&s, 799));
        assert!(has_ended(&s, 800));
    }

    #[test]
    fn every_active_second_maps_to_one_round() {
        let env = Env::default();
        let s = schedule(&env);

        let mut last_round = 1;
        for now in 100..800u64 {
            let round = active_round(&s, now).unwrap();
            assert!(round == last_round || round == last_round + 1);
            last_round = round;
        }
        assert_eq!(last_round, 7);
    }

    #[test]
    fn time_bonus_table() {
        let expected = [40, 25, 15, 10, 6, 3, 0];
        for (index, percent) in expected.iter().enumerate() {
            assert_eq!(time_bonus_percent(index as u32 + 1), *percent);
        }
        assert_eq!(time_bonus_percent(0), 0);
        assert_eq!(time_bonus_percent(8), 0);
    }

    #[test]
    fn validate_rejects_bad_schedules() {
        let env = Env::default();
        assert_eq!(validate(&schedule(&env)), Ok(()));

        let mut unordered = schedule(&env);
        unordered.round_ends = vec![&env, 200, 300, 300, 500, 600, 700, 800];
        assert_eq!(validate(&unordered), Err(Error::InvalidSchedule));

        let mut short = schedule(&env);
        short.round_ends = vec![&env, 200, 300];
        assert_eq!(validate(&short), Err(Error::InvalidSchedule));

        let mut late_start = schedule(&env);
        late_start.start_time = 200;
        assert_eq!(validate(&late_start), Err(Error::InvalidSchedule));

        let mut no_grace = schedule(&env);
        no_grace.max_finalization_time = 800;
        assert_eq!(validate(&no_grace), Err(Error::InvalidSchedule));
    }
}
