//! Time-progression engine: one call advances the session by a single day.

use log::debug;

use crate::achievements::update_weekly_progress;
use crate::constants::{
    DAYS_PER_WEEK, DEBT_PRESSURE_HEAVY, DEBT_PRESSURE_HEAVY_STRESS, DEBT_PRESSURE_LIGHT,
    DEBT_PRESSURE_LIGHT_STRESS, EARLY_GAME_CASH_LIMIT, HIGH_STRESS_CASH_FACTOR,
    HIGH_STRESS_DEBT_FACTOR, HIGH_STRESS_STREAK_LIMIT, HIGH_STRESS_THRESHOLD,
    STRESS_CASH_TIERS_EARLY, STRESS_CASH_TIERS_FULL, STRESS_DECAY_BASE, STRESS_DECAY_HEALTHY,
    STRESS_DECAY_HEALTH_THRESHOLD, STRESS_MAX, WEEKLY_TIME_BUDGET, WEEKS_PER_MONTH,
};
use crate::debts::{apply_monthly_interest, auto_pay_down, recompute_aggregates};
use crate::invest::{daily_investment_yield, refresh_investment_stream};
use crate::numbers::sane;
use crate::state::GameState;

fn stress_cash_penalty(stress: i32, cash: f64) -> f64 {
    let tiers = if cash < EARLY_GAME_CASH_LIMIT {
        STRESS_CASH_TIERS_EARLY
    } else {
        STRESS_CASH_TIERS_FULL
    };
    tiers
        .iter()
        .find(|(floor, _)| stress > *floor)
        .map_or(0.0, |(_, penalty)| *penalty)
}

/// Advance one day: income, passive yield, paydown, stress economics, and on
/// the seventh day a weekly rollover with interest and achievement
/// bookkeeping.
pub fn progress_time(state: &mut GameState) {
    state.cash = sane(state.cash) + sane(state.income);

    let yield_today = daily_investment_yield(&state.investments);
    state.cash += yield_today;
    refresh_investment_stream(state);

    auto_pay_down(state);

    // Sustained high stress erodes finances once per calendar week.
    if state.stress > HIGH_STRESS_THRESHOLD {
        state.high_stress_streak += 1;
    } else {
        state.high_stress_streak = 0;
    }
    if state.high_stress_streak > HIGH_STRESS_STREAK_LIMIT
        && state.last_high_stress_penalty_week != state.week
    {
        state.cash = (sane(state.cash) * HIGH_STRESS_CASH_FACTOR).floor();
        for bucket in state.debts.buckets_mut() {
            for debt in bucket.iter_mut() {
                debt.amount = (sane(debt.amount) * HIGH_STRESS_DEBT_FACTOR).floor();
            }
        }
        recompute_aggregates(state);
        state.last_high_stress_penalty_week = state.week;
        debug!("burnout penalty applied in week {}", state.week);
    }

    state.cash = (state.cash - stress_cash_penalty(state.stress, state.cash)).max(0.0);

    if state.total_debt > DEBT_PRESSURE_HEAVY {
        state.stress = (state.stress + DEBT_PRESSURE_HEAVY_STRESS).min(STRESS_MAX);
    } else if state.total_debt > DEBT_PRESSURE_LIGHT {
        state.stress = (state.stress + DEBT_PRESSURE_LIGHT_STRESS).min(STRESS_MAX);
    }

    let decay = if state.skills.health > STRESS_DECAY_HEALTH_THRESHOLD {
        STRESS_DECAY_HEALTHY
    } else {
        STRESS_DECAY_BASE
    };
    state.stress = (state.stress - decay).max(0);

    state.day += 1;
    if state.day > DAYS_PER_WEEK {
        state.day = 1;
        state.week += 1;
        state.time = WEEKLY_TIME_BUDGET;

        // Weekly passive streams pay out on rollover.
        state.cash += state.passive_income.stream_total();

        if state.week % WEEKS_PER_MONTH == 0 {
            apply_monthly_interest(state);
        }
        update_weekly_progress(state);
        debug!("rolled over into week {}", state.week);
    }

    state.clamp_resources();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AssetKind, DebtKind, PassiveKind};
    use crate::debts::create_debt;
    use crate::invest::{add_investment, add_passive_stream};

    #[test]
    fn early_game_tier_and_decay_match_reference_vector() {
        let mut state = GameState::new(0);
        state.skills.health = 50;
        state.stress = 80;
        state.cash = 500.0;
        state.income = 0.0;

        progress_time(&mut state);

        // stress 80 sits in the >60 early-game tier: -4 cash.
        assert!((state.cash - 496.0).abs() < f64::EPSILON);
        // healthy decay of 8.
        assert_eq!(state.stress, 72);
        assert_eq!(state.day, 2);
    }

    #[test]
    fn full_scale_penalty_applies_with_deep_pockets() {
        let mut state = GameState::new(0);
        state.stress = 95;
        state.cash = 50_000.0;
        progress_time(&mut state);
        assert!((state.cash - 49_900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn income_and_yield_land_before_penalties() {
        let mut state = GameState::new(0);
        state.income = 100.0;
        add_investment(&mut state, AssetKind::Stocks, 36_500.0);
        state.cash = 0.0;

        progress_time(&mut state);

        // 100 income + 10 daily yield on 36.5k of stocks.
        assert!((state.cash - 110.0).abs() < f64::EPSILON);
        assert!(state.passive_income.total > 0.0);
    }

    #[test]
    fn week_rollover_resets_counters_and_pays_streams() {
        let mut state = GameState::new(0);
        state.day = 7;
        state.time = 12;
        state.cash = 100.0;
        add_passive_stream(&mut state, PassiveKind::RentalIncome, 40.0);

        progress_time(&mut state);

        assert_eq!(state.day, 1);
        assert_eq!(state.week, 2);
        assert_eq!(state.time, 168);
        assert!((state.cash - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn monthly_interest_hits_on_fourth_week() {
        let mut state = GameState::new(0);
        state.week = 3;
        state.day = 7;
        state.cash = 0.0;
        create_debt(&mut state, DebtKind::Payday, 1_200.0);

        progress_time(&mut state);

        assert_eq!(state.week, 4);
        // 36% annual -> 3% monthly on 1200.
        assert!((state.total_debt - 1_236.0).abs() < 1.0);
    }

    #[test]
    fn burnout_streak_fires_once_per_week() {
        let mut state = GameState::new(0);
        state.stress = 100;
        state.skills.health = 0;
        state.cash = 1_000.0;
        state.high_stress_streak = HIGH_STRESS_STREAK_LIMIT;

        progress_time(&mut state);
        // 20% burnout cut, then the >90 early-game tier takes another 8.
        assert!((state.cash - 792.0).abs() < f64::EPSILON);
        assert_eq!(state.last_high_stress_penalty_week, state.week);

        // Same week: stress stays maxed but the penalty must not repeat.
        state.stress = 100;
        progress_time(&mut state);
        assert!((state.cash - 784.0).abs() < f64::EPSILON);
    }

    #[test]
    fn debt_pressure_adds_stress_tiers() {
        let mut state = GameState::new(0);
        state.cash = 0.0;
        state.stress = 50;
        state.skills.health = 0;
        create_debt(&mut state, DebtKind::Medical, 1_500.0);

        progress_time(&mut state);
        // +2 light pressure, -5 base decay.
        assert_eq!(state.stress, 47);

        state.stress = 50;
        create_debt(&mut state, DebtKind::Medical, 1_000.0);
        progress_time(&mut state);
        // +5 heavy pressure, -5 base decay.
        assert_eq!(state.stress, 50);
    }

    #[test]
    fn passive_total_is_never_negative() {
        let mut state = GameState::new(0);
        for _ in 0..30 {
            progress_time(&mut state);
            assert!(state.passive_income.total >= 0.0);
        }
    }
}
