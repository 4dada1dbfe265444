//! Choice-effect engine: applies one chosen option to the session state.

use log::debug;

use crate::achievements::check_achievements;
use crate::constants::{
    CREDIT_OVERDRAFT_PENALTY, CREDIT_WINDFALL_BONUS, CREDIT_WINDFALL_THRESHOLD,
    DEBT_STRESS_PER_THOUSAND, STRESS_MAX, TRAIN_HOURS_MAX, TRAIN_HOURS_MIN, TRAIN_SKILL_PER_HOUR,
    TRAIN_STRESS_PER_HOUR,
};
use crate::data::{Choice, DebtKind, SkillId};
use crate::debts::{
    apply_credit_delta, auto_pay_down, create_debt, credit_delta_for_debt_change,
    recompute_aggregates,
};
use crate::invest::{add_investment, add_passive_stream, sell_investment};
use crate::job::add_job_experience;
use crate::numbers::{ceil_f64_to_i32, round_money, sane};
use crate::state::GameState;

/// Apply one choice's effects to the state, in fixed rule order. Returns any
/// achievements unlocked mid-application (investment milestones must reflect
/// the same turn).
///
/// Never fails: malformed numeric effects are coerced to zero, and a cash
/// shortfall becomes credit-card debt or, past the ceiling, bankruptcy.
pub fn apply_choice_effects(state: &mut GameState, choice: &Choice) -> Vec<&'static str> {
    let fx = &choice.effects;
    let cash_effect = sane(fx.cash);
    let debt_before = state.total_debt;
    let mut unlocked = Vec::new();

    // Cash first; a shortfall converts into new credit-card debt.
    let cash_after = sane(state.cash) + cash_effect;
    let went_negative = cash_after < 0.0;
    if went_negative {
        let shortfall = round_money(-cash_after);
        state.cash = 0.0;
        debug!("cash shortfall of {shortfall:.0} converted to debt");
        create_debt(state, DebtKind::CreditCard, shortfall);
    } else {
        state.cash = cash_after;
    }

    if let Some(spec) = fx.debt {
        create_debt(state, spec.kind, sane(spec.amount));
    }
    if !state.game_over {
        recompute_aggregates(state);
    }

    state.stress = (state.stress + fx.stress).clamp(0, STRESS_MAX);

    for skill in SkillId::ALL {
        let delta = fx.skills.get(skill);
        if delta != 0 {
            state.skills.add(skill, delta);
        }
    }
    state.time = (state.time - fx.time.max(0)).max(0);

    state.income += sane(fx.income);
    if cash_effect > 0.0 {
        state.progress.total_earnings += cash_effect;
    }

    // Debt imposes a stress floor proportional to its size.
    if state.total_debt > 0.0 {
        let floor = (ceil_f64_to_i32(state.total_debt / 1_000.0) * DEBT_STRESS_PER_THOUSAND)
            .min(STRESS_MAX);
        state.stress = state.stress.max(floor);
    }

    let mut credit_delta = credit_delta_for_debt_change(state.total_debt - debt_before);
    if went_negative {
        credit_delta -= CREDIT_OVERDRAFT_PENALTY;
    }
    if cash_effect > CREDIT_WINDFALL_THRESHOLD {
        credit_delta += CREDIT_WINDFALL_BONUS;
    }
    apply_credit_delta(state, credit_delta);

    state.total_decisions += 1;
    if cash_effect > 0.0 || fx.stress < 0 {
        state.successful_decisions += 1;
        state.consecutive_good_decisions += 1;
    } else {
        state.consecutive_good_decisions = 0;
    }

    if let Some(spec) = fx.investment {
        add_investment(state, spec.asset, sane(spec.amount));
        unlocked.extend(check_achievements(state));
    }
    if let Some(spec) = fx.sell_investment {
        sell_investment(state, spec.asset, sane(spec.amount));
        unlocked.extend(check_achievements(state));
    }
    if let Some(spec) = fx.passive {
        add_passive_stream(state, spec.kind, sane(spec.weekly_amount));
    }
    if let Some(job) = fx.job {
        add_job_experience(state, job.experience, sane(job.income));
    }

    let paid = auto_pay_down(state);
    if paid > 0.0 {
        apply_credit_delta(state, credit_delta_for_debt_change(-paid));
    }

    state.clamp_resources();
    unlocked
}

/// Spend 1-8 hours training a skill: +5 skill and +2 stress per hour.
pub fn train_skill(state: &mut GameState, skill: SkillId, hours: i32) {
    let hours = hours.clamp(TRAIN_HOURS_MIN, TRAIN_HOURS_MAX);
    state.skills.add(skill, hours * TRAIN_SKILL_PER_HOUR);
    state.stress = (state.stress + hours * TRAIN_STRESS_PER_HOUR).min(STRESS_MAX);
    state.time = (state.time - hours).max(0);
}
