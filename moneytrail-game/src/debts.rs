//! Debt subsystem: creation, aggregate recomputation, interest, and the
//! automatic paydown sweep.

use log::{debug, warn};

use crate::constants::{
    BANKRUPTCY_CEILING, CREDIT_PER_THOUSAND_DEBT, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN,
    DEBT_DUE_WEEKS, DEBT_MONTHLY_PAYMENT_RATE, MONTHLY_PAYMENTS_CAP, TOTAL_DEBT_CAP,
};
use crate::data::DebtKind;
use crate::numbers::{ceil_f64_to_i32, round_money, sane};
use crate::state::{Debt, GameState};

pub const BANKRUPTCY_REASON: &str = "bankruptcy";

/// Recompute `total_debt` and `monthly_debt_payments` from the buckets,
/// clamping both and guarding non-finite sums.
pub fn recompute_aggregates(state: &mut GameState) {
    state.total_debt = sane(state.debts.total_amount()).clamp(0.0, TOTAL_DEBT_CAP);
    state.monthly_debt_payments =
        sane(state.debts.total_monthly_payments()).clamp(0.0, MONTHLY_PAYMENTS_CAP);
}

/// Open a new debt of the given kind. Returns false (and ends the game) when
/// the new balance would cross the bankruptcy ceiling.
pub fn create_debt(state: &mut GameState, kind: DebtKind, amount: f64) -> bool {
    let amount = round_money(amount).max(0.0);
    if amount <= 0.0 {
        return true;
    }
    if state.total_debt + amount > BANKRUPTCY_CEILING {
        warn!(
            "debt of {amount:.0} would cross the bankruptcy ceiling (held {:.0})",
            state.total_debt
        );
        state.end_game(BANKRUPTCY_REASON);
        state.total_debt = BANKRUPTCY_CEILING;
        state.monthly_debt_payments = 0.0;
        return false;
    }

    state.debt_counter += 1;
    let debt = Debt {
        id: state.debt_counter,
        kind,
        amount,
        original_amount: amount,
        interest_rate: kind.annual_rate(),
        monthly_payment: round_money(amount * DEBT_MONTHLY_PAYMENT_RATE),
        due_week: state.week + DEBT_DUE_WEEKS,
    };
    debug!("new {} debt: {amount:.0} due week {}", kind.as_str(), debt.due_week);
    state.debts.bucket_mut(kind).push(debt);
    recompute_aggregates(state);
    true
}

/// Sweep every bucket in priority order (credit cards first) and put all
/// available cash toward balances that have come due, removing fully paid
/// debts. Freshly opened debts stay untouched until `due_week` arrives.
/// Returns the total principal paid.
pub fn auto_pay_down(state: &mut GameState) -> f64 {
    if state.debts.is_empty() || state.cash <= 0.0 {
        return 0.0;
    }

    let week = state.week;
    let mut cash = sane(state.cash).max(0.0);
    let mut paid = 0.0;
    for bucket in state.debts.buckets_mut() {
        for debt in bucket.iter_mut() {
            if cash <= 0.0 {
                break;
            }
            if debt.due_week > week {
                continue;
            }
            let payment = round_money(cash.min(sane(debt.amount)));
            debt.amount = (debt.amount - payment).max(0.0);
            cash -= payment;
            paid += payment;
        }
        bucket.retain(|d| d.amount > 0.0);
    }

    state.cash = cash.max(0.0);
    state.progress.debt_paid += paid;
    recompute_aggregates(state);
    if paid > 0.0 {
        debug!("auto paydown cleared {paid:.0} of debt");
    }
    paid
}

/// Monthly compounding: grow every active balance by `rate / 12`.
pub fn apply_monthly_interest(state: &mut GameState) {
    for bucket in state.debts.buckets_mut() {
        for debt in bucket.iter_mut() {
            debt.amount = round_money(debt.amount + sane(debt.amount) * debt.interest_rate / 12.0);
        }
    }
    recompute_aggregates(state);
}

/// Credit score movement per $1000 of debt taken on or retired.
#[must_use]
pub fn credit_delta_for_debt_change(debt_delta: f64) -> i32 {
    if debt_delta > 0.0 {
        -CREDIT_PER_THOUSAND_DEBT * ceil_f64_to_i32(debt_delta / 1_000.0)
    } else if debt_delta < 0.0 {
        CREDIT_PER_THOUSAND_DEBT * ceil_f64_to_i32(-debt_delta / 1_000.0)
    } else {
        0
    }
}

pub fn apply_credit_delta(state: &mut GameState, delta: i32) {
    state.credit_score = (state.credit_score + delta).clamp(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_debt_fills_entry_fields() {
        let mut state = GameState::new(0);
        assert!(create_debt(&mut state, DebtKind::Medical, 1_200.0));
        let debt = &state.debts.medical_debt[0];
        assert!((debt.amount - 1_200.0).abs() < f64::EPSILON);
        assert!((debt.interest_rate - 0.08).abs() < f64::EPSILON);
        assert!((debt.monthly_payment - 36.0).abs() < f64::EPSILON);
        assert_eq!(debt.due_week, 5);
        assert!((state.total_debt - 1_200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ceiling_breach_ends_the_game() {
        let mut state = GameState::new(0);
        assert!(create_debt(&mut state, DebtKind::CreditCard, 999_900.0));
        assert!(!create_debt(&mut state, DebtKind::CreditCard, 500.0));
        assert!(state.game_over);
        assert_eq!(state.game_over_reason.as_deref(), Some(BANKRUPTCY_REASON));
        assert!((state.total_debt - BANKRUPTCY_CEILING).abs() < f64::EPSILON);
        assert!((state.monthly_debt_payments).abs() < f64::EPSILON);
    }

    #[test]
    fn paydown_sweeps_due_debts_in_bucket_order() {
        let mut state = GameState::new(0);
        create_debt(&mut state, DebtKind::Payday, 400.0);
        create_debt(&mut state, DebtKind::CreditCard, 300.0);
        state.cash = 500.0;

        // Nothing has come due yet.
        assert!((auto_pay_down(&mut state)).abs() < f64::EPSILON);
        assert!((state.cash - 500.0).abs() < f64::EPSILON);

        state.week = 10;
        let paid = auto_pay_down(&mut state);

        assert!((paid - 500.0).abs() < f64::EPSILON);
        assert!((state.cash).abs() < f64::EPSILON);
        // Credit card cleared first, payday partially paid.
        assert!(state.debts.credit_cards.is_empty());
        assert!((state.debts.payday_loans[0].amount - 200.0).abs() < f64::EPSILON);
        assert!((state.total_debt - 200.0).abs() < f64::EPSILON);
        assert!((state.progress.debt_paid - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn monthly_interest_compounds_each_balance() {
        let mut state = GameState::new(0);
        create_debt(&mut state, DebtKind::Payday, 1_200.0);
        apply_monthly_interest(&mut state);
        // 36% annual -> 3% monthly on 1200 = 36.
        assert!((state.debts.payday_loans[0].amount - 1_236.0).abs() < f64::EPSILON);
        assert!((state.total_debt - 1_236.0).abs() < f64::EPSILON);
    }

    #[test]
    fn credit_delta_rounds_up_per_thousand() {
        assert_eq!(credit_delta_for_debt_change(150.0), -10);
        assert_eq!(credit_delta_for_debt_change(2_001.0), -30);
        assert_eq!(credit_delta_for_debt_change(-500.0), 10);
        assert_eq!(credit_delta_for_debt_change(0.0), 0);
    }

    #[test]
    fn aggregates_guard_corrupt_amounts() {
        let mut state = GameState::new(0);
        create_debt(&mut state, DebtKind::CarLoan, 700.0);
        state.debts.car_loans[0].amount = f64::NAN;
        recompute_aggregates(&mut state);
        assert!((state.total_debt).abs() < f64::EPSILON);
    }
}
