//! Investment and passive-income subsystem.

use log::debug;

use crate::data::{AssetKind, PassiveKind};
use crate::numbers::{round_money, sane};
use crate::state::{GameState, Investments};

/// Add principal to an asset bucket and refresh the derived totals.
pub fn add_investment(state: &mut GameState, asset: AssetKind, amount: f64) {
    let amount = round_money(amount).max(0.0);
    if amount <= 0.0 {
        return;
    }
    *state.investments.bucket_mut(asset) += amount;
    state.investments.recompute_total();
    state.progress.investment_count += 1;
    state.progress.investment_value = state.progress.investment_value.max(state.investments.total);
    refresh_investment_stream(state);
    debug!("invested {amount:.0} in {}", asset.as_str());
}

/// Sell principal out of an asset bucket (floored at zero). The sale proceeds
/// are carried by the choice's cash effect, not here.
pub fn sell_investment(state: &mut GameState, asset: AssetKind, amount: f64) {
    let amount = round_money(amount).max(0.0);
    let bucket = state.investments.bucket_mut(asset);
    *bucket = (*bucket - amount).max(0.0);
    state.investments.recompute_total();
    refresh_investment_stream(state);
}

/// Register a weekly passive stream created by a passive-type choice.
pub fn add_passive_stream(state: &mut GameState, kind: PassiveKind, weekly_amount: f64) {
    let weekly_amount = round_money(weekly_amount).max(0.0);
    *state.passive_income.stream_mut(kind) += weekly_amount;
    state.passive_income.recompute_total();
}

/// One day of yield across all holdings: `sum(amount * rate / 365)`, rounded.
#[must_use]
pub fn daily_investment_yield(investments: &Investments) -> f64 {
    let raw: f64 = AssetKind::ALL
        .iter()
        .map(|a| sane(investments.bucket(*a)).max(0.0) * a.annual_rate() / 365.0)
        .sum();
    round_money(raw)
}

/// Weekly yield estimate across all holdings, used for the derived
/// `passive_income.investments` figure.
#[must_use]
pub fn weekly_investment_yield(investments: &Investments) -> f64 {
    let raw: f64 = AssetKind::ALL
        .iter()
        .map(|a| sane(investments.bucket(*a)).max(0.0) * a.annual_rate() / 52.0)
        .sum();
    round_money(raw)
}

/// Recompute the derived investment-yield stream and the passive total.
pub fn refresh_investment_stream(state: &mut GameState) {
    state.passive_income.investments = weekly_investment_yield(&state.investments);
    state.passive_income.recompute_total();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_investment_tracks_totals_and_progress() {
        let mut state = GameState::new(0);
        add_investment(&mut state, AssetKind::Stocks, 1_000.0);
        add_investment(&mut state, AssetKind::Crypto, 500.0);
        assert!((state.investments.total - 1_500.0).abs() < f64::EPSILON);
        assert_eq!(state.progress.investment_count, 2);
        assert!((state.progress.investment_value - 1_500.0).abs() < f64::EPSILON);
        assert_eq!(state.investments.held_classes(), 2);
    }

    #[test]
    fn sell_floors_at_zero() {
        let mut state = GameState::new(0);
        add_investment(&mut state, AssetKind::Bonds, 300.0);
        sell_investment(&mut state, AssetKind::Bonds, 900.0);
        assert!((state.investments.bonds).abs() < f64::EPSILON);
        assert!((state.investments.total).abs() < f64::EPSILON);
    }

    #[test]
    fn daily_yield_rounds_and_ignores_negatives() {
        let mut inv = Investments::default();
        inv.stocks = 36_500.0;
        // 36500 * 0.10 / 365 = 10.
        assert!((daily_investment_yield(&inv) - 10.0).abs() < f64::EPSILON);
        inv.crypto = -1_000.0;
        assert!((daily_investment_yield(&inv) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn passive_streams_feed_the_total() {
        let mut state = GameState::new(0);
        add_passive_stream(&mut state, PassiveKind::Dividends, 25.0);
        add_passive_stream(&mut state, PassiveKind::Royalties, 10.0);
        assert!((state.passive_income.stream_total() - 35.0).abs() < f64::EPSILON);
        assert!((state.passive_income.total - 35.0).abs() < f64::EPSILON);
        add_investment(&mut state, AssetKind::Stocks, 5_200.0);
        // 5200 * 0.10 / 52 = 10 weekly from holdings.
        assert!((state.passive_income.investments - 10.0).abs() < f64::EPSILON);
        assert!((state.passive_income.total - 45.0).abs() < f64::EPSILON);
    }
}
