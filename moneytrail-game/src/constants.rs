//! Centralized balance and tuning constants for MoneyTrail game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Starting state -----------------------------------------------------------
pub(crate) const STARTING_CASH: f64 = 1_000.0;
pub(crate) const STARTING_SKILL: i32 = 10;
pub(crate) const STARTING_CREDIT_SCORE: i32 = 700;
pub(crate) const WEEKLY_TIME_BUDGET: i32 = 168;
pub(crate) const DAYS_PER_WEEK: u32 = 7;
pub(crate) const WEEKS_PER_MONTH: u32 = 4;

// Resource bounds ----------------------------------------------------------
pub(crate) const STRESS_MAX: i32 = 100;
pub(crate) const SKILL_MAX: i32 = 100;
pub(crate) const CREDIT_SCORE_MIN: i32 = 0;
pub(crate) const CREDIT_SCORE_MAX: i32 = 850;
pub(crate) const TOTAL_DEBT_CAP: f64 = 1_000_000_000.0;
pub(crate) const MONTHLY_PAYMENTS_CAP: f64 = 10_000_000.0;

// Debt tuning --------------------------------------------------------------
pub(crate) const BANKRUPTCY_CEILING: f64 = 1_000_000.0;
pub(crate) const DEBT_MONTHLY_PAYMENT_RATE: f64 = 0.03;
pub(crate) const DEBT_DUE_WEEKS: u32 = 4;
pub(crate) const DEBT_STRESS_PER_THOUSAND: i32 = 10;
pub(crate) const DEBT_PRESSURE_HEAVY: f64 = 2_000.0;
pub(crate) const DEBT_PRESSURE_LIGHT: f64 = 1_000.0;
pub(crate) const DEBT_PRESSURE_HEAVY_STRESS: i32 = 5;
pub(crate) const DEBT_PRESSURE_LIGHT_STRESS: i32 = 2;

// Credit score tuning ------------------------------------------------------
pub(crate) const CREDIT_PER_THOUSAND_DEBT: i32 = 10;
pub(crate) const CREDIT_OVERDRAFT_PENALTY: i32 = 20;
pub(crate) const CREDIT_WINDFALL_BONUS: i32 = 5;
pub(crate) const CREDIT_WINDFALL_THRESHOLD: f64 = 2_000.0;

// Stress tuning ------------------------------------------------------------
pub(crate) const HIGH_STRESS_THRESHOLD: i32 = 70;
pub(crate) const HIGH_STRESS_STREAK_LIMIT: u32 = 14;
pub(crate) const HIGH_STRESS_CASH_FACTOR: f64 = 0.8;
pub(crate) const HIGH_STRESS_DEBT_FACTOR: f64 = 1.05;
pub(crate) const STRESS_DECAY_HEALTHY: i32 = 8;
pub(crate) const STRESS_DECAY_BASE: i32 = 5;
pub(crate) const STRESS_DECAY_HEALTH_THRESHOLD: i32 = 30;
pub(crate) const EARLY_GAME_CASH_LIMIT: f64 = 10_000.0;
// (stress floor, daily cash penalty) tiers, highest tier first.
pub(crate) const STRESS_CASH_TIERS_EARLY: &[(i32, f64)] =
    &[(90, 8.0), (80, 8.0), (60, 4.0), (40, 2.0)];
pub(crate) const STRESS_CASH_TIERS_FULL: &[(i32, f64)] =
    &[(90, 100.0), (80, 50.0), (60, 20.0), (40, 10.0)];

// Scenario generation ------------------------------------------------------
pub(crate) const AFFORDABILITY_RETRIES: u32 = 10;
pub(crate) const INVESTMENT_OFFER_CHANCE: f64 = 0.30;
pub(crate) const SELL_BACK_CHANCE: f64 = 0.50;
pub(crate) const INVESTMENT_AMOUNTS: &[f64] = &[500.0, 1_000.0, 2_000.0, 5_000.0, 10_000.0];
pub(crate) const SECONDARY_SKILL_CHANCE: f64 = 0.20;
pub(crate) const MIN_PAYMENT_RATE: f64 = 0.10;
pub(crate) const NEGOTIATED_RATE: f64 = 0.30;
pub(crate) const PART_TIME_FACTOR: f64 = 0.7;
pub(crate) const INCOME_GAIN_WEEKLY_CAP: f64 = 100.0;

// Skill modifier thresholds ------------------------------------------------
pub(crate) const SKILL_MODIFIER_THRESHOLD: i32 = 20;
pub(crate) const SKILL_BONUS_THRESHOLD: i32 = 50;
pub(crate) const STRESS_COST_INFLATION_HIGH: f64 = 1.3;
pub(crate) const STRESS_COST_INFLATION_MID: f64 = 1.1;
pub(crate) const STRESS_INFLATION_MID_THRESHOLD: i32 = 40;

// Training -----------------------------------------------------------------
pub(crate) const TRAIN_HOURS_MIN: i32 = 1;
pub(crate) const TRAIN_HOURS_MAX: i32 = 8;
pub(crate) const TRAIN_SKILL_PER_HOUR: i32 = 5;
pub(crate) const TRAIN_STRESS_PER_HOUR: i32 = 2;

// Leaderboard --------------------------------------------------------------
pub(crate) const LEADERBOARD_SIZE: usize = 20;
