//! Achievement evaluator: a fixed rule table scanned against the state.

use log::info;

use crate::state::GameState;

/// One achievement rule. Predicates are independent and idempotent, so
/// evaluation order does not matter.
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    check: fn(&GameState) -> bool,
}

const fn rule(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    check: fn(&GameState) -> bool,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        check,
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    // Wealth
    rule("rich", "Comfortable", "Hold $10,000 in cash", |s| {
        s.cash >= 10_000.0
    }),
    rule("millionaire", "Millionaire", "Reach a net worth of $1,000,000", |s| {
        s.net_worth() >= 1_000_000.0
    }),
    rule(
        "speed_runner",
        "Speed Runner",
        "Reach a net worth of $100,000 within ten weeks",
        |s| s.week <= 10 && s.net_worth() >= 100_000.0,
    ),
    // Investing
    rule("first_investment", "First Steps", "Make your first investment", |s| {
        s.progress.investment_count >= 1
    }),
    rule("investor", "Investor", "Make ten investments", |s| {
        s.progress.investment_count >= 10
    }),
    rule(
        "diverse_portfolio",
        "Diversified",
        "Hold three different asset classes at once",
        |s| s.investments.held_classes() >= 3,
    ),
    rule(
        "investment_guru",
        "Investment Guru",
        "Hold $50,000 in investments",
        |s| s.investments.total >= 50_000.0,
    ),
    rule("crypto_whale", "Crypto Whale", "Hold $10,000 in crypto", |s| {
        s.investments.crypto >= 10_000.0
    }),
    rule(
        "real_estate_mogul",
        "Real Estate Mogul",
        "Hold $25,000 in real estate",
        |s| s.investments.real_estate >= 25_000.0,
    ),
    // Passive income
    rule(
        "early_retirement",
        "Early Retirement",
        "Earn $1,000 a week passively",
        |s| s.passive_income.total >= 1_000.0,
    ),
    rule("dividend_king", "Dividend King", "Earn $500 a week in dividends", |s| {
        s.passive_income.dividends >= 500.0
    }),
    rule(
        "side_hustle_king",
        "Side Hustle King",
        "Earn $300 a week from a side business",
        |s| s.passive_income.side_business >= 300.0,
    ),
    // Debt
    rule(
        "debt_free",
        "Debt Free",
        "Stay out of debt for four straight weeks",
        |s| s.total_debt <= 0.0 && s.progress.debt_free_weeks >= 4,
    ),
    rule("debt_destroyer", "Debt Destroyer", "Pay off $10,000 of debt", |s| {
        s.progress.debt_paid >= 10_000.0
    }),
    // Wellbeing and decisions
    rule(
        "stress_free",
        "Zen",
        "Keep stress at 20 or below for eight straight weeks",
        |s| s.progress.stress_free_weeks >= 8,
    ),
    rule(
        "decision_master",
        "Decision Master",
        "Make twenty good decisions in a row",
        |s| s.consecutive_good_decisions >= 20,
    ),
    rule("survivor", "Survivor", "Reach week 50", |s| s.week >= 50),
    // Skills
    rule("skill_master", "Renaissance", "Raise every skill to 80", |s| {
        s.skills.all_at_least(80)
    }),
    rule("finance_expert", "Finance Expert", "Raise finance to 90", |s| {
        s.skills.finance >= 90
    }),
    rule(
        "social_butterfly",
        "Social Butterfly",
        "Raise social to 90",
        |s| s.skills.social >= 90,
    ),
    rule("hustle_king", "Hustle King", "Raise hustling to 90", |s| {
        s.skills.hustling >= 90
    }),
    rule("health_guru", "Health Guru", "Raise health to 90", |s| {
        s.skills.health >= 90
    }),
    // Career
    rule("career_starter", "Career Starter", "Earn your first promotion", |s| {
        s.job.level > 1
    }),
    rule(
        "mid_level_manager",
        "Climbing the Ladder",
        "Reach job level 5",
        |s| s.job.level >= 5,
    ),
    rule("executive_level", "Executive", "Reach job level 8", |s| {
        s.job.level >= 8
    }),
    rule("ceo", "Chief Executive", "Reach the top of the ladder", |s| {
        s.job.title == "CEO"
    }),
];

/// Scan the rule table and unlock anything newly satisfied. The unlocked set
/// only grows; already-unlocked ids are skipped, so repeated calls are
/// idempotent.
pub fn check_achievements(state: &mut GameState) -> Vec<&'static str> {
    let mut newly = Vec::new();
    for achievement in ACHIEVEMENTS {
        if state.achievements.iter().any(|a| a == achievement.id) {
            continue;
        }
        if (achievement.check)(state) {
            state.achievements.push(achievement.id.to_string());
            newly.push(achievement.id);
            info!("achievement unlocked: {}", achievement.id);
        }
    }
    newly
}

/// Weekly rollover bookkeeping for streak- and high-water-based predicates.
pub fn update_weekly_progress(state: &mut GameState) {
    let p = &mut state.progress;

    if state.total_debt <= 0.0 {
        p.debt_free_weeks += 1;
    } else {
        p.debt_free_weeks = 0;
    }
    if state.stress <= 20 {
        p.stress_free_weeks += 1;
    } else {
        p.stress_free_weeks = 0;
    }

    p.max_skill_level = p.max_skill_level.max(state.skills.highest());
    p.investment_value = p.investment_value.max(state.investments.total);

    if state.skills.all_at_least(80) {
        p.skill_master_weeks += 1;
    } else {
        p.skill_master_weeks = 0;
    }

    let net_worth = state.cash + state.investments.total - state.total_debt;
    if net_worth >= 1_000_000.0 {
        p.millionaire_weeks += 1;
    } else {
        p.millionaire_weeks = 0;
    }
}
