//! Game session state: the single mutable aggregate the engines operate on.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CREDIT_SCORE_MAX, CREDIT_SCORE_MIN, SKILL_MAX, STARTING_CASH, STARTING_CREDIT_SCORE,
    STARTING_SKILL, STRESS_MAX, WEEKLY_TIME_BUDGET,
};
use crate::data::{AssetKind, DebtKind, HistoryEntry, PassiveKind, Scenario, SkillId};
use crate::job::JOB_LADDER;
use crate::numbers::{i32_to_f64, sane};

/// The four trainable skills, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub finance: i32,
    pub social: i32,
    pub hustling: i32,
    pub health: i32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            finance: STARTING_SKILL,
            social: STARTING_SKILL,
            hustling: STARTING_SKILL,
            health: STARTING_SKILL,
        }
    }
}

impl Skills {
    #[must_use]
    pub const fn get(&self, skill: SkillId) -> i32 {
        match skill {
            SkillId::Finance => self.finance,
            SkillId::Social => self.social,
            SkillId::Hustling => self.hustling,
            SkillId::Health => self.health,
        }
    }

    pub fn add(&mut self, skill: SkillId, delta: i32) {
        let slot = match skill {
            SkillId::Finance => &mut self.finance,
            SkillId::Social => &mut self.social,
            SkillId::Hustling => &mut self.hustling,
            SkillId::Health => &mut self.health,
        };
        *slot = (*slot + delta).clamp(0, SKILL_MAX);
    }

    pub fn clamp(&mut self) {
        self.finance = self.finance.clamp(0, SKILL_MAX);
        self.social = self.social.clamp(0, SKILL_MAX);
        self.hustling = self.hustling.clamp(0, SKILL_MAX);
        self.health = self.health.clamp(0, SKILL_MAX);
    }

    #[must_use]
    pub fn all_at_least(&self, floor: i32) -> bool {
        self.finance >= floor && self.social >= floor && self.hustling >= floor && self.health >= floor
    }

    #[must_use]
    pub fn highest(&self) -> i32 {
        self.finance.max(self.social).max(self.hustling).max(self.health)
    }
}

/// One outstanding debt entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debt {
    pub id: u64,
    pub kind: DebtKind,
    pub amount: f64,
    pub original_amount: f64,
    pub interest_rate: f64,
    pub monthly_payment: f64,
    pub due_week: u32,
}

impl Default for Debt {
    fn default() -> Self {
        Self {
            id: 0,
            kind: DebtKind::CreditCard,
            amount: 0.0,
            original_amount: 0.0,
            interest_rate: DebtKind::CreditCard.annual_rate(),
            monthly_payment: 0.0,
            due_week: 0,
        }
    }
}

/// Debt buckets, one per kind. Sweep order is the declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debts {
    pub credit_cards: Vec<Debt>,
    pub student_loans: Vec<Debt>,
    pub car_loans: Vec<Debt>,
    pub personal_loans: Vec<Debt>,
    pub medical_debt: Vec<Debt>,
    pub payday_loans: Vec<Debt>,
}

impl Debts {
    pub fn bucket_mut(&mut self, kind: DebtKind) -> &mut Vec<Debt> {
        match kind {
            DebtKind::CreditCard => &mut self.credit_cards,
            DebtKind::StudentLoan => &mut self.student_loans,
            DebtKind::CarLoan => &mut self.car_loans,
            DebtKind::PersonalLoan => &mut self.personal_loans,
            DebtKind::Medical => &mut self.medical_debt,
            DebtKind::Payday => &mut self.payday_loans,
        }
    }

    pub fn buckets_mut(&mut self) -> [&mut Vec<Debt>; 6] {
        [
            &mut self.credit_cards,
            &mut self.student_loans,
            &mut self.car_loans,
            &mut self.personal_loans,
            &mut self.medical_debt,
            &mut self.payday_loans,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Debt> {
        self.credit_cards
            .iter()
            .chain(self.student_loans.iter())
            .chain(self.car_loans.iter())
            .chain(self.personal_loans.iter())
            .chain(self.medical_debt.iter())
            .chain(self.payday_loans.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.iter().map(|d| sane(d.amount)).sum()
    }

    #[must_use]
    pub fn total_monthly_payments(&self) -> f64 {
        self.iter().map(|d| sane(d.monthly_payment)).sum()
    }
}

/// Invested principal per asset class; `total` is a cached sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Investments {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub crypto: f64,
    pub total: f64,
}

impl Investments {
    pub fn bucket_mut(&mut self, asset: AssetKind) -> &mut f64 {
        match asset {
            AssetKind::Stocks => &mut self.stocks,
            AssetKind::Bonds => &mut self.bonds,
            AssetKind::RealEstate => &mut self.real_estate,
            AssetKind::Crypto => &mut self.crypto,
        }
    }

    #[must_use]
    pub const fn bucket(&self, asset: AssetKind) -> f64 {
        match asset {
            AssetKind::Stocks => self.stocks,
            AssetKind::Bonds => self.bonds,
            AssetKind::RealEstate => self.real_estate,
            AssetKind::Crypto => self.crypto,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total = sane(self.stocks) + sane(self.bonds) + sane(self.real_estate) + sane(self.crypto);
    }

    /// Number of distinct asset classes currently held.
    #[must_use]
    pub fn held_classes(&self) -> usize {
        AssetKind::ALL.iter().filter(|a| self.bucket(**a) > 0.0).count()
    }
}

/// Weekly passive income streams; `investments` is derived from holdings and
/// `total` is recomputed, never independently mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveIncome {
    pub investments: f64,
    pub rental_income: f64,
    pub dividends: f64,
    pub side_business: f64,
    pub royalties: f64,
    pub total: f64,
}

impl PassiveIncome {
    pub fn stream_mut(&mut self, kind: PassiveKind) -> &mut f64 {
        match kind {
            PassiveKind::RentalIncome => &mut self.rental_income,
            PassiveKind::Dividends => &mut self.dividends,
            PassiveKind::SideBusiness => &mut self.side_business,
            PassiveKind::Royalties => &mut self.royalties,
        }
    }

    /// Weekly total from event-built streams, excluding investment yield.
    #[must_use]
    pub fn stream_total(&self) -> f64 {
        sane(self.rental_income) + sane(self.dividends) + sane(self.side_business) + sane(self.royalties)
    }

    pub fn recompute_total(&mut self) {
        self.total = sane(self.investments) + self.stream_total();
    }
}

/// Career position on the fixed job ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStatus {
    pub title: String,
    pub level: u32,
    pub experience: i32,
}

impl Default for JobStatus {
    fn default() -> Self {
        Self {
            title: JOB_LADDER[0].title.to_string(),
            level: JOB_LADDER[0].level,
            experience: 0,
        }
    }
}

/// Long-running counters feeding achievement predicates, updated on weekly
/// rollover and on specific events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementProgress {
    pub total_earnings: f64,
    pub debt_free_weeks: u32,
    pub stress_free_weeks: u32,
    pub millionaire_weeks: u32,
    pub skill_master_weeks: u32,
    pub max_skill_level: i32,
    pub investment_value: f64,
    pub total_job_exp: i32,
    pub debt_paid: f64,
    pub investment_count: u32,
}

/// The per-player session aggregate. Mutated exclusively by the effect and
/// progression engines; serialized whole by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub seed: u64,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,

    pub cash: f64,
    pub stress: i32,
    pub day: u32,
    pub week: u32,
    pub time: i32,
    pub income: f64,
    pub skills: Skills,
    pub credit_score: i32,

    pub debts: Debts,
    pub total_debt: f64,
    pub monthly_debt_payments: f64,
    pub investments: Investments,
    pub passive_income: PassiveIncome,
    pub job: JobStatus,

    pub total_decisions: u32,
    pub successful_decisions: u32,
    pub consecutive_good_decisions: u32,
    pub high_stress_streak: u32,
    pub last_high_stress_penalty_week: u32,

    pub achievements: Vec<String>,
    pub progress: AchievementProgress,

    pub current_scenario: Option<Scenario>,
    pub completed_scenarios: Vec<u64>,
    pub history: Vec<HistoryEntry>,
    pub scenario_counter: u64,
    pub debt_counter: u64,

    pub game_over: bool,
    pub game_over_reason: Option<String>,
}

impl Default for GameState {
    // Deserialization fills missing fields from this value, so the RNG slot
    // must stay empty for rng() to reseed from the stored seed.
    fn default() -> Self {
        Self {
            rng: None,
            ..Self::new(0)
        }
    }
}

impl GameState {
    /// Fresh session state for a new player.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Some(ChaCha20Rng::seed_from_u64(seed)),
            cash: STARTING_CASH,
            stress: 0,
            day: 1,
            week: 1,
            time: WEEKLY_TIME_BUDGET,
            income: 0.0,
            skills: Skills::default(),
            credit_score: STARTING_CREDIT_SCORE,
            debts: Debts::default(),
            total_debt: 0.0,
            monthly_debt_payments: 0.0,
            investments: Investments::default(),
            passive_income: PassiveIncome::default(),
            job: JobStatus::default(),
            total_decisions: 0,
            successful_decisions: 0,
            consecutive_good_decisions: 0,
            high_stress_streak: 0,
            last_high_stress_penalty_week: 0,
            achievements: Vec::new(),
            progress: AchievementProgress::default(),
            current_scenario: None,
            completed_scenarios: Vec::new(),
            history: Vec::new(),
            scenario_counter: 0,
            debt_counter: 0,
            game_over: false,
            game_over_reason: None,
        }
    }

    /// Mutable access to the session RNG, re-seeding from `seed` after a
    /// deserialization round-trip dropped it.
    pub fn rng(&mut self) -> &mut ChaCha20Rng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| ChaCha20Rng::seed_from_u64(seed))
    }

    /// Clamp every bounded resource into its legal range.
    pub fn clamp_resources(&mut self) {
        self.cash = sane(self.cash).max(0.0);
        self.stress = self.stress.clamp(0, STRESS_MAX);
        self.skills.clamp();
        self.credit_score = self.credit_score.clamp(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX);
        self.total_debt = sane(self.total_debt).max(0.0);
        self.time = self.time.max(0);
    }

    /// Net worth for ranking: cash + investments − debt.
    #[must_use]
    pub fn net_worth(&self) -> f64 {
        sane(self.cash) + sane(self.investments.total) - sane(self.total_debt)
    }

    /// Monthly debt payments over monthly income, as a percentage.
    /// Returns 0 when there is no income to measure against.
    #[must_use]
    pub fn debt_to_income_ratio(&self) -> f64 {
        let monthly_income =
            (sane(self.income) + sane(self.passive_income.total)) * i32_to_f64(4);
        if monthly_income <= 0.0 {
            return 0.0;
        }
        sane(self.monthly_debt_payments) / monthly_income * 100.0
    }

    pub fn end_game(&mut self, reason: &str) {
        self.game_over = true;
        self.game_over_reason = Some(reason.to_string());
    }
}
