//! Scenario and choice data types shared across the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scenario category, drawn by weighted random selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Finance,
    Hustling,
    Social,
    Health,
    Income,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Hustling => "hustling",
            Self::Social => "social",
            Self::Health => "health",
            Self::Income => "income",
        }
    }

    /// The skill a category primarily exercises.
    #[must_use]
    pub const fn main_skill(self) -> SkillId {
        match self {
            Self::Finance => SkillId::Finance,
            Self::Hustling | Self::Income => SkillId::Hustling,
            Self::Social => SkillId::Social,
            Self::Health => SkillId::Health,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finance" => Ok(Self::Finance),
            "hustling" => Ok(Self::Hustling),
            "social" => Ok(Self::Social),
            "health" => Ok(Self::Health),
            "income" => Ok(Self::Income),
            _ => Err(()),
        }
    }
}

/// One of the four trainable player skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillId {
    Finance,
    Social,
    Hustling,
    Health,
}

impl SkillId {
    pub const ALL: [Self; 4] = [Self::Finance, Self::Social, Self::Hustling, Self::Health];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Social => "social",
            Self::Hustling => "hustling",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finance" => Ok(Self::Finance),
            "social" => Ok(Self::Social),
            "hustling" => Ok(Self::Hustling),
            "health" => Ok(Self::Health),
            _ => Err(()),
        }
    }
}

/// Debt flavor; each carries its own annual interest rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtKind {
    CreditCard,
    StudentLoan,
    CarLoan,
    PersonalLoan,
    Medical,
    Payday,
}

impl DebtKind {
    pub const ALL: [Self; 6] = [
        Self::CreditCard,
        Self::StudentLoan,
        Self::CarLoan,
        Self::PersonalLoan,
        Self::Medical,
        Self::Payday,
    ];

    #[must_use]
    pub const fn annual_rate(self) -> f64 {
        match self {
            Self::CreditCard => 0.18,
            Self::StudentLoan => 0.05,
            Self::CarLoan => 0.06,
            Self::PersonalLoan => 0.12,
            Self::Medical => 0.08,
            Self::Payday => 0.36,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "creditCard",
            Self::StudentLoan => "studentLoan",
            Self::CarLoan => "carLoan",
            Self::PersonalLoan => "personalLoan",
            Self::Medical => "medical",
            Self::Payday => "payday",
        }
    }
}

/// Investable asset class with its fixed annual return rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Stocks,
    Bonds,
    RealEstate,
    Crypto,
}

impl AssetKind {
    pub const ALL: [Self; 4] = [Self::Stocks, Self::Bonds, Self::RealEstate, Self::Crypto];

    #[must_use]
    pub const fn annual_rate(self) -> f64 {
        match self {
            Self::Stocks => 0.10,
            Self::Bonds => 0.05,
            Self::RealEstate => 0.08,
            Self::Crypto => 0.15,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::RealEstate => "realEstate",
            Self::Crypto => "crypto",
        }
    }
}

/// Passive income stream fed by passive-type events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassiveKind {
    RentalIncome,
    Dividends,
    SideBusiness,
    Royalties,
}

impl PassiveKind {
    #[must_use]
    pub const fn annual_rate(self) -> f64 {
        match self {
            Self::RentalIncome => 0.07,
            Self::Dividends => 0.06,
            Self::SideBusiness => 0.12,
            Self::Royalties => 0.08,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RentalIncome => "rentalIncome",
            Self::Dividends => "dividends",
            Self::SideBusiness => "sideBusiness",
            Self::Royalties => "royalties",
        }
    }
}

/// Career event flavor for job-tagged templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Promotion,
    Networking,
    Freelance,
    Entrepreneur,
    Remote,
    SkillUp,
    Mentorship,
    Certification,
}

/// Per-skill deltas carried by a choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEffects {
    pub finance: i32,
    pub social: i32,
    pub hustling: i32,
    pub health: i32,
}

impl SkillEffects {
    #[must_use]
    pub const fn get(&self, skill: SkillId) -> i32 {
        match skill {
            SkillId::Finance => self.finance,
            SkillId::Social => self.social,
            SkillId::Hustling => self.hustling,
            SkillId::Health => self.health,
        }
    }

    pub fn set(&mut self, skill: SkillId, delta: i32) {
        match skill {
            SkillId::Finance => self.finance = delta,
            SkillId::Social => self.social = delta,
            SkillId::Hustling => self.hustling = delta,
            SkillId::Health => self.health = delta,
        }
    }
}

/// Debt creation triggered by a "take on debt" choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtSpec {
    pub kind: DebtKind,
    pub amount: f64,
}

/// Asset purchase or sale attached to a choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSpec {
    pub asset: AssetKind,
    pub amount: f64,
}

/// Weekly passive stream created by a passive-type choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassiveSpec {
    pub kind: PassiveKind,
    pub weekly_amount: f64,
}

/// Career experience and income granted by a job-type choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobEffect {
    pub experience: i32,
    pub income: f64,
}

/// Full effect bundle for one choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceEffects {
    pub cash: f64,
    pub stress: i32,
    pub time: i32,
    pub income: f64,
    pub skills: SkillEffects,
    pub debt: Option<DebtSpec>,
    pub investment: Option<InvestmentSpec>,
    pub sell_investment: Option<InvestmentSpec>,
    pub passive: Option<PassiveSpec>,
    pub job: Option<JobEffect>,
}

/// One option within a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub effects: ChoiceEffects,
}

/// A single randomly generated decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub base_cost: f64,
    pub time_cost: i32,
    pub choices: Vec<Choice>,
}

/// Record of one applied choice, kept on the session for replay/debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub scenario_id: u64,
    pub scenario_title: String,
    pub choice_id: String,
    pub day: u32,
    pub week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_through_str() {
        for cat in [
            Category::Finance,
            Category::Hustling,
            Category::Social,
            Category::Health,
            Category::Income,
        ] {
            assert_eq!(cat.as_str().parse::<Category>(), Ok(cat));
        }
        assert!("arcade".parse::<Category>().is_err());
    }

    #[test]
    fn skill_effects_indexing() {
        let mut fx = SkillEffects::default();
        fx.set(SkillId::Hustling, 7);
        assert_eq!(fx.get(SkillId::Hustling), 7);
        assert_eq!(fx.get(SkillId::Finance), 0);
    }

    #[test]
    fn choice_effects_deserialize_with_gaps() {
        let fx: ChoiceEffects = serde_json::from_str(r#"{"cash": -120.0}"#).unwrap();
        assert!((fx.cash + 120.0).abs() < f64::EPSILON);
        assert_eq!(fx.stress, 0);
        assert!(fx.debt.is_none());
    }
}
