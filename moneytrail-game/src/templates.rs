//! Static event templates and choice-shaping tables.
//!
//! Everything the generator randomizes over lives here as plain data: event
//! pools per category, generic choice multiplier rows, job event payouts, and
//! the phrase bank for scenario descriptions.

use crate::data::{Category, DebtKind, JobKind, PassiveKind, SkillEffects};

/// What kind of choice set an event produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum EventKind {
    Generic,
    Debt(DebtKind),
    Passive(PassiveKind),
    Job(JobKind),
}

/// One entry in a category's event pool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EventTemplate {
    pub name: &'static str,
    pub cost: f64,
    pub time: i32,
    pub stress: i32,
    pub kind: EventKind,
}

const fn generic(name: &'static str, cost: f64, time: i32, stress: i32) -> EventTemplate {
    EventTemplate {
        name,
        cost,
        time,
        stress,
        kind: EventKind::Generic,
    }
}

pub(crate) const FINANCE_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Credit Card Bill",
        cost: 450.0,
        time: 1,
        stress: 8,
        kind: EventKind::Debt(DebtKind::CreditCard),
    },
    EventTemplate {
        name: "Student Loan Statement",
        cost: 600.0,
        time: 1,
        stress: 6,
        kind: EventKind::Debt(DebtKind::StudentLoan),
    },
    EventTemplate {
        name: "Car Repair Estimate",
        cost: 800.0,
        time: 3,
        stress: 12,
        kind: EventKind::Debt(DebtKind::CarLoan),
    },
    EventTemplate {
        name: "Emergency Room Bill",
        cost: 1_200.0,
        time: 2,
        stress: 15,
        kind: EventKind::Debt(DebtKind::Medical),
    },
    EventTemplate {
        name: "Payday Loan Offer",
        cost: 300.0,
        time: 1,
        stress: 10,
        kind: EventKind::Debt(DebtKind::Payday),
    },
    EventTemplate {
        name: "Rental Property Listing",
        cost: 5_000.0,
        time: 6,
        stress: 10,
        kind: EventKind::Passive(PassiveKind::RentalIncome),
    },
    EventTemplate {
        name: "Dividend Fund Prospectus",
        cost: 2_000.0,
        time: 2,
        stress: 4,
        kind: EventKind::Passive(PassiveKind::Dividends),
    },
    generic("Tax Deadline", 350.0, 4, 14),
    generic("Insurance Renewal", 280.0, 2, 6),
    generic("Budget Review", 0.0, 3, 4),
];

pub(crate) const HUSTLING_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Side Business Pitch",
        cost: 1_500.0,
        time: 10,
        stress: 12,
        kind: EventKind::Passive(PassiveKind::SideBusiness),
    },
    EventTemplate {
        name: "Royalty Deal",
        cost: 900.0,
        time: 8,
        stress: 8,
        kind: EventKind::Passive(PassiveKind::Royalties),
    },
    EventTemplate {
        name: "Freelance Contract",
        cost: 0.0,
        time: 12,
        stress: 10,
        kind: EventKind::Job(JobKind::Freelance),
    },
    EventTemplate {
        name: "Startup Weekend",
        cost: 200.0,
        time: 16,
        stress: 18,
        kind: EventKind::Job(JobKind::Entrepreneur),
    },
    generic("Flea Market Flip", 150.0, 6, 8),
    generic("Weekend Gig", 80.0, 10, 10),
    generic("Online Course Launch", 250.0, 14, 12),
    generic("Garage Sale", 30.0, 5, 4),
];

pub(crate) const SOCIAL_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Industry Meetup",
        cost: 60.0,
        time: 4,
        stress: 6,
        kind: EventKind::Job(JobKind::Networking),
    },
    EventTemplate {
        name: "Mentorship Offer",
        cost: 0.0,
        time: 6,
        stress: 4,
        kind: EventKind::Job(JobKind::Mentorship),
    },
    generic("Friend's Wedding", 320.0, 9, 8),
    generic("Birthday Dinner", 90.0, 4, 3),
    generic("Weekend Trip Invite", 400.0, 20, 6),
    generic("Family Visit", 120.0, 8, 5),
];

pub(crate) const HEALTH_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Remote Work Offer",
        cost: 0.0,
        time: 2,
        stress: -5,
        kind: EventKind::Job(JobKind::Remote),
    },
    generic("Gym Membership", 45.0, 5, -8),
    generic("Dental Checkup", 180.0, 2, 6),
    generic("Therapy Session", 130.0, 2, -12),
    generic("Meal Prep Sunday", 70.0, 4, -4),
    generic("Sleep Clinic Referral", 220.0, 3, -6),
];

pub(crate) const INCOME_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        name: "Promotion Review",
        cost: 0.0,
        time: 4,
        stress: 12,
        kind: EventKind::Job(JobKind::Promotion),
    },
    EventTemplate {
        name: "Certification Exam",
        cost: 150.0,
        time: 12,
        stress: 14,
        kind: EventKind::Job(JobKind::Certification),
    },
    EventTemplate {
        name: "Skill Workshop",
        cost: 80.0,
        time: 6,
        stress: 6,
        kind: EventKind::Job(JobKind::SkillUp),
    },
    generic("Overtime Offer", 240.0, 12, 10),
    generic("Referral Bonus", 300.0, 2, 2),
    generic("Contract Extension", 500.0, 8, 6),
];

#[must_use]
pub(crate) const fn events_for(category: Category) -> &'static [EventTemplate] {
    match category {
        Category::Finance => FINANCE_EVENTS,
        Category::Hustling => HUSTLING_EVENTS,
        Category::Social => SOCIAL_EVENTS,
        Category::Health => HEALTH_EVENTS,
        Category::Income => INCOME_EVENTS,
    }
}

/// Weighted category draw table. Weights sum to 1.0.
pub(crate) const CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::Income, 0.20),
    (Category::Finance, 0.28),
    (Category::Hustling, 0.28),
    (Category::Social, 0.12),
    (Category::Health, 0.12),
];

/// Row shaping one generic choice from an event's base numbers.
///
/// `cash_mult` is signed: negative rows spend the event cost, positive rows
/// earn a multiple of it. `income_mult` turns a share of the event cost into
/// a recurring weekly income gain (income-category rows only).
#[derive(Debug, Clone, Copy)]
pub(crate) struct GenericChoiceRow {
    pub id: &'static str,
    pub label: &'static str,
    pub cash_mult: f64,
    pub stress: i32,
    pub time_mult: f64,
    pub skill_delta: i32,
    pub income_mult: f64,
}

const fn row(
    id: &'static str,
    label: &'static str,
    cash_mult: f64,
    stress: i32,
    time_mult: f64,
    skill_delta: i32,
) -> GenericChoiceRow {
    GenericChoiceRow {
        id,
        label,
        cash_mult,
        stress,
        time_mult,
        skill_delta,
        income_mult: 0.0,
    }
}

const fn income_row(
    id: &'static str,
    label: &'static str,
    cash_mult: f64,
    stress: i32,
    time_mult: f64,
    skill_delta: i32,
    income_mult: f64,
) -> GenericChoiceRow {
    GenericChoiceRow {
        id,
        label,
        cash_mult,
        stress,
        time_mult,
        skill_delta,
        income_mult,
    }
}

pub(crate) const FINANCE_ROWS: &[GenericChoiceRow] = &[
    row("handle_now", "Handle it in full now", -1.0, 5, 1.0, 3),
    row("partial", "Cover part and defer the rest", -0.5, 10, 0.6, 1),
    row("shop_around", "Shop around for a better deal", -0.7, 2, 1.5, 5),
    row("ignore", "Ignore it for now", 0.0, 15, 0.0, -2),
];

pub(crate) const HUSTLING_ROWS: &[GenericChoiceRow] = &[
    row("all_in", "Go all in", 2.5, 20, 1.0, 5),
    row("safe_play", "Play it safe", 1.2, 8, 0.7, 2),
    row("test_waters", "Test the waters first", 0.5, 4, 0.4, 3),
    row("pass", "Pass on it", 0.0, -3, 0.0, -2),
];

pub(crate) const SOCIAL_ROWS: &[GenericChoiceRow] = &[
    row("show_up", "Show up and make it count", -1.0, -5, 1.0, 4),
    row("brief_visit", "Make a brief appearance", -0.4, 0, 0.5, 2),
    row("send_gift", "Send a gift instead", -0.6, 3, 0.1, 0),
    row("decline", "Politely decline", 0.0, 8, 0.0, -3),
];

pub(crate) const HEALTH_ROWS: &[GenericChoiceRow] = &[
    row("commit", "Commit fully", -1.0, -10, 1.0, 5),
    row("trial", "Try it once", -0.3, -4, 0.4, 2),
    row("home_remedy", "Handle it at home", -0.1, 2, 0.6, 1),
    row("skip", "Skip it", 0.0, 6, 0.0, -2),
];

pub(crate) const INCOME_ROWS: &[GenericChoiceRow] = &[
    income_row("take_all", "Take the full load", 1.0, 10, 1.0, 3, 0.25),
    income_row("take_half", "Split it with a coworker", 0.5, 5, 0.6, 1, 0.125),
    income_row("negotiate_terms", "Negotiate better terms first", 0.8, 8, 0.8, 4, 0.2),
    row("turn_down", "Turn it down", 0.0, -4, 0.0, -1),
];

#[must_use]
pub(crate) const fn generic_rows(category: Category) -> &'static [GenericChoiceRow] {
    match category {
        Category::Finance => FINANCE_ROWS,
        Category::Hustling => HUSTLING_ROWS,
        Category::Social => SOCIAL_ROWS,
        Category::Health => HEALTH_ROWS,
        Category::Income => INCOME_ROWS,
    }
}

/// Fixed payouts for job-tagged events.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JobEventRow {
    pub kind: JobKind,
    pub income: f64,
    pub experience: i32,
    pub skills: SkillEffects,
}

const fn skills(finance: i32, social: i32, hustling: i32, health: i32) -> SkillEffects {
    SkillEffects {
        finance,
        social,
        hustling,
        health,
    }
}

pub(crate) const JOB_EVENT_ROWS: &[JobEventRow] = &[
    JobEventRow {
        kind: JobKind::Promotion,
        income: 100.0,
        experience: 30,
        skills: skills(0, 10, 15, 0),
    },
    JobEventRow {
        kind: JobKind::Networking,
        income: 50.0,
        experience: 20,
        skills: skills(0, 20, 0, 0),
    },
    JobEventRow {
        kind: JobKind::Freelance,
        income: 200.0,
        experience: 25,
        skills: skills(0, 0, 20, 0),
    },
    JobEventRow {
        kind: JobKind::Entrepreneur,
        income: 0.0,
        experience: 50,
        skills: skills(20, 0, 30, 0),
    },
    JobEventRow {
        kind: JobKind::Remote,
        income: 75.0,
        experience: 15,
        skills: skills(0, 0, 0, 10),
    },
    JobEventRow {
        kind: JobKind::SkillUp,
        income: 0.0,
        experience: 40,
        skills: skills(0, 0, 25, 0),
    },
    JobEventRow {
        kind: JobKind::Mentorship,
        income: 0.0,
        experience: 35,
        skills: skills(0, 25, 15, 0),
    },
    JobEventRow {
        kind: JobKind::Certification,
        income: 0.0,
        experience: 45,
        skills: skills(0, 0, 30, 0),
    },
];

#[must_use]
pub(crate) fn job_event_row(kind: JobKind) -> JobEventRow {
    JOB_EVENT_ROWS
        .iter()
        .copied()
        .find(|r| r.kind == kind)
        .unwrap_or(JobEventRow {
            kind,
            income: 0.0,
            experience: 10,
            skills: skills(0, 0, 0, 0),
        })
}

/// Phrase bank for scenario descriptions; index drawn at random.
pub(crate) fn describe(phrase: usize, name: &str) -> String {
    match phrase % 5 {
        0 => format!("{name} just landed in your lap. What do you do?"),
        1 => format!("It's decision time: {name}."),
        2 => format!("{name} won't wait forever. Pick your move."),
        3 => format!("An unexpected turn: {name}."),
        _ => format!("{name} is on the table this week."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_weights_sum_to_one() {
        let total: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_category_has_events_and_rows() {
        for cat in [
            Category::Finance,
            Category::Hustling,
            Category::Social,
            Category::Health,
            Category::Income,
        ] {
            assert!(!events_for(cat).is_empty());
            assert!(generic_rows(cat).len() >= 3);
        }
    }

    #[test]
    fn job_rows_cover_all_kinds() {
        for kind in [
            JobKind::Promotion,
            JobKind::Networking,
            JobKind::Freelance,
            JobKind::Entrepreneur,
            JobKind::Remote,
            JobKind::SkillUp,
            JobKind::Mentorship,
            JobKind::Certification,
        ] {
            assert_eq!(job_event_row(kind).kind, kind);
        }
    }

    #[test]
    fn describe_uses_event_name() {
        for idx in 0..5 {
            assert!(describe(idx, "Tax Deadline").contains("Tax Deadline"));
        }
    }
}
