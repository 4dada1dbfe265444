//! Career ladder and job experience accounting.

use log::info;

use crate::numbers::sane;
use crate::state::GameState;

/// One rung on the career ladder.
#[derive(Debug, Clone, Copy)]
pub struct JobTier {
    pub title: &'static str,
    pub level: u32,
    pub base_income: f64,
    /// Experience needed to advance past this tier; `None` for the top rung.
    pub promotion_exp: Option<i32>,
}

const fn tier(
    title: &'static str,
    level: u32,
    base_income: f64,
    promotion_exp: Option<i32>,
) -> JobTier {
    JobTier {
        title,
        level,
        base_income,
        promotion_exp,
    }
}

pub const JOB_LADDER: &[JobTier] = &[
    tier("Student", 1, 0.0, Some(50)),
    tier("Intern", 2, 200.0, Some(100)),
    tier("Junior Developer", 3, 400.0, Some(200)),
    tier("Software Developer", 4, 600.0, Some(400)),
    tier("Senior Developer", 5, 800.0, Some(600)),
    tier("Tech Lead", 6, 1_000.0, Some(800)),
    tier("Engineering Manager", 7, 1_200.0, Some(1_000)),
    tier("Director", 8, 1_500.0, Some(1_200)),
    tier("VP Engineering", 9, 1_800.0, Some(1_500)),
    tier("CTO", 10, 2_200.0, Some(2_000)),
    tier("CEO", 11, 3_000.0, None),
];

#[must_use]
fn tier_for_level(level: u32) -> &'static JobTier {
    JOB_LADDER
        .iter()
        .find(|t| t.level == level)
        .unwrap_or(&JOB_LADDER[0])
}

/// Apply a job-type choice: bank experience and extra income, promoting along
/// the ladder while thresholds are crossed. Promotion replaces the old tier's
/// base income with the new tier's and carries surplus experience forward.
pub fn add_job_experience(state: &mut GameState, experience: i32, income: f64) {
    state.job.experience += experience.max(0);
    state.progress.total_job_exp += experience.max(0);
    state.income += sane(income);

    loop {
        let current = tier_for_level(state.job.level);
        let Some(threshold) = current.promotion_exp else {
            break;
        };
        if state.job.experience < threshold {
            break;
        }
        let next = tier_for_level(current.level + 1);
        state.job.experience -= threshold;
        state.job.level = next.level;
        state.job.title = next.title.to_string();
        state.income += next.base_income - current.base_income;
        info!("promoted to {} (level {})", next.title, next.level);
    }
}
