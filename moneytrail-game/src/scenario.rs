//! Scenario generation: weighted category draw, event templates, and
//! tag-driven choice construction.

use std::cmp::Ordering;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::constants::{
    AFFORDABILITY_RETRIES, HIGH_STRESS_THRESHOLD, INCOME_GAIN_WEEKLY_CAP, INVESTMENT_AMOUNTS,
    INVESTMENT_OFFER_CHANCE, MIN_PAYMENT_RATE, NEGOTIATED_RATE, PART_TIME_FACTOR,
    SECONDARY_SKILL_CHANCE, SELL_BACK_CHANCE,
    SKILL_BONUS_THRESHOLD, SKILL_MODIFIER_THRESHOLD, STRESS_COST_INFLATION_HIGH,
    STRESS_COST_INFLATION_MID, STRESS_INFLATION_MID_THRESHOLD,
};
use crate::data::{
    AssetKind, Category, Choice, ChoiceEffects, DebtKind, DebtSpec, InvestmentSpec, JobEffect,
    JobKind, PassiveKind, PassiveSpec, Scenario, SkillId,
};
use crate::numbers::{i32_to_f64, round_f64_to_i32, round_money};
use crate::state::GameState;
use crate::templates::{
    CATEGORY_WEIGHTS, EventKind, EventTemplate, describe, events_for, generic_rows, job_event_row,
};

/// Weighted category draw over one uniform roll.
fn pick_category<R: Rng>(rng: &mut R) -> Category {
    let roll: f64 = rng.r#gen();
    let mut acc = 0.0;
    for (category, weight) in CATEGORY_WEIGHTS {
        acc += weight;
        if roll < acc {
            return *category;
        }
    }
    Category::Finance
}

fn pick_template<R: Rng>(rng: &mut R, category: Category) -> EventTemplate {
    let pool = events_for(category);
    pool[rng.gen_range(0..pool.len())]
}

fn choice(id: &str, label: &str, effects: ChoiceEffects) -> Choice {
    Choice {
        id: id.to_string(),
        label: label.to_string(),
        effects,
    }
}

/// Four fixed-shape choices for a debt-tagged event.
fn debt_choices(template: &EventTemplate, kind: DebtKind) -> Vec<Choice> {
    let cost = template.cost;
    let mut pay_full = ChoiceEffects {
        cash: -cost,
        stress: -5,
        time: template.time,
        ..ChoiceEffects::default()
    };
    pay_full.skills.finance = 15;

    let mut pay_minimum = ChoiceEffects {
        cash: -round_money(cost * MIN_PAYMENT_RATE),
        stress: 10,
        time: 1,
        ..ChoiceEffects::default()
    };
    pay_minimum.skills.finance = 5;

    let mut take_debt = ChoiceEffects {
        cash: 0.0,
        stress: 20,
        time: 1,
        debt: Some(DebtSpec { kind, amount: cost }),
        ..ChoiceEffects::default()
    };
    take_debt.skills.finance = -5;

    let mut negotiate = ChoiceEffects {
        cash: -round_money(cost * NEGOTIATED_RATE),
        stress: 5,
        time: template.time + 2,
        ..ChoiceEffects::default()
    };
    negotiate.skills.finance = 20;
    negotiate.skills.social = 10;

    vec![
        choice("pay_full", "Pay it off in full", pay_full),
        choice("pay_minimum", "Make the minimum payment", pay_minimum),
        choice("take_debt", "Take on the debt", take_debt),
        choice("negotiate", "Negotiate a settlement", negotiate),
    ]
}

/// Invest fully / invest half / research / skip, with a weekly return
/// estimate from the asset's fixed rate.
fn passive_choices(template: &EventTemplate, kind: PassiveKind) -> Vec<Choice> {
    let cost = template.cost;
    let weekly = round_money(cost * kind.annual_rate() / 52.0);

    let invest_full = ChoiceEffects {
        cash: -cost,
        stress: template.stress,
        time: template.time,
        passive: Some(PassiveSpec {
            kind,
            weekly_amount: weekly,
        }),
        ..ChoiceEffects::default()
    };

    let invest_half = ChoiceEffects {
        cash: -round_money(cost / 2.0),
        stress: template.stress / 2,
        time: template.time,
        passive: Some(PassiveSpec {
            kind,
            weekly_amount: round_money(weekly / 2.0),
        }),
        ..ChoiceEffects::default()
    };

    let mut research = ChoiceEffects {
        time: template.time / 2,
        ..ChoiceEffects::default()
    };
    research.skills.finance = 15;

    let mut skip = ChoiceEffects::default();
    skip.skills.finance = -5;

    vec![
        choice("invest_full", "Invest fully", invest_full),
        choice("invest_half", "Invest half", invest_half),
        choice("research", "Research it first", research),
        choice("skip", "Skip the opportunity", skip),
    ]
}

/// Pursue / part-time / decline for a job-tagged event.
fn job_choices(template: &EventTemplate, kind: JobKind) -> Vec<Choice> {
    let row = job_event_row(kind);

    let pursue = ChoiceEffects {
        cash: -template.cost,
        stress: template.stress,
        time: template.time,
        skills: row.skills,
        job: Some(JobEffect {
            experience: row.experience,
            income: row.income,
        }),
        ..ChoiceEffects::default()
    };

    let scale = |v: i32| round_f64_to_i32(i32_to_f64(v) * PART_TIME_FACTOR);
    let mut part_skills = row.skills;
    part_skills.finance = scale(part_skills.finance);
    part_skills.social = scale(part_skills.social);
    part_skills.hustling = scale(part_skills.hustling);
    part_skills.health = scale(part_skills.health);
    let part_time = ChoiceEffects {
        cash: -round_money(template.cost / 2.0),
        stress: scale(template.stress),
        time: scale(template.time),
        skills: part_skills,
        job: Some(JobEffect {
            experience: scale(row.experience),
            income: round_money(row.income * PART_TIME_FACTOR),
        }),
        ..ChoiceEffects::default()
    };

    let mut decline = ChoiceEffects::default();
    decline.skills.hustling = -5;

    vec![
        choice("pursue", "Pursue it fully", pursue),
        choice("part_time", "Commit part-time", part_time),
        choice("decline", "Decline", decline),
    ]
}

/// Skill- and state-dependent adjustments applied to generic choices before
/// they are frozen into the scenario.
fn apply_choice_modifiers(state: &GameState, effects: &mut ChoiceEffects) {
    let finance = state.skills.finance;
    if finance > SKILL_MODIFIER_THRESHOLD {
        let f = i32_to_f64(finance.min(100));
        if effects.cash < 0.0 {
            effects.cash = round_money(effects.cash * (1.0 - f / 200.0));
        } else if effects.cash > 0.0 {
            effects.cash = round_money(effects.cash * (1.0 + f / 100.0));
        }
    }

    let social = state.skills.social;
    if social > SKILL_MODIFIER_THRESHOLD && effects.cash < 0.0 && state.cash + effects.cash < 0.0 {
        // A friend softens the blow, at a social cost in stress.
        effects.cash = round_money(effects.cash * 0.8);
        effects.stress += 5;
    }

    let hustling = state.skills.hustling;
    if hustling > SKILL_MODIFIER_THRESHOLD && effects.cash > 0.0 {
        let h = i32_to_f64(hustling.min(100));
        effects.cash = round_money(effects.cash * (1.0 + h / 150.0));
        effects.stress += round_f64_to_i32(h / 20.0);
    }

    let health = state.skills.health;
    if health > SKILL_MODIFIER_THRESHOLD && effects.stress < 0 {
        let h = i32_to_f64(health.min(100));
        effects.stress = round_f64_to_i32(i32_to_f64(effects.stress) * (1.0 + h / 200.0));
        if health > SKILL_BONUS_THRESHOLD {
            effects.cash += round_money(h / 10.0);
        }
    }

    if effects.cash < 0.0 {
        if state.stress > HIGH_STRESS_THRESHOLD {
            effects.cash = round_money(effects.cash * STRESS_COST_INFLATION_HIGH);
            effects.stress += 10;
        } else if state.stress > STRESS_INFLATION_MID_THRESHOLD {
            effects.cash = round_money(effects.cash * STRESS_COST_INFLATION_MID);
            effects.stress += 5;
        }
    }
}

/// Map the category's multiplier rows onto the event's base numbers.
fn generic_choices(state: &GameState, template: &EventTemplate, category: Category) -> Vec<Choice> {
    let main = category.main_skill();
    generic_rows(category)
        .iter()
        .map(|r| {
            let engaged = r.time_mult > 0.0;
            let mut effects = ChoiceEffects {
                cash: round_money(template.cost * r.cash_mult),
                stress: if engaged { r.stress + template.stress } else { r.stress },
                time: round_f64_to_i32(i32_to_f64(template.time) * r.time_mult),
                income: round_money((template.cost * r.income_mult).min(INCOME_GAIN_WEEKLY_CAP)),
                ..ChoiceEffects::default()
            };
            effects.skills.set(main, r.skill_delta);
            apply_choice_modifiers(state, &mut effects);
            choice(r.id, r.label, effects)
        })
        .collect()
}

/// Skill-gated bonus choices appended when the player has mastered the
/// relevant skill.
fn bonus_choices(state: &GameState, template: &EventTemplate, category: Category) -> Vec<Choice> {
    let mut extra = Vec::new();

    if category == Category::Finance
        && state.skills.finance >= SKILL_BONUS_THRESHOLD
        && template.cost > 0.0
    {
        let mut fx = ChoiceEffects {
            cash: -round_money(template.cost * 0.5),
            stress: -5,
            time: template.time,
            ..ChoiceEffects::default()
        };
        fx.skills.finance = 10;
        extra.push(choice(
            "expert_move",
            "Use your financial expertise",
            fx,
        ));
    }

    if state.skills.social >= SKILL_BONUS_THRESHOLD && state.cash < 100.0 {
        let mut fx = ChoiceEffects {
            cash: 200.0,
            stress: 15,
            ..ChoiceEffects::default()
        };
        fx.skills.social = -3;
        extra.push(choice("call_in_favor", "Call in a favor", fx));
    }

    if category == Category::Hustling
        && state.skills.hustling >= SKILL_BONUS_THRESHOLD
        && template.cost > 0.0
    {
        let mut fx = ChoiceEffects {
            cash: round_money(template.cost * 2.0),
            stress: 25,
            time: template.time * 2,
            ..ChoiceEffects::default()
        };
        fx.skills.hustling = 5;
        extra.push(choice("double_down", "Go all out on the hustle", fx));
    }

    if state.skills.health >= SKILL_BONUS_THRESHOLD && state.stress > 30 {
        let mut fx = ChoiceEffects {
            cash: -50.0,
            stress: -20,
            time: 4,
            ..ChoiceEffects::default()
        };
        fx.skills.health = 5;
        extra.push(choice("recover", "Take a recovery day", fx));
    }

    extra
}

/// 30% of scenarios carry an investment offer; holders of the offered asset
/// may also get a sell-back option.
fn investment_offers<R: Rng>(rng: &mut R, state: &GameState) -> Vec<Choice> {
    if rng.r#gen::<f64>() >= INVESTMENT_OFFER_CHANCE {
        return Vec::new();
    }
    let amount = INVESTMENT_AMOUNTS[rng.gen_range(0..INVESTMENT_AMOUNTS.len())];
    let asset = AssetKind::ALL[rng.gen_range(0..AssetKind::ALL.len())];

    let mut offers = vec![choice(
        &format!("buy_{}", asset.as_str()),
        &format!("Invest ${amount:.0} in {}", asset.as_str()),
        ChoiceEffects {
            cash: -amount,
            stress: 5,
            time: 2,
            investment: Some(InvestmentSpec { asset, amount }),
            ..ChoiceEffects::default()
        },
    )];

    let held = state.investments.bucket(asset);
    if held > 0.0 && rng.r#gen::<f64>() < SELL_BACK_CHANCE {
        let sale = round_money(held.min(amount));
        offers.push(choice(
            &format!("sell_{}", asset.as_str()),
            &format!("Sell ${sale:.0} of {}", asset.as_str()),
            ChoiceEffects {
                cash: sale,
                stress: -2,
                time: 1,
                sell_investment: Some(InvestmentSpec {
                    asset,
                    amount: sale,
                }),
                ..ChoiceEffects::default()
            },
        ));
    }
    offers
}

/// Guarantee every choice carries a delta for the category's main skill.
fn synthesize_skill_deltas<R: Rng>(rng: &mut R, choices: &mut [Choice], main: SkillId) {
    for c in choices.iter_mut() {
        if c.effects.skills.get(main) == 0 {
            let delta = if c.effects.cash < 0.0 {
                rng.gen_range(5..=10)
            } else if c.effects.cash > 0.0 {
                -rng.gen_range(1..=5)
            } else {
                rng.gen_range(2..=5)
            };
            c.effects.skills.set(main, delta);
        }
        if rng.r#gen::<f64>() < SECONDARY_SKILL_CHANCE {
            let others: Vec<SkillId> = SkillId::ALL.iter().copied().filter(|s| *s != main).collect();
            let secondary = others[rng.gen_range(0..others.len())];
            if c.effects.skills.get(secondary) == 0 {
                let magnitude = rng.gen_range(1..=3);
                let delta = if rng.r#gen::<bool>() { magnitude } else { -magnitude };
                c.effects.skills.set(secondary, delta);
            }
        }
    }
}

/// Money is never free: ensure hustling/finance scenarios always carry at
/// least one paying choice, at a stress and health price.
fn ensure_positive_cash<R: Rng>(rng: &mut R, choices: &mut Vec<Choice>, category: Category) {
    if !matches!(category, Category::Hustling | Category::Finance) {
        return;
    }
    if choices.iter().any(|c| c.effects.cash > 0.0) {
        return;
    }
    let mut fx = ChoiceEffects {
        cash: round_money(i32_to_f64(rng.gen_range(100..=300))),
        stress: rng.gen_range(20..=40),
        time: rng.gen_range(2..=4),
        ..ChoiceEffects::default()
    };
    fx.skills.set(category.main_skill(), 3);
    fx.skills.health = -rng.gen_range(5..=15);
    choices.push(choice(
        "hustle_harder",
        "Scrape together a quick job",
        fx,
    ));
}

/// Generate a scenario for the given state. Deterministic modulo the state's
/// seeded RNG.
pub fn generate_scenario(state: &mut GameState) -> Scenario {
    let seed = state.seed;
    let mut rng = state
        .rng
        .take()
        .unwrap_or_else(|| ChaCha20Rng::seed_from_u64(seed));

    state.scenario_counter += 1;
    let category = pick_category(&mut rng);
    let template = pick_template(&mut rng, category);

    let mut choices = match template.kind {
        EventKind::Debt(kind) => debt_choices(&template, kind),
        EventKind::Passive(kind) => passive_choices(&template, kind),
        EventKind::Job(kind) => job_choices(&template, kind),
        EventKind::Generic => generic_choices(state, &template, category),
    };
    choices.extend(bonus_choices(state, &template, category));
    choices.extend(investment_offers(&mut rng, state));
    synthesize_skill_deltas(&mut rng, &mut choices, category.main_skill());
    ensure_positive_cash(&mut rng, &mut choices, category);

    let phrase = rng.gen_range(0..5);
    let scenario = Scenario {
        id: state.scenario_counter,
        title: template.name.to_string(),
        description: describe(phrase, template.name),
        category,
        base_cost: template.cost,
        time_cost: template.time,
        choices,
    };
    debug!(
        "generated scenario {} '{}' ({}) with {} choices",
        scenario.id,
        scenario.title,
        category,
        scenario.choices.len()
    );

    state.rng = Some(rng);
    scenario
}

fn is_affordable(state: &GameState, scenario: &Scenario) -> bool {
    scenario
        .choices
        .iter()
        .any(|c| state.cash + c.effects.cash >= 0.0)
}

/// Generate the next scenario, re-rolling a bounded number of times until at
/// least one choice is affordable. On exhaustion, the cheapest choice's cash
/// effect is forced down to exactly `-cash` so one option always remains.
pub fn get_next_scenario(state: &mut GameState) -> Scenario {
    for _ in 0..AFFORDABILITY_RETRIES {
        let scenario = generate_scenario(state);
        if is_affordable(state, &scenario) {
            return scenario;
        }
    }

    let mut scenario = generate_scenario(state);
    if !is_affordable(state, &scenario) {
        let floor = -state.cash;
        if let Some(cheapest) = scenario.choices.iter_mut().max_by(|a, b| {
            a.effects
                .cash
                .partial_cmp(&b.effects.cash)
                .unwrap_or(Ordering::Equal)
        }) {
            cheapest.effects.cash = floor;
        }
    }
    scenario
}
