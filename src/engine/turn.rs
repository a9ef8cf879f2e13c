//! Turn reducers
//!
//! Every function here takes the game state by mutable reference and is
//! total: ids that don't match anything make the call a no-op.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::{ContentCatalog, Decision, EffectField, Effects, GameConfig, GameEvent, Milestone};
use crate::milestone::{evaluate_milestones, MilestoneInfo};
use crate::model::{clamp_percent, Founder, LegalForm, Startup};
use crate::selector::select_next_decision;

/// Everything a running game owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub founder: Founder,
    pub startup: Startup,
    /// Decisions currently waiting for an answer
    pub current_decisions: Vec<Decision>,
    /// Events surfaced so far and not yet dismissed
    pub events: Vec<GameEvent>,
    pub milestones: Vec<Milestone>,
}

impl GameState {
    /// Fresh state with every milestone reset to unachieved
    pub fn new(founder: Founder, startup: Startup, milestones: &[Milestone]) -> Self {
        Self {
            founder,
            startup,
            current_decisions: Vec::new(),
            events: Vec::new(),
            milestones: milestones
                .iter()
                .cloned()
                .map(|m| Milestone { achieved: false, ..m })
                .collect(),
        }
    }

    pub fn presented_ids(&self) -> Vec<&str> {
        self.current_decisions.iter().map(|d| d.id.as_str()).collect()
    }

    pub fn achieved_milestones(&self) -> impl Iterator<Item = &Milestone> + '_ {
        self.milestones.iter().filter(|m| m.achieved)
    }
}

/// Outcome of answering a pending decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub decision_id: String,
    pub option_id: String,
    /// Months that passed while carrying out the option
    pub months: u32,
    pub legal_form: Option<LegalForm>,
}

/// What happened during one call to [`advance_month`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub month: u32,
    pub cash_delta: i64,
    pub triggered_events: Vec<String>,
    pub milestones: Vec<MilestoneInfo>,
    pub new_decision: Option<String>,
}

/// Fold a sparse effect record into founder and startup
///
/// Percentages, energy and stress are clamped to `[0, 100]`; money and
/// headcount accumulate without bounds, saturating at the `i64` limits.
pub fn apply_effects(founder: &mut Founder, startup: &mut Startup, effects: &Effects) {
    for (field, delta) in effects.iter() {
        let (value, bounded) = match field {
            EffectField::Cash => (&mut startup.cash, false),
            EffectField::MonthlyBurn => (&mut startup.monthly_burn, false),
            EffectField::MonthlyRevenue => (&mut startup.monthly_revenue, false),
            EffectField::Customers => (&mut startup.customers, false),
            EffectField::Employees => (&mut startup.employees, false),
            EffectField::ProductDevelopment => (&mut startup.product_development, true),
            EffectField::MarketValidation => (&mut startup.market_validation, true),
            EffectField::BrandAwareness => (&mut startup.brand_awareness, true),
            EffectField::Energy => (&mut founder.energy, true),
            EffectField::Stress => (&mut founder.stress, true),
        };

        let sum = value.saturating_add(delta);
        *value = if bounded { clamp_percent(sum) } else { sum };
    }
}

/// Answer a pending decision with one of its options
///
/// Option requirements are not enforced. Returns `None` and changes nothing
/// when the decision is not pending or the option doesn't belong to it.
pub fn resolve_decision(state: &mut GameState, decision_id: &str, option_id: &str) -> Option<Resolution> {
    let index = state
        .current_decisions
        .iter()
        .position(|d| d.id == decision_id)?;
    let option = state.current_decisions[index].option(option_id)?.clone();

    apply_effects(&mut state.founder, &mut state.startup, &option.effects);
    if let Some(form) = option.legal_form {
        state.startup.legal_form = Some(form);
    }
    state.startup.month = state.startup.month.saturating_add(option.time_required);
    state.current_decisions.remove(index);

    debug!(
        decision = decision_id,
        option = option_id,
        months = option.time_required,
        month = state.startup.month,
        "decision resolved"
    );

    Some(Resolution {
        decision_id: decision_id.to_string(),
        option_id: option.id,
        months: option.time_required,
        legal_form: option.legal_form,
    })
}

/// Surface one more eligible decision, moving the startup into its stage
///
/// Returns the id of the decision added to the working set.
pub fn load_next_decision<R: Rng + ?Sized>(
    state: &mut GameState,
    catalog: &ContentCatalog,
    config: &GameConfig,
    rng: &mut R,
) -> Option<String> {
    let presented = state.presented_ids();
    let next = select_next_decision(&state.startup, &catalog.decisions, &presented, config, rng)?.clone();

    if next.stage != state.startup.stage {
        debug!(from = %state.startup.stage, to = %next.stage, "stage advanced");
        state.startup.stage = next.stage;
    }

    let id = next.id.clone();
    state.current_decisions.push(next);
    Some(id)
}

/// Run one month of upkeep, events and milestones
pub fn advance_month<R: Rng + ?Sized>(
    state: &mut GameState,
    catalog: &ContentCatalog,
    config: &GameConfig,
    rng: &mut R,
) -> MonthReport {
    let startup = &mut state.startup;
    let cash_delta = startup.monthly_net();
    startup.cash = startup.cash.saturating_add(cash_delta);
    startup.month = startup.month.saturating_add(1);

    let founder = &mut state.founder;
    founder.energy = clamp_percent(founder.energy.saturating_add(config.energy_recovery));
    founder.stress = clamp_percent(founder.stress.saturating_sub(config.stress_relief));

    let month = state.startup.month;
    let triggered: Vec<GameEvent> = catalog.events_at(month, state.startup.stage).cloned().collect();
    let triggered_events = triggered.iter().map(|e| e.id.clone()).collect();
    for event in &triggered {
        debug!(event = %event.id, month, "event triggered");
    }
    state.events.extend(triggered);

    let milestones = evaluate_milestones(&mut state.milestones, &mut state.startup);

    let new_decision = if state.current_decisions.is_empty() {
        load_next_decision(state, catalog, config, rng)
    } else {
        None
    };

    MonthReport {
        month,
        cash_delta,
        triggered_events,
        milestones,
        new_decision,
    }
}
