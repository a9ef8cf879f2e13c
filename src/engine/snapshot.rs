//! Serializable view of a session for presentation layers

use serde::Serialize;

use super::turn::GameState;
use crate::config::{Decision, GameConfig, GameEvent, Milestone};
use crate::error::Result;
use crate::model::{Founder, Startup};

/// Figures a dashboard derives from the startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stage_label: &'static str,
    pub legal_form_label: Option<&'static str>,
    pub monthly_net: i64,
    /// Whole months of runway; `None` when nothing is burned
    pub runway_months: Option<i64>,
    pub low_on_cash: bool,
    pub overall_progress: i64,
    pub achieved_milestones: usize,
    pub total_milestones: usize,
}

impl Dashboard {
    fn new(state: &GameState, config: &GameConfig) -> Self {
        let startup = &state.startup;
        Self {
            stage_label: startup.stage.label(),
            legal_form_label: startup.legal_form.map(|f| f.label()),
            monthly_net: startup.monthly_net(),
            runway_months: startup.runway_months(),
            low_on_cash: startup.is_low_on_cash(config.low_runway_months),
            overall_progress: startup.overall_progress(),
            achieved_milestones: state.achieved_milestones().count(),
            total_milestones: state.milestones.len(),
        }
    }
}

/// Owned copy of everything the player can see
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub started: bool,
    pub founder: Option<Founder>,
    pub startup: Option<Startup>,
    pub current_decisions: Vec<Decision>,
    pub events: Vec<GameEvent>,
    pub milestones: Vec<Milestone>,
    pub dashboard: Option<Dashboard>,
}

impl GameSnapshot {
    pub(crate) fn capture(state: Option<&GameState>, config: &GameConfig) -> Self {
        match state {
            Some(state) => Self {
                started: true,
                founder: Some(state.founder.clone()),
                startup: Some(state.startup.clone()),
                current_decisions: state.current_decisions.clone(),
                events: state.events.clone(),
                milestones: state.milestones.clone(),
                dashboard: Some(Dashboard::new(state, config)),
            },
            None => Self {
                started: false,
                founder: None,
                startup: None,
                current_decisions: Vec::new(),
                events: Vec::new(),
                milestones: Vec::new(),
                dashboard: None,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
