//! Decision catalog structures

use serde::{Deserialize, Serialize};

use super::Effects;
use crate::model::{LegalForm, Stage, Startup};

/// Decision category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionCategory {
    Legal,
    Funding,
    Product,
    Marketing,
    Hiring,
    Operations,
}

/// Minimums an option expects the startup to meet
///
/// Purely advisory: the engine resolves an option whether or not these hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub cash: Option<i64>,
    pub stage: Option<Stage>,
    pub employees: Option<i64>,
}

impl Requirements {
    pub fn is_met_by(&self, startup: &Startup) -> bool {
        self.cash.map_or(true, |cash| startup.cash >= cash)
            && self.stage.map_or(true, |stage| startup.stage >= stage)
            && self.employees.map_or(true, |n| startup.employees >= n)
    }
}

/// One answer to a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub id: String,
    pub text: String,
    /// Shown to the player only; cash moves through `effects`
    #[serde(default)]
    pub cost: i64,
    /// Months consumed by resolving this option
    pub time_required: u32,
    pub requirements: Option<Requirements>,
    #[serde(default)]
    pub effects: Effects,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Legal form the startup takes on once this option resolves
    pub legal_form: Option<LegalForm>,
}

impl DecisionOption {
    /// Advisory requirement check for presentation
    pub fn meets_requirements(&self, startup: &Startup) -> bool {
        self.requirements
            .as_ref()
            .map_or(true, |req| req.is_met_by(startup))
    }
}

/// Decision template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DecisionCategory,
    pub stage: Stage,
    pub options: Vec<DecisionOption>,
    pub time_limit: Option<u32>,
    pub consequences: Option<String>,
}

impl Decision {
    pub fn option(&self, option_id: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Whether at least one option's listed cost fits into `cash`
    pub fn is_affordable_with(&self, cash: i64) -> bool {
        self.options.iter().any(|o| o.cost <= cash)
    }
}
